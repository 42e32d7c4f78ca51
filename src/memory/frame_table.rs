//! Frame table - the fixed set of slots pages are loaded into.
//!
//! A [`FrameTable`] is a passive array: policies query it and overwrite
//! slots, but it never decides what to evict.

use std::fmt;

use crate::common::{FrameId, PageId};

/// Content of one frame slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// No page loaded yet.
    Empty,
    /// The slot holds this page.
    Occupied(PageId),
}

impl Slot {
    /// The page in this slot, if any.
    #[inline]
    pub fn page(&self) -> Option<PageId> {
        match self {
            Slot::Occupied(page) => Some(*page),
            Slot::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[inline]
    pub fn holds(&self, page: PageId) -> bool {
        matches!(self, Slot::Occupied(p) if *p == page)
    }
}

/// Empty slots render as a single blank.
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Occupied(page) => write!(f, "{}", page),
            Slot::Empty => write!(f, " "),
        }
    }
}

/// A fixed number of frame slots.
///
/// The table is allocated with all slots [`Slot::Empty`] and never changes
/// size. Slot indices passed to [`slot_at`](Self::slot_at) and
/// [`place`](Self::place) must be in `[0, size())`.
///
/// # Invariant
/// No page is held by two slots at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    slots: Vec<Slot>,
}

impl FrameTable {
    /// Create a table of `frame_count` empty slots.
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; frame_count],
        }
    }

    /// Number of slots.
    #[inline]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Check whether `page` is resident in any slot.
    pub fn contains(&self, page: PageId) -> bool {
        self.find(page).is_some()
    }

    /// Slot holding `page`, if it is resident.
    pub fn find(&self, page: PageId) -> Option<FrameId> {
        self.slots.iter().position(|slot| slot.holds(page)).map(FrameId::new)
    }

    /// Content of slot `frame_id`.
    #[inline]
    pub fn slot_at(&self, frame_id: FrameId) -> Slot {
        self.slots[frame_id.0]
    }

    /// Overwrite slot `frame_id` with `page`, returning what it held before.
    pub fn place(&mut self, frame_id: FrameId, page: PageId) -> Slot {
        debug_assert!(
            !self.contains(page),
            "page {} already resident in the frame table",
            page
        );
        std::mem::replace(&mut self.slots[frame_id.0], Slot::Occupied(page))
    }

    /// Lowest-indexed empty slot, if any.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Slot::is_empty).map(FrameId::new)
    }

    /// Check whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Iterate over `(frame_id, page)` for every occupied slot, in slot order.
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.page().map(|page| (FrameId::new(idx), page)))
    }

    /// Copy of all slots, in slot order.
    pub fn snapshot(&self) -> Vec<Slot> {
        self.slots.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_table_new() {
        let table = FrameTable::new(3);
        assert_eq!(table.size(), 3);
        assert_eq!(table.first_empty(), Some(FrameId::new(0)));
        assert!(!table.is_full());
        assert!(table.snapshot().iter().all(Slot::is_empty));
    }

    #[test]
    fn test_frame_table_place_and_contains() {
        let mut table = FrameTable::new(2);

        assert_eq!(table.place(FrameId::new(1), PageId::new(7)), Slot::Empty);
        assert!(table.contains(PageId::new(7)));
        assert!(!table.contains(PageId::new(8)));
        assert_eq!(table.find(PageId::new(7)), Some(FrameId::new(1)));
        assert_eq!(table.find(PageId::new(8)), None);
        assert_eq!(table.slot_at(FrameId::new(1)), Slot::Occupied(PageId::new(7)));

        // Slot 0 is still empty, so it is the first free one
        assert_eq!(table.first_empty(), Some(FrameId::new(0)));
    }

    #[test]
    fn test_frame_table_overwrite_returns_previous() {
        let mut table = FrameTable::new(1);
        table.place(FrameId::new(0), PageId::new(1));

        let old = table.place(FrameId::new(0), PageId::new(2));
        assert_eq!(old, Slot::Occupied(PageId::new(1)));
        assert!(!table.contains(PageId::new(1)));
        assert!(table.is_full());
    }

    #[test]
    fn test_frame_table_resident_skips_empty() {
        let mut table = FrameTable::new(3);
        table.place(FrameId::new(0), PageId::new(4));
        table.place(FrameId::new(2), PageId::new(9));

        let resident: Vec<_> = table.resident().collect();
        assert_eq!(
            resident,
            vec![
                (FrameId::new(0), PageId::new(4)),
                (FrameId::new(2), PageId::new(9)),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "already resident")]
    #[cfg(debug_assertions)]
    fn test_frame_table_rejects_duplicate() {
        let mut table = FrameTable::new(2);
        table.place(FrameId::new(0), PageId::new(5));
        table.place(FrameId::new(1), PageId::new(5));
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(format!("{}", Slot::Empty), " ");
        assert_eq!(format!("{}", Slot::Occupied(PageId::new(12))), "12");
    }
}
