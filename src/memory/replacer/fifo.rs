//! FIFO (First-In-First-Out) replacement policy.

use log::debug;

use super::{Policy, Replacer};
use crate::common::FrameId;
use crate::memory::{FrameTable, ReferenceSequence};

/// Evicts pages in the order they were placed.
///
/// A single cursor walks the slots round-robin, starting at slot 0 and
/// advancing once per fault. Slots are never emptied during a run, so the
/// first `F` faults fill the table left to right and every later fault
/// overwrites the oldest placement. Hits do not move the cursor.
pub struct FifoReplacer {
    /// Slot the next faulting page goes into.
    next: FrameId,

    frame_count: usize,
}

impl FifoReplacer {
    /// Create a new FIFO replacer over `frame_count` slots.
    pub fn new(frame_count: usize) -> Self {
        Self {
            next: FrameId::new(0),
            frame_count,
        }
    }
}

impl Replacer for FifoReplacer {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn select_slot(
        &mut self,
        table: &FrameTable,
        _refs: &ReferenceSequence,
        position: usize,
    ) -> FrameId {
        let slot = self.next;
        self.next = slot.next(self.frame_count);

        if let Some(victim) = table.slot_at(slot).page() {
            debug!("fifo: access {} evicts page {} from {}", position, victim, slot);
        }
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    fn fill(table: &mut FrameTable, pages: &[u32]) {
        for (idx, &page) in pages.iter().enumerate() {
            table.place(FrameId::new(idx), PageId::new(page));
        }
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new(3);
        let table = FrameTable::new(3);
        let refs = ReferenceSequence::default();

        // Should hand out slots in round-robin order
        assert_eq!(replacer.select_slot(&table, &refs, 0), FrameId::new(0));
        assert_eq!(replacer.select_slot(&table, &refs, 1), FrameId::new(1));
        assert_eq!(replacer.select_slot(&table, &refs, 2), FrameId::new(2));
        assert_eq!(replacer.select_slot(&table, &refs, 3), FrameId::new(0));
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = FifoReplacer::new(2);
        let mut table = FrameTable::new(2);
        fill(&mut table, &[1, 2]);
        let refs = ReferenceSequence::from(vec![1, 2, 1, 1, 3]);

        replacer.select_slot(&table, &refs, 0);
        replacer.select_slot(&table, &refs, 1);

        // Page 1 was accessed again, but it was placed first
        replacer.record_access(PageId::new(1), 2);
        replacer.record_access(PageId::new(1), 3);
        assert_eq!(replacer.select_slot(&table, &refs, 4), FrameId::new(0));
    }

    #[test]
    fn test_fifo_single_frame() {
        let mut replacer = FifoReplacer::new(1);
        let table = FrameTable::new(1);
        let refs = ReferenceSequence::default();

        for position in 0..4 {
            assert_eq!(replacer.select_slot(&table, &refs, position), FrameId::new(0));
        }
    }
}
