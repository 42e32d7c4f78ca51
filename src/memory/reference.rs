//! Reference sequence - the ordered page accesses driving one run.

use crate::common::PageId;

/// An immutable, ordered list of page accesses.
///
/// # Example
/// ```
/// use pagerep::{PageId, ReferenceSequence};
///
/// let refs = ReferenceSequence::from(vec![1, 2, 1]);
/// assert_eq!(refs.len(), 3);
/// assert_eq!(refs.next_use(PageId::new(1), 0), Some(2));
/// assert_eq!(refs.next_use(PageId::new(2), 1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceSequence {
    pages: Vec<PageId>,
}

impl ReferenceSequence {
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Number of accesses.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page accessed at `position`.
    #[inline]
    pub fn get(&self, position: usize) -> Option<PageId> {
        self.pages.get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// Position of the first access to `page` strictly after `position`.
    ///
    /// Walks forward through the remaining accesses; `None` means the page
    /// is never referenced again.
    pub fn next_use(&self, page: PageId, position: usize) -> Option<usize> {
        self.pages
            .iter()
            .enumerate()
            .skip(position + 1)
            .find(|&(_, &p)| p == page)
            .map(|(idx, _)| idx)
    }
}

impl From<Vec<u32>> for ReferenceSequence {
    fn from(pages: Vec<u32>) -> Self {
        Self::new(pages.into_iter().map(PageId::new).collect())
    }
}

impl FromIterator<PageId> for ReferenceSequence {
    fn from_iter<I: IntoIterator<Item = PageId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
