//! Page identifier type.

use std::fmt;
use std::str::FromStr;

/// Identifies a page in a reference sequence.
///
/// Page numbers are non-negative, so `u32` is enough for any realistic
/// reference string. There is no sentinel value: an empty frame is
/// represented by [`Slot::Empty`](crate::memory::Slot), not by a magic page.
///
/// # Example
/// ```
/// use pagerep::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert_eq!("42".parse::<PageId>().unwrap(), page_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<u32>().map(PageId)
    }
}

/// Renders the bare page number, which is what the trace output shows.
impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
