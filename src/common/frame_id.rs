//! Frame identifier type.

use std::fmt;

/// Identifies a slot in the frame table.
///
/// Using `usize` so it indexes the slot vector directly: `slots[frame_id.0]`.
///
/// # Example
/// ```
/// use pagerep::FrameId;
///
/// let frame_id = FrameId::new(2);
/// assert_eq!(frame_id.next(3), FrameId::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The following slot in round-robin order over `frame_count` slots.
    #[inline]
    pub fn next(self, frame_count: usize) -> Self {
        FrameId((self.0 + 1) % frame_count)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_new() {
        let fid = FrameId::new(10);
        assert_eq!(fid.0, 10);
    }

    #[test]
    fn test_frame_id_next_wraps() {
        assert_eq!(FrameId::new(0).next(3), FrameId::new(1));
        assert_eq!(FrameId::new(2).next(3), FrameId::new(0));
        assert_eq!(FrameId::new(0).next(1), FrameId::new(0));
    }

    #[test]
    fn test_frame_id_display() {
        assert_eq!(format!("{}", FrameId::new(42)), "Frame(42)");
    }
}
