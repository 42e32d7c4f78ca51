//! Replacement policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - round-robin over slots in placement order
//! - [`OptimalReplacer`] - clairvoyant, evicts the page used farthest ahead
//! - [`LruReplacer`] - evicts the page whose last access is oldest
//!
//! Every replacer answers one question on a page fault: which slot receives
//! the faulting page. Hits never consult the replacer beyond
//! [`Replacer::record_access`].

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::{Error, FrameId, PageId};
use crate::memory::{FrameTable, ReferenceSequence};

/// A page replacement policy.
pub trait Replacer {
    /// Which policy this replacer implements.
    fn policy(&self) -> Policy;

    /// Observe an access to `page` at `position`, after the frame table has
    /// been updated for it. Called for hits and faults alike.
    fn record_access(&mut self, _page: PageId, _position: usize) {}

    /// Choose the slot that receives the page faulting at `position`.
    ///
    /// The returned slot may be empty or hold the victim page.
    fn select_slot(
        &mut self,
        table: &FrameTable,
        refs: &ReferenceSequence,
        position: usize,
    ) -> FrameId;
}

/// The policy selector for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Optimal,
    Lru,
}

impl Policy {
    /// All policies, in the order they are compared.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Optimal, Policy::Lru];

    /// Parse a one-character policy code (`F`, `O` or `L`).
    ///
    /// # Errors
    /// - `Error::MissingPolicy` if the code is blank
    /// - `Error::UnknownPolicy` for any other code
    pub fn from_code(code: &str, line: usize) -> Result<Self, Error> {
        match code.trim() {
            "" => Err(Error::MissingPolicy { line }),
            "F" => Ok(Policy::Fifo),
            "O" => Ok(Policy::Optimal),
            "L" => Ok(Policy::Lru),
            other => Err(Error::UnknownPolicy {
                line,
                code: other.to_string(),
            }),
        }
    }

    /// The one-character code used in run records.
    pub fn code(&self) -> char {
        match self {
            Policy::Fifo => 'F',
            Policy::Optimal => 'O',
            Policy::Lru => 'L',
        }
    }

    /// A fresh replacer for this policy over `frame_count` slots.
    pub fn replacer(&self, frame_count: usize) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new(frame_count)),
            Policy::Optimal => Box::new(OptimalReplacer::new()),
            Policy::Lru => Box::new(LruReplacer::new()),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::from_code(s, 0)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fifo => "FIFO",
            Policy::Optimal => "Optimal",
            Policy::Lru => "LRU",
        };
        write!(f, "{}", name)
    }
}

/// Pick the candidate with the strictly largest key.
///
/// Candidates arrive in slot order, so on a tie the lowest slot wins.
pub(crate) fn farthest<I>(candidates: I) -> Option<(FrameId, usize)>
where
    I: IntoIterator<Item = (FrameId, usize)>,
{
    let mut best: Option<(FrameId, usize)> = None;
    for (frame_id, key) in candidates {
        match best {
            Some((_, best_key)) if key <= best_key => {}
            _ => best = Some((frame_id, key)),
        }
    }
    best
}
