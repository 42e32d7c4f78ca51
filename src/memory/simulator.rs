//! Simulator - drives one replacement policy over a reference sequence.
//!
//! The [`Simulator`] provides:
//! - Frame-count validation
//! - A fresh frame table, replacer and counters for every run
//! - The per-access trace ([`Step`]) and final [`FaultStats`]

use std::fmt;

use log::{debug, trace};

use crate::common::{Error, PageId, Result};
use crate::memory::replacer::Policy;
use crate::memory::{FaultStats, FrameTable, ReferenceSequence, Slot};

/// One access and the frame contents right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The page that was accessed.
    pub page: PageId,

    /// Whether the access faulted.
    pub fault: bool,

    /// All slots after the access, in slot order.
    pub frames: Vec<Slot>,
}

/// Renders as `<page>: <s0, s1, ...>` with empty slots as blanks.
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: <", self.page)?;
        for (idx, slot) in self.frames.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", slot)?;
        }
        write!(f, ">")
    }
}

/// Result of simulating one policy over one reference sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub policy: Policy,
    pub frame_count: usize,
    /// One entry per access, in order.
    pub steps: Vec<Step>,
    pub stats: FaultStats,
}

impl RunReport {
    /// Total page faults.
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }

    /// Frame contents after the last access (all empty for an empty run).
    pub fn final_frames(&self) -> Vec<Slot> {
        self.steps
            .last()
            .map(|step| step.frames.clone())
            .unwrap_or_else(|| vec![Slot::Empty; self.frame_count])
    }
}

/// The full trace: header, one line per access, fault total.
impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "For {}", self.policy)?;
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        write!(f, "Total number of faults: {}", self.stats.faults)
    }
}

/// Runs replacement policies over a fixed number of frames.
///
/// # Usage
/// ```
/// use pagerep::{Policy, ReferenceSequence, Simulator};
///
/// let sim = Simulator::new(3).unwrap();
/// let refs = ReferenceSequence::from(vec![1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
///
/// let report = sim.simulate(Policy::Fifo, &refs);
/// assert_eq!(report.faults(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    frame_count: usize,
}

impl Simulator {
    /// Create a simulator over `frame_count` frames.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if `frame_count` is 0
    pub fn new(frame_count: usize) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::InvalidFrameCount(frame_count));
        }
        Ok(Self { frame_count })
    }

    /// Run `policy` over `refs` from an empty frame table.
    pub fn simulate(&self, policy: Policy, refs: &ReferenceSequence) -> RunReport {
        let mut table = FrameTable::new(self.frame_count);
        let mut replacer = policy.replacer(self.frame_count);
        let mut stats = FaultStats::new();
        let mut steps = Vec::with_capacity(refs.len());

        for (position, page) in refs.iter().enumerate() {
            let fault = !table.contains(page);

            if fault {
                let slot = replacer.select_slot(&table, refs, position);
                let previous = table.place(slot, page);
                stats.record_fault(!previous.is_empty());
                trace!("{}: page {} faulted into {}", policy, page, slot);
            } else {
                stats.record_hit();
                trace!("{}: page {} hit", policy, page);
            }
            replacer.record_access(page, position);

            steps.push(Step {
                page,
                fault,
                frames: table.snapshot(),
            });
        }

        debug!(
            "{} over {} frames, {} accesses: {}",
            policy,
            self.frame_count,
            refs.len(),
            stats
        );

        RunReport {
            policy,
            frame_count: self.frame_count,
            steps,
            stats,
        }
    }

    /// Run every policy over the same sequence, one after another.
    ///
    /// Each policy starts from its own empty table and zeroed counters.
    pub fn compare(&self, refs: &ReferenceSequence) -> Vec<RunReport> {
        Policy::ALL
            .iter()
            .map(|&policy| self.simulate(policy, refs))
            .collect()
    }
}

/// Validate `frame_count` and run `policy` over `refs`.
///
/// # Errors
/// - `Error::InvalidFrameCount` if `frame_count` is 0
pub fn run(policy: Policy, frame_count: usize, refs: &ReferenceSequence) -> Result<RunReport> {
    Ok(Simulator::new(frame_count)?.simulate(policy, refs))
}
