//! The replacement engine.
//!
//! The engine owns a fixed set of frames and feeds a reference sequence
//! through one replacement policy, recording a snapshot after every access.
//!
//! # Components
//! - [`FrameTable`] / [`Slot`] - The fixed set of frames
//! - [`ReferenceSequence`] - The ordered page accesses of a run
//! - [`FaultStats`] - Fault, hit and eviction counters
//! - [`replacer`] - Replacement policy implementations
//! - [`Simulator`] - Runs a policy and produces a [`RunReport`]

mod frame_table;
mod reference;
pub mod replacer;
mod simulator;
mod stats;

pub use frame_table::{FrameTable, Slot};
pub use reference::ReferenceSequence;
pub use replacer::{Policy, Replacer};
pub use simulator::{run, RunReport, Simulator, Step};
pub use stats::FaultStats;
