//! pagerep - a page replacement simulator.
//!
//! Feeds a reference string (an ordered list of page accesses) through a
//! fixed number of frames under one replacement policy and records the
//! frame contents after every access plus the total number of page faults.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                             pagerep                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Input Layer (input/)                      │   │
//! │  │          Workload file → RunRecord per line              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Engine (memory/)                        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     Replacement Policies: FIFO | Optimal | LRU  │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │   Simulator + FrameTable + ReferenceSequence + Stats     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          RunReport: per-access Steps + fault total       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, SimConfig)
//! - [`memory`] - Frame table, replacement policies and the simulator
//! - [`input`] - Workload files and run record parsing
//!
//! # Quick Start
//! ```
//! use pagerep::input::RunRecord;
//!
//! let record = RunRecord::parse("O,3,7,0,1,2,0,3,0,4,2,3,0,3,2,1,2,0,1,7,0,1", 1).unwrap();
//! let report = record.run().unwrap();
//!
//! assert_eq!(report.faults(), 9);
//! println!("{}", report);
//! ```

pub mod common;
pub mod input;
pub mod memory;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result, SimConfig};

pub use input::{RunRecord, Workload};
pub use memory::{
    run, FaultStats, FrameTable, Policy, ReferenceSequence, Replacer, RunReport, Simulator, Slot,
    Step,
};
