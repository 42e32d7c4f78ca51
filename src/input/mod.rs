//! Input layer: turning workload text into run records.
//!
//! # Components
//! - [`Workload`] - A file (or string) of run records
//! - [`RunRecord`] - One parsed run: policy, frame count, pages

mod record;
mod workload;

pub use record::RunRecord;
pub use workload::Workload;
