//! Error types for pagerep.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the simulator can report.
///
/// The replacement algorithms themselves never fail; every variant here
/// comes from loading or parsing a run description.
#[derive(Debug, Error)]
pub enum Error {
    /// The workload file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record has no policy code before the first separator.
    #[error("line {line}: missing policy code")]
    MissingPolicy { line: usize },

    /// The policy code is not one of `F`, `O` or `L`.
    #[error("line {line}: unknown policy code {code:?}")]
    UnknownPolicy { line: usize, code: String },

    /// A run needs at least one frame.
    #[error("invalid frame count: {0}")]
    InvalidFrameCount(usize),

    /// A numeric field did not parse.
    #[error("line {line}: malformed {field} {value:?}")]
    MalformedRecord {
        line: usize,
        field: &'static str,
        value: String,
    },
}
