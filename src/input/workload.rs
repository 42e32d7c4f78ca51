//! Workload - a file of run records.

use std::fs;
use std::path::Path;

use log::debug;

use crate::common::config::COMMENT_MARKER;
use crate::common::Result;
use crate::input::RunRecord;

/// The text of a workload, one run record per line.
///
/// Blank lines and lines starting with `#` are skipped. Each remaining
/// line parses on its own, so one malformed record does not hide the
/// others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    source: String,
}

impl Workload {
    /// Read a workload file.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file doesn't exist or cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        debug!(
            "loaded workload {} ({} bytes)",
            path.as_ref().display(),
            source.len()
        );
        Ok(Self { source })
    }

    /// Wrap workload text that is already in memory.
    pub fn from_text(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Parse every record, in file order.
    pub fn records(&self) -> impl Iterator<Item = Result<RunRecord>> + '_ {
        self.source
            .lines()
            .enumerate()
            .map(|(idx, text)| (idx + 1, text.trim()))
            .filter(|(_, text)| !text.is_empty() && !text.starts_with(COMMENT_MARKER))
            .map(|(line, text)| RunRecord::parse(text, line))
    }
}
