//! Run records - one textual line describing one simulation run.
//!
//! # Format
//! ```text
//! <policy>,<frames>,<page>,<page>,...
//! ```
//! `policy` is `F`, `O` or `L`; `frames` is a positive integer; the pages
//! are non-negative integers. `F,3` alone is a valid run with no accesses.

use crate::common::config::FIELD_SEPARATOR;
use crate::common::{Error, PageId, Result};
use crate::memory::{run, Policy, ReferenceSequence, RunReport};

/// A parsed run description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    /// 1-based line number in the workload, for error reporting.
    pub line: usize,
    pub policy: Policy,
    pub frame_count: usize,
    pub pages: ReferenceSequence,
}

impl RunRecord {
    /// Parse one record found at `line`.
    ///
    /// # Errors
    /// - `Error::MissingPolicy` / `Error::UnknownPolicy` for a bad policy code
    /// - `Error::MalformedRecord` for a non-numeric frame count or page
    /// - `Error::InvalidFrameCount` for a frame count of 0
    pub fn parse(text: &str, line: usize) -> Result<Self> {
        let mut fields = text.trim().split(FIELD_SEPARATOR).map(str::trim);

        let policy = Policy::from_code(fields.next().unwrap_or(""), line)?;

        let frames_field = fields.next().unwrap_or("");
        let frame_count: usize = frames_field.parse().map_err(|_| Error::MalformedRecord {
            line,
            field: "frame count",
            value: frames_field.to_string(),
        })?;
        if frame_count == 0 {
            return Err(Error::InvalidFrameCount(frame_count));
        }

        let pages = fields
            .map(|field| {
                field.parse::<PageId>().map_err(|_| Error::MalformedRecord {
                    line,
                    field: "page",
                    value: field.to_string(),
                })
            })
            .collect::<Result<ReferenceSequence>>()?;

        Ok(Self {
            line,
            policy,
            frame_count,
            pages,
        })
    }

    /// Simulate this record's policy over its pages.
    pub fn run(&self) -> Result<RunReport> {
        run(self.policy, self.frame_count, &self.pages)
    }
}
