//! Run configuration.

use std::path::PathBuf;

/// Comma between the fields of a run record.
pub const FIELD_SEPARATOR: char = ',';

/// Lines starting with this marker are ignored by the record reader.
pub const COMMENT_MARKER: char = '#';

/// Immutable configuration for one invocation of the simulator.
///
/// Built once at startup from the command line and passed explicitly to
/// whatever drives the runs. Nothing in the library reads global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Workload file holding one run record per line.
    pub input: PathBuf,

    /// Emit debug-level logging (eviction decisions).
    pub debug: bool,

    /// Print the statistics summary after each run.
    pub show_stats: bool,
}

impl SimConfig {
    /// Configuration with only the input path set.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            debug: false,
            show_stats: false,
        }
    }

    /// The log level this configuration asks for.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SimConfig::new("pages.txt");
        assert_eq!(config.input, PathBuf::from("pages.txt"));
        assert!(!config.debug);
        assert!(!config.show_stats);
        assert_eq!(config.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_config_debug_level() {
        let config = SimConfig {
            debug: true,
            ..SimConfig::new("pages.txt")
        };
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }
}
