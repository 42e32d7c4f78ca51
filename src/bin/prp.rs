use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, warn};
use pagerep::{Result, SimConfig, Workload};

#[derive(Debug, Parser, PartialEq)]
#[clap(author, version, about = "Page replacement policy simulator", long_about = None)]
struct Args {
    #[clap(short = 'f', long, help = "Workload file, one run record per line")]
    filename: PathBuf,
    #[clap(short = 'd', long, help = "Show debugging information")]
    debug: bool,
    #[clap(long, help = "Print fault/hit statistics after each run")]
    stats: bool,
}

impl From<Args> for SimConfig {
    fn from(args: Args) -> Self {
        SimConfig {
            input: args.filename,
            debug: args.debug,
            show_stats: args.stats,
        }
    }
}

fn init_logging(config: &SimConfig) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.log_level());
    // --debug wins over RUST_LOG
    if !config.debug {
        builder.parse_default_env();
    }
    builder.init();
}

/// Runs every record in the workload and returns how many were rejected.
fn run_workload(config: &SimConfig) -> Result<usize> {
    let workload = Workload::open(&config.input)?;
    let mut rejected = 0;

    for record in workload.records() {
        let report = match record.and_then(|record| record.run()) {
            Ok(report) => report,
            Err(e) => {
                // Rejections reach stderr even when RUST_LOG silences the logger
                eprintln!("skipping record: {}", e);
                error!("skipping record: {}", e);
                rejected += 1;
                continue;
            }
        };

        println!("{}", report);
        if config.show_stats {
            println!("{}", report.stats);
        }
    }

    Ok(rejected)
}

fn main() -> ExitCode {
    let config = SimConfig::from(Args::parse());
    init_logging(&config);

    match run_workload(&config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(rejected) => {
            warn!("{} record(s) rejected", rejected);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("cannot read {}: {}", config.input.display(), e);
            error!("cannot read {}: {}", config.input.display(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagerep::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_workload_counts_rejected_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("workload.txt");
        fs::write(&path, "Z,3,1\nF,3,1,2\n").unwrap();

        let rejected = run_workload(&SimConfig::new(path)).unwrap();
        assert_eq!(rejected, 1);
    }

    #[test]
    fn test_run_workload_missing_file() {
        let dir = tempdir().unwrap();
        let config = SimConfig::new(dir.path().join("missing.txt"));

        assert!(matches!(run_workload(&config), Err(Error::Io(_))));
    }

    #[test]
    fn test_args_require_filename() {
        assert!(Args::try_parse_from(["prp"]).is_err());
        assert!(Args::try_parse_from(["prp", "--stats"]).is_err());
    }

    #[test]
    fn test_args_into_config() {
        let args = Args::try_parse_from(["prp", "-f", "w.txt", "-d", "--stats"]).unwrap();
        let config = SimConfig::from(args);

        assert_eq!(config.input, PathBuf::from("w.txt"));
        assert!(config.debug);
        assert!(config.show_stats);
    }
}
