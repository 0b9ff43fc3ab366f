//! Command-line argument definitions for the listening analytics tool
//!
//! This module defines the CLI interface using the clap derive API. Every
//! option is an override of a documented configuration default, so running
//! the binary with no arguments processes `streaming_history.json` in the
//! working directory.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the listening analytics pipeline
///
/// Turns a personal music-streaming history export into a fixed set of
/// yearly CSV listening reports plus a console KPI summary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "listening-analytics",
    version,
    about = "Generate yearly CSV listening reports from a music-streaming history export",
    long_about = "A batch reporting tool that reads a streaming-history JSON export, restricts \
                  it to one calendar year, cleans and enriches the play events, and writes \
                  seven aggregate report tables plus the full enriched event set as CSV files, \
                  finishing with a console KPI summary."
)]
pub struct Args {
    /// Path to the streaming-history JSON export
    ///
    /// If not specified, defaults to ./streaming_history.json
    #[arg(
        short = 's',
        long = "source",
        value_name = "FILE",
        help = "Path to the streaming-history JSON export"
    )]
    pub source_path: Option<PathBuf>,

    /// Calendar year to report on
    ///
    /// Only play events whose timestamp falls in this year are analyzed.
    #[arg(
        short = 'y',
        long = "year",
        value_name = "YEAR",
        help = "Calendar year the reports are restricted to"
    )]
    pub target_year: Option<i32>,

    /// Output directory for the CSV reports
    ///
    /// Will be created if it doesn't exist; existing report files are
    /// overwritten. If not specified, defaults to ./analytics_output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for the CSV reports"
    )]
    pub output_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the final KPI report. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress progress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Build the pipeline configuration from defaults plus CLI overrides
    pub fn to_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(source_path) = &self.source_path {
            config.source_path = source_path.clone();
        }
        if let Some(target_year) = self.target_year {
            config.target_year = target_year;
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        config
    }

    /// Determine the appropriate log level based on verbosity flags
    ///
    /// Stage progress lines are logged at info, so that is the default.
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_SOURCE_FILE, DEFAULT_TARGET_YEAR};

    fn bare_args() -> Args {
        Args {
            source_path: None,
            target_year: None,
            output_dir: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_to_config_defaults() {
        let config = bare_args().to_config();
        assert_eq!(config.source_path, PathBuf::from(DEFAULT_SOURCE_FILE));
        assert_eq!(config.target_year, DEFAULT_TARGET_YEAR);
    }

    #[test]
    fn test_to_config_overrides() {
        let mut args = bare_args();
        args.source_path = Some(PathBuf::from("export.json"));
        args.target_year = Some(2024);
        args.output_dir = Some(PathBuf::from("out"));

        let config = args.to_config();
        assert_eq!(config.source_path, PathBuf::from("export.json"));
        assert_eq!(config.target_year, 2024);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_log_level() {
        let mut args = bare_args();
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_clap_parsing() {
        let args = Args::parse_from([
            "listening-analytics",
            "--source",
            "history.json",
            "--year",
            "2024",
            "-o",
            "reports",
        ]);

        assert_eq!(args.source_path, Some(PathBuf::from("history.json")));
        assert_eq!(args.target_year, Some(2024));
        assert_eq!(args.output_dir, Some(PathBuf::from("reports")));
    }
}
