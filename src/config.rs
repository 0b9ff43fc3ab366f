//! Configuration management and validation.
//!
//! Provides the explicit configuration record passed into the pipeline
//! entry point: where the streaming-history export lives, which calendar
//! year to report on, and where the CSV reports are written.

use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_FILE, DEFAULT_TARGET_YEAR};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Pipeline configuration
///
/// All three fields have documented defaults so the binary can run without
/// any arguments: `streaming_history.json` in the working directory,
/// the current report year, and an `analytics_output/` directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the streaming-history JSON export
    pub source_path: PathBuf,

    /// Calendar year the reports are restricted to
    pub target_year: i32,

    /// Directory the CSV reports are written into (created if absent)
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_FILE),
            target_year: DEFAULT_TARGET_YEAR,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Create a configuration with explicit source and output locations
    pub fn new(source_path: PathBuf, target_year: i32, output_dir: PathBuf) -> Self {
        Self {
            source_path,
            target_year,
            output_dir,
        }
    }

    /// Create a configuration with a custom source path
    pub fn with_source_path(mut self, source_path: PathBuf) -> Self {
        self.source_path = source_path;
        self
    }

    /// Create a configuration with a custom target year
    pub fn with_target_year(mut self, target_year: i32) -> Self {
        self.target_year = target_year;
        self
    }

    /// Create a configuration with a custom output directory
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.source_path.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Source path cannot be empty".to_string(),
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Output directory cannot be empty".to_string(),
            ));
        }

        // Timestamps in the export carry four-digit years
        if !(1000..=9999).contains(&self.target_year) {
            return Err(Error::configuration(format!(
                "Target year {} is not a four-digit year",
                self.target_year
            )));
        }

        Ok(())
    }

    /// Create the output directory if it does not already exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        if !self.output_dir.exists() {
            debug!("Creating output directory: {}", self.output_dir.display());
            std::fs::create_dir_all(&self.output_dir).map_err(|e| {
                Error::io(
                    format!(
                        "Failed to create output directory '{}'",
                        self.output_dir.display()
                    ),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// Path of the exported file for the full enriched event set
    pub fn raw_data_file_name(&self) -> String {
        format!(
            "{}_{}.csv",
            crate::constants::export_files::RAW_DATA_PREFIX,
            self.target_year
        )
    }
}
