//! CSV writer for the report tables and the enriched event set

use crate::app::models::EnrichedPlay;
use crate::app::services::aggregator::ReportTables;
use crate::config::Config;
use crate::constants::export_files;
use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Row counts per exported file, in write order
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// (file name, rows written) for each exported table
    pub files: Vec<(String, usize)>,
}

impl ExportSummary {
    /// Total rows written across all files
    pub fn total_rows(&self) -> usize {
        self.files.iter().map(|(_, rows)| rows).sum()
    }
}

/// CSV exporter bound to a destination directory
///
/// Each table write is atomic with respect to the table: either the file is
/// fully written and flushed, or the run aborts with a `CsvWriting`/`Io`
/// error before moving on to the next table.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
    raw_data_file: String,
}

impl CsvExporter {
    /// Create an exporter for the configured destination directory
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            raw_data_file: config.raw_data_file_name(),
        }
    }

    /// Write the seven aggregate tables plus the enriched event set
    ///
    /// Creates the destination directory if absent and overwrites existing
    /// files of the same names.
    pub fn export_all(
        &self,
        tables: &ReportTables,
        plays: &[EnrichedPlay],
    ) -> Result<ExportSummary> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            Error::io(
                format!(
                    "Failed to create output directory '{}'",
                    self.output_dir.display()
                ),
                e,
            )
        })?;

        let mut summary = ExportSummary::default();

        self.export_table(export_files::DAILY_SUMMARY, &tables.daily_summary, &mut summary)?;
        self.export_table(export_files::ARTIST_SUMMARY, &tables.artist_summary, &mut summary)?;
        self.export_table(export_files::TRACK_SUMMARY, &tables.track_summary, &mut summary)?;
        self.export_table(export_files::HOURLY_PATTERN, &tables.hourly_pattern, &mut summary)?;
        self.export_table(export_files::WEEKLY_PATTERN, &tables.weekly_pattern, &mut summary)?;
        self.export_table(
            export_files::MONTHLY_PROGRESSION,
            &tables.monthly_progression,
            &mut summary,
        )?;
        self.export_table(
            export_files::PLATFORM_DISTRIBUTION,
            &tables.platform_distribution,
            &mut summary,
        )?;
        self.export_table(&self.raw_data_file, plays, &mut summary)?;

        info!(
            "Export complete: {} files, {} rows total, in {}",
            summary.files.len(),
            summary.total_rows(),
            self.output_dir.display()
        );

        Ok(summary)
    }

    /// Write one table and record it in the summary
    fn export_table<T: Serialize>(
        &self,
        file_name: &str,
        rows: &[T],
        summary: &mut ExportSummary,
    ) -> Result<()> {
        let path = self.output_dir.join(file_name);
        write_table(&path, rows)?;

        info!("Exported {}: {} rows", file_name, rows.len());
        summary.files.push((file_name.to_string(), rows.len()));
        Ok(())
    }
}

/// Serialize rows into a CSV file with a header row
fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file_name = path.display().to_string();

    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        Error::csv_writing(file_name.as_str(), "Failed to create report file", Some(e))
    })?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| Error::csv_writing(file_name.as_str(), "Failed to write row", Some(e)))?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush '{}'", file_name), e))?;

    Ok(())
}
