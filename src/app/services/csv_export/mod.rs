//! CSV export module for the report tables
//!
//! Serializes the seven aggregate tables plus the full enriched event set
//! into a destination directory, one CSV file per table. The directory is
//! created if absent and existing files are overwritten; the first write
//! failure aborts the remaining exports.

pub mod writer;

#[cfg(test)]
pub mod tests;

pub use writer::{CsvExporter, ExportSummary};
