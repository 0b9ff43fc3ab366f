//! Pipeline orchestration for cleaning raw play records
//!
//! This module contains the RecordProcessor struct that coordinates the
//! filter, normalize, and enrich stages between loading and aggregation.

use crate::Result;
use crate::app::models::RawPlayRecord;
use tracing::info;

use super::{
    enrichment::enrich_records,
    normalizer::normalize_records,
    stats::{ProcessingResult, ProcessingStats},
    year_filter::filter_to_year,
};

/// Record processor for streaming-history play events
///
/// Takes the raw records from the loader and applies year filtering,
/// normalization (identity checks, deduplication, renaming), and feature
/// enrichment, producing the enriched event set the aggregator reads.
///
/// # Example
///
/// ```rust
/// use listening_analytics::app::services::record_processor::RecordProcessor;
///
/// # fn example(records: Vec<listening_analytics::RawPlayRecord>) -> listening_analytics::Result<()> {
/// let processor = RecordProcessor::new(2025);
/// let result = processor.process(records)?;
/// println!("{}", result.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecordProcessor {
    /// Calendar year the event set is restricted to
    target_year: i32,
}

impl RecordProcessor {
    /// Create a new record processor for the given target year
    pub fn new(target_year: i32) -> Self {
        Self { target_year }
    }

    /// Run the complete cleaning pipeline over raw play records
    ///
    /// Stages, in order, each completing before the next begins:
    /// 1. Year filter (drops records outside the target year)
    /// 2. Normalization (identity checks, exact-duplicate removal, renaming)
    /// 3. Feature enrichment (calendar features and outcome flags)
    ///
    /// # Returns
    ///
    /// A `ProcessingResult` with the enriched events and per-stage counts
    pub fn process(&self, records: Vec<RawPlayRecord>) -> Result<ProcessingResult> {
        let mut stats = ProcessingStats::new();
        stats.total_input = records.len();

        info!(
            "Starting cleaning pipeline for {} raw records (target year {})",
            records.len(),
            self.target_year
        );

        let in_year = filter_to_year(records, self.target_year);
        stats.in_target_year = in_year.len();

        let normalized = normalize_records(in_year, &mut stats);
        stats.normalized = normalized.len();

        let enriched = enrich_records(normalized)?;
        stats.final_output = enriched.len();

        info!("{}", stats.summary());

        Ok(ProcessingResult::new(enriched, stats))
    }

    /// Get the target year this processor filters to
    pub fn target_year(&self) -> i32 {
        self.target_year
    }
}
