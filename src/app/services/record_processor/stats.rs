//! Processing statistics and result structures for the cleaning pipeline
//!
//! This module provides types for tracking how many records each stage
//! retained or dropped, and for handing the enriched event set to the
//! aggregation stage together with those counts.

use crate::app::models::EnrichedPlay;

/// Statistics for the filter/normalize/enrich pipeline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingStats {
    /// Total number of raw records read from the export
    pub total_input: usize,
    /// Records whose timestamp falls in the target year
    pub in_target_year: usize,
    /// Records dropped for a missing track name
    pub missing_track_name: usize,
    /// Records dropped for a missing artist name
    pub missing_artist_name: usize,
    /// Exact-duplicate records removed (first occurrence kept)
    pub duplicates_removed: usize,
    /// Records remaining after normalization
    pub normalized: usize,
    /// Final number of enriched events
    pub final_output: usize,
}

impl ProcessingStats {
    /// Create new empty processing statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Records dropped for missing identity fields (track or artist name)
    pub fn dropped_missing_identity(&self) -> usize {
        self.missing_track_name + self.missing_artist_name
    }

    /// Share of target-year records that survived cleaning, as a percentage
    pub fn retention_rate(&self) -> f64 {
        if self.in_target_year == 0 {
            100.0
        } else {
            (self.final_output as f64 / self.in_target_year as f64) * 100.0
        }
    }

    /// Get summary of the cleaning pipeline statistics
    pub fn summary(&self) -> String {
        format!(
            "Cleaning summary: {} raw -> {} in target year -> {} enriched \
             ({:.1}% retained) | missing identity: {} | duplicates: {}",
            self.total_input,
            self.in_target_year,
            self.final_output,
            self.retention_rate(),
            self.dropped_missing_identity(),
            self.duplicates_removed
        )
    }
}

/// Result of the cleaning pipeline: the enriched event set plus statistics
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Enriched play events, all belonging to the target year
    pub plays: Vec<EnrichedPlay>,
    /// Per-stage record counts
    pub stats: ProcessingStats,
}

impl ProcessingResult {
    /// Create a new processing result
    pub fn new(plays: Vec<EnrichedPlay>, stats: ProcessingStats) -> Self {
        Self { plays, stats }
    }

    /// Get the number of enriched play events
    pub fn play_count(&self) -> usize {
        self.plays.len()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
