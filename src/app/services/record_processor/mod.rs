//! Record processing module for streaming-history play events
//!
//! This module provides the cleaning pipeline that sits between loading the
//! raw export and aggregating the reports. It restricts events to the target
//! calendar year, enforces the identity-field guarantees, removes exact
//! duplicates, and derives the calendar/time features.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`processor`] - Main RecordProcessor struct and pipeline orchestration
//! - [`year_filter`] - Target-year restriction on raw records
//! - [`normalizer`] - Projection, identity checks, deduplication, renaming
//! - [`enrichment`] - Calendar/time features and play-outcome flags
//! - [`stats`] - Per-stage record counts and the result structure
//!
//! # Processing Pipeline
//!
//! 1. **Year filter**: keep records whose timestamp's leading four digits
//!    equal the target year; missing/unparsable timestamps are dropped
//! 2. **Normalization**: drop records without a track or artist name,
//!    collapse field-wise exact duplicates, rename to canonical field names
//! 3. **Enrichment**: full timestamp parse plus derived features; a parse
//!    failure at this stage aborts the run
//!
//! Row-level anomalies are filtered and counted, never raised as errors;
//! only an unparsable timestamp past the year filter is fatal.

pub mod enrichment;
pub mod normalizer;
pub mod processor;
pub mod stats;
pub mod year_filter;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::RecordProcessor;
pub use stats::{ProcessingResult, ProcessingStats};

// Re-export the stage functions for direct use
pub use enrichment::enrich_records;
pub use normalizer::normalize_records;
pub use year_filter::filter_to_year;
