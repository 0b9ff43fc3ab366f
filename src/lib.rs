//! Listening Analytics Library
//!
//! A Rust library for turning a personal music-streaming history export
//! (a JSON array of play events) into a fixed set of yearly CSV reports.
//!
//! This library provides tools for:
//! - Loading the raw streaming-history JSON export
//! - Restricting play events to a single calendar year
//! - Cleaning records (identity checks, exact-duplicate removal, renaming)
//! - Enriching events with calendar/time features and play-outcome flags
//! - Aggregating seven summary tables plus overall listening KPIs
//! - Exporting every table as a CSV file with a console KPI report

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod csv_export;
        pub mod loader;
        pub mod record_processor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{EnrichedPlay, PlayRecord, RawPlayRecord};
pub use config::Config;

/// Result type alias for the listening analytics pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the listening analytics pipeline
///
/// The pipeline is all-or-nothing per run: every variant here is fatal and
/// aborts processing. Row-level anomalies (missing identity fields, exact
/// duplicates) are filtered, not errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Streaming history source file missing
    #[error("Streaming history file not found: {path}")]
    SourceNotFound { path: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Source JSON could not be deserialized
    #[error("JSON parsing error in file '{file}': {message}")]
    JsonParsing {
        file: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Play timestamp could not be parsed during enrichment
    #[error("Timestamp parsing error: {message}")]
    TimestampParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// CSV report writing error
    #[error("CSV writing error for '{file}': {message}")]
    CsvWriting {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },
}

impl Error {
    /// Create a source-not-found error
    pub fn source_not_found(path: impl Into<String>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON parsing error with context
    pub fn json_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::JsonParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a timestamp parsing error with context
    pub fn timestamp_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::TimestampParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV writing error with context
    pub fn csv_writing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvWriting {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonParsing {
            file: "unknown".to_string(),
            message: "JSON parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::TimestampParsing {
            message: "Timestamp parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvWriting {
            file: "unknown".to_string(),
            message: "CSV writing failed".to_string(),
            source: Some(error),
        }
    }
}
