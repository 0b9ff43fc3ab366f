//! Application constants for the listening analytics pipeline
//!
//! This module contains the configuration defaults, export file names,
//! and calendar lookup tables used throughout the application.

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default streaming-history export file, relative to the working directory
pub const DEFAULT_SOURCE_FILE: &str = "streaming_history.json";

/// Default calendar year the reports are restricted to
pub const DEFAULT_TARGET_YEAR: i32 = 2025;

/// Default directory the CSV reports are written into
pub const DEFAULT_OUTPUT_DIR: &str = "analytics_output";

// =============================================================================
// Derivation Constants
// =============================================================================

/// Milliseconds per minute, used to derive `minutes_played`
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Group key used for events whose platform field is missing
pub const UNKNOWN_PLATFORM: &str = "unknown";

// =============================================================================
// Export File Names
// =============================================================================

/// File names for the exported report tables
pub mod export_files {
    /// Per-calendar-date listening summary
    pub const DAILY_SUMMARY: &str = "daily_summary.csv";

    /// Per-artist listening summary
    pub const ARTIST_SUMMARY: &str = "artist_summary.csv";

    /// Per-track listening summary
    pub const TRACK_SUMMARY: &str = "track_summary.csv";

    /// Hour-of-day listening pattern
    pub const HOURLY_PATTERN: &str = "hourly_pattern.csv";

    /// Day-of-week listening pattern
    pub const WEEKLY_PATTERN: &str = "weekly_pattern.csv";

    /// Month-by-month listening progression
    pub const MONTHLY_PROGRESSION: &str = "monthly_progression.csv";

    /// Play counts and minutes per playback platform
    pub const PLATFORM_DISTRIBUTION: &str = "platform_distribution.csv";

    /// Prefix for the full enriched event export (`raw_data_<year>.csv`)
    pub const RAW_DATA_PREFIX: &str = "raw_data";
}

// =============================================================================
// Calendar Lookup Tables
// =============================================================================

/// English month names indexed by month number minus one
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names in report order (Monday first, index equals `day_of_week_num`)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
