//! Tests for the record processor module
//!
//! Unit tests for each cleaning stage plus the orchestrated pipeline.

pub mod processor_tests;

// Test helper functions and fixtures
use crate::app::models::RawPlayRecord;

/// Create a raw record with the given timestamp, track, and artist
pub fn create_raw_record(
    ts: Option<&str>,
    track: Option<&str>,
    artist: Option<&str>,
) -> RawPlayRecord {
    RawPlayRecord {
        ts: ts.map(str::to_string),
        master_metadata_track_name: track.map(str::to_string),
        master_metadata_album_artist_name: artist.map(str::to_string),
        master_metadata_album_album_name: Some("Test Album".to_string()),
        ms_played: Some(180_000),
        skipped: Some(false),
        shuffle: Some(false),
        offline: Some(false),
        incognito_mode: Some(false),
        platform: Some("android".to_string()),
        conn_country: Some("GB".to_string()),
        reason_end: Some("trackdone".to_string()),
    }
}

/// Create a complete raw record for the given target-year timestamp
pub fn create_complete_record(ts: &str) -> RawPlayRecord {
    create_raw_record(Some(ts), Some("Test Track"), Some("Test Artist"))
}
