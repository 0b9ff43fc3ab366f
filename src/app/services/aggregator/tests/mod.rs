//! Tests for the aggregation module
//!
//! Covers each table builder, the KPI scalars, and the console formatting.


// Test helper functions and fixtures
use crate::app::models::{EnrichedPlay, PlayRecord};

/// Build an enriched play from the fields the aggregations read
pub fn create_play(ts: &str, track: &str, artist: &str, ms: u64, skipped: bool) -> EnrichedPlay {
    create_play_on_platform(ts, track, artist, ms, skipped, Some("android"))
}

/// Build an enriched play with an explicit (possibly missing) platform
pub fn create_play_on_platform(
    ts: &str,
    track: &str,
    artist: &str,
    ms: u64,
    skipped: bool,
    platform: Option<&str>,
) -> EnrichedPlay {
    let record = PlayRecord {
        ts: ts.to_string(),
        track_name: track.to_string(),
        artist_name: artist.to_string(),
        album_name: Some("Album".to_string()),
        ms_played: Some(ms),
        skipped: Some(skipped),
        shuffle: Some(false),
        offline: Some(false),
        incognito_mode: Some(false),
        platform: platform.map(str::to_string),
        conn_country: Some("GB".to_string()),
        reason_end: Some(if skipped { "fwdbtn" } else { "trackdone" }.to_string()),
    };

    EnrichedPlay::from_record(record).expect("test timestamp must parse")
}
