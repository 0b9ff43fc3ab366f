//! Record normalization: projection, identity checks, deduplication
//!
//! Projects each raw record to the twelve retained fields under canonical
//! names, drops records without a track or artist name, and collapses exact
//! duplicates to their first occurrence. Rows are silently excluded, never
//! reported as errors; the drop counts land in [`ProcessingStats`].

use crate::app::models::{PlayRecord, RawPlayRecord};
use std::collections::HashSet;
use tracing::{debug, info};

use super::stats::ProcessingStats;

/// Normalize year-filtered raw records into cleaned play records
///
/// The track-name and artist-name checks are applied in that order, so a
/// record missing both is counted once, under the track-name drop. A record
/// counts as a duplicate when all twelve retained fields are equal to an
/// earlier-kept record; first occurrence order is preserved.
pub fn normalize_records(
    records: Vec<RawPlayRecord>,
    stats: &mut ProcessingStats,
) -> Vec<PlayRecord> {
    let mut seen: HashSet<PlayRecord> = HashSet::new();
    let mut normalized = Vec::new();

    for record in records {
        let Some(track_name) = record.master_metadata_track_name else {
            stats.missing_track_name += 1;
            continue;
        };
        let Some(artist_name) = record.master_metadata_album_artist_name else {
            stats.missing_artist_name += 1;
            continue;
        };
        let Some(ts) = record.ts else {
            // The year filter only passes records with a timestamp
            debug!("Record for '{}' has no timestamp, dropping", track_name);
            continue;
        };

        let play = PlayRecord {
            ts,
            track_name,
            artist_name,
            album_name: record.master_metadata_album_album_name,
            ms_played: record.ms_played,
            skipped: record.skipped,
            shuffle: record.shuffle,
            offline: record.offline,
            incognito_mode: record.incognito_mode,
            platform: record.platform,
            conn_country: record.conn_country,
            reason_end: record.reason_end,
        };

        if seen.insert(play.clone()) {
            normalized.push(play);
        } else {
            stats.duplicates_removed += 1;
        }
    }

    info!(
        "Normalization: {} records kept ({} missing track, {} missing artist, {} duplicates)",
        normalized.len(),
        stats.missing_track_name,
        stats.missing_artist_name,
        stats.duplicates_removed
    );

    normalized
}
