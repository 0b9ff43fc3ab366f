//! Daily, artist, and track summary tables
//!
//! Each builder makes one accumulation pass over the enriched event set,
//! keyed by its group dimension, then derives the ratio columns and applies
//! the table's presentation order.

use crate::app::models::EnrichedPlay;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use super::round2;

// =============================================================================
// Daily Summary
// =============================================================================

/// One row of the daily summary table, keyed by calendar date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummaryRow {
    pub date: NaiveDate,
    pub total_minutes: f64,
    pub tracks_played: usize,
    pub skips: usize,
    pub completions: usize,
    pub unique_artists: usize,
    /// skips / tracks_played * 100, two decimal places
    pub skip_rate: f64,
    /// total_minutes / 60, two decimal places
    pub hours_played: f64,
}

#[derive(Default)]
struct DailyAccumulator<'a> {
    total_minutes: f64,
    tracks_played: usize,
    skips: usize,
    completions: usize,
    artists: HashSet<&'a str>,
}

/// Build the daily summary, ordered by ascending date
pub fn build_daily_summary(plays: &[EnrichedPlay]) -> Vec<DailySummaryRow> {
    let mut groups: BTreeMap<NaiveDate, DailyAccumulator> = BTreeMap::new();

    for play in plays {
        let acc = groups.entry(play.date).or_default();
        acc.total_minutes += play.minutes_played;
        acc.tracks_played += 1;
        acc.skips += play.was_skipped as usize;
        acc.completions += play.was_completed as usize;
        acc.artists.insert(&play.artist_name);
    }

    groups
        .into_iter()
        .map(|(date, acc)| DailySummaryRow {
            date,
            total_minutes: acc.total_minutes,
            tracks_played: acc.tracks_played,
            skips: acc.skips,
            completions: acc.completions,
            unique_artists: acc.artists.len(),
            skip_rate: round2(acc.skips as f64 / acc.tracks_played as f64 * 100.0),
            hours_played: round2(acc.total_minutes / 60.0),
        })
        .collect()
}

// =============================================================================
// Artist Summary
// =============================================================================

/// One row of the artist summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistSummaryRow {
    pub artist_name: String,
    pub total_minutes: f64,
    /// Distinct tracks played for this artist
    pub track_count: usize,
    pub plays: usize,
    pub skips: usize,
    pub first_play: NaiveDate,
    pub last_play: NaiveDate,
    pub skip_rate: f64,
    pub hours_played: f64,
}

struct ArtistAccumulator<'a> {
    total_minutes: f64,
    tracks: HashSet<&'a str>,
    plays: usize,
    skips: usize,
    first_play: NaiveDate,
    last_play: NaiveDate,
}

/// Build the artist summary, ordered by descending total minutes
///
/// The sort is stable over the alphabetical accumulator order, so artists
/// with equal minutes stay alphabetized.
pub fn build_artist_summary(plays: &[EnrichedPlay]) -> Vec<ArtistSummaryRow> {
    let mut groups: BTreeMap<&str, ArtistAccumulator> = BTreeMap::new();

    for play in plays {
        let acc = groups
            .entry(&play.artist_name)
            .or_insert_with(|| ArtistAccumulator {
                total_minutes: 0.0,
                tracks: HashSet::new(),
                plays: 0,
                skips: 0,
                first_play: play.date,
                last_play: play.date,
            });
        acc.total_minutes += play.minutes_played;
        acc.tracks.insert(&play.track_name);
        acc.plays += 1;
        acc.skips += play.was_skipped as usize;
        acc.first_play = acc.first_play.min(play.date);
        acc.last_play = acc.last_play.max(play.date);
    }

    let mut rows: Vec<ArtistSummaryRow> = groups
        .into_iter()
        .map(|(artist_name, acc)| ArtistSummaryRow {
            artist_name: artist_name.to_string(),
            total_minutes: acc.total_minutes,
            track_count: acc.tracks.len(),
            plays: acc.plays,
            skips: acc.skips,
            first_play: acc.first_play,
            last_play: acc.last_play,
            skip_rate: round2(acc.skips as f64 / acc.plays as f64 * 100.0),
            hours_played: round2(acc.total_minutes / 60.0),
        })
        .collect();

    rows.sort_by(|a, b| b.total_minutes.total_cmp(&a.total_minutes));
    rows
}

// =============================================================================
// Track Summary
// =============================================================================

/// One row of the track summary table, keyed by (track, artist)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSummaryRow {
    pub track_name: String,
    pub artist_name: String,
    pub total_minutes: f64,
    pub play_count: usize,
    pub skips: usize,
    pub completions: usize,
    pub first_play: NaiveDate,
    pub last_play: NaiveDate,
    pub skip_rate: f64,
}

struct TrackAccumulator {
    total_minutes: f64,
    play_count: usize,
    skips: usize,
    completions: usize,
    first_play: NaiveDate,
    last_play: NaiveDate,
}

/// Build the track summary, ordered by descending total minutes
pub fn build_track_summary(plays: &[EnrichedPlay]) -> Vec<TrackSummaryRow> {
    let mut groups: BTreeMap<(&str, &str), TrackAccumulator> = BTreeMap::new();

    for play in plays {
        let acc = groups
            .entry((&play.track_name, &play.artist_name))
            .or_insert_with(|| TrackAccumulator {
                total_minutes: 0.0,
                play_count: 0,
                skips: 0,
                completions: 0,
                first_play: play.date,
                last_play: play.date,
            });
        acc.total_minutes += play.minutes_played;
        acc.play_count += 1;
        acc.skips += play.was_skipped as usize;
        acc.completions += play.was_completed as usize;
        acc.first_play = acc.first_play.min(play.date);
        acc.last_play = acc.last_play.max(play.date);
    }

    let mut rows: Vec<TrackSummaryRow> = groups
        .into_iter()
        .map(|((track_name, artist_name), acc)| TrackSummaryRow {
            track_name: track_name.to_string(),
            artist_name: artist_name.to_string(),
            total_minutes: acc.total_minutes,
            play_count: acc.play_count,
            skips: acc.skips,
            completions: acc.completions,
            first_play: acc.first_play,
            last_play: acc.last_play,
            skip_rate: round2(acc.skips as f64 / acc.play_count as f64 * 100.0),
        })
        .collect();

    rows.sort_by(|a, b| b.total_minutes.total_cmp(&a.total_minutes));
    rows
}
