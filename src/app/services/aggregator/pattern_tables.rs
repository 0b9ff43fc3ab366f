//! Hourly, weekly, monthly, and platform pattern tables
//!
//! These tables group by a bounded dimension (hour of day, weekday, month,
//! platform). The ordered-map accumulators leave the calendar tables in
//! their natural grouping order; the platform table is re-ranked by play
//! count afterwards.

use crate::app::models::EnrichedPlay;
use crate::constants::MONTH_NAMES;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use super::round2;

// =============================================================================
// Hourly Pattern
// =============================================================================

/// One row of the hourly listening pattern, keyed by hour of day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPatternRow {
    pub hour: u32,
    pub total_minutes: f64,
    pub track_count: usize,
    pub skips: usize,
    pub unique_artists: usize,
    /// total_minutes / track_count, two decimal places
    pub avg_minutes_per_session: f64,
    pub skip_rate: f64,
}

#[derive(Default)]
struct HourlyAccumulator<'a> {
    total_minutes: f64,
    track_count: usize,
    skips: usize,
    artists: HashSet<&'a str>,
}

/// Build the hourly pattern, one row per hour with any plays, hour order
pub fn build_hourly_pattern(plays: &[EnrichedPlay]) -> Vec<HourlyPatternRow> {
    let mut groups: BTreeMap<u32, HourlyAccumulator> = BTreeMap::new();

    for play in plays {
        let acc = groups.entry(play.hour).or_default();
        acc.total_minutes += play.minutes_played;
        acc.track_count += 1;
        acc.skips += play.was_skipped as usize;
        acc.artists.insert(&play.artist_name);
    }

    groups
        .into_iter()
        .map(|(hour, acc)| HourlyPatternRow {
            hour,
            total_minutes: acc.total_minutes,
            track_count: acc.track_count,
            skips: acc.skips,
            unique_artists: acc.artists.len(),
            avg_minutes_per_session: round2(acc.total_minutes / acc.track_count as f64),
            skip_rate: round2(acc.skips as f64 / acc.track_count as f64 * 100.0),
        })
        .collect()
}

// =============================================================================
// Weekly Pattern
// =============================================================================

/// One row of the day-of-week listening pattern
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPatternRow {
    pub day_name: String,
    pub total_minutes: f64,
    pub track_count: usize,
    pub skips: usize,
    pub unique_artists: usize,
    pub skip_rate: f64,
    /// Monday = 0 .. Sunday = 6; the table's sort key
    pub day_order: u32,
}

#[derive(Default)]
struct WeeklyAccumulator<'a> {
    day_name: &'a str,
    total_minutes: f64,
    track_count: usize,
    skips: usize,
    artists: HashSet<&'a str>,
}

/// Build the weekly pattern ordered Monday through Sunday, never
/// alphabetically, regardless of input arrival order
pub fn build_weekly_pattern(plays: &[EnrichedPlay]) -> Vec<WeeklyPatternRow> {
    let mut groups: BTreeMap<u32, WeeklyAccumulator> = BTreeMap::new();

    for play in plays {
        let acc = groups.entry(play.day_of_week_num).or_default();
        acc.day_name = &play.day_name;
        acc.total_minutes += play.minutes_played;
        acc.track_count += 1;
        acc.skips += play.was_skipped as usize;
        acc.artists.insert(&play.artist_name);
    }

    groups
        .into_iter()
        .map(|(day_order, acc)| WeeklyPatternRow {
            day_name: acc.day_name.to_string(),
            total_minutes: acc.total_minutes,
            track_count: acc.track_count,
            skips: acc.skips,
            unique_artists: acc.artists.len(),
            skip_rate: round2(acc.skips as f64 / acc.track_count as f64 * 100.0),
            day_order,
        })
        .collect()
}

// =============================================================================
// Monthly Progression
// =============================================================================

/// One row of the month-by-month progression, keyed by month number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyProgressionRow {
    pub month: u32,
    pub total_minutes: f64,
    pub tracks_played: usize,
    pub skips: usize,
    pub unique_artists: usize,
    pub unique_tracks: usize,
    /// Distinct calendar dates with at least one play
    pub days_with_listening: usize,
    pub hours_played: f64,
    pub skip_rate: f64,
    pub month_name: String,
}

#[derive(Default)]
struct MonthlyAccumulator<'a> {
    total_minutes: f64,
    tracks_played: usize,
    skips: usize,
    artists: HashSet<&'a str>,
    tracks: HashSet<&'a str>,
    dates: HashSet<NaiveDate>,
}

/// Build the monthly progression, one row per month with any plays
pub fn build_monthly_progression(plays: &[EnrichedPlay]) -> Vec<MonthlyProgressionRow> {
    let mut groups: BTreeMap<u32, MonthlyAccumulator> = BTreeMap::new();

    for play in plays {
        let acc = groups.entry(play.month).or_default();
        acc.total_minutes += play.minutes_played;
        acc.tracks_played += 1;
        acc.skips += play.was_skipped as usize;
        acc.artists.insert(&play.artist_name);
        acc.tracks.insert(&play.track_name);
        acc.dates.insert(play.date);
    }

    groups
        .into_iter()
        .map(|(month, acc)| MonthlyProgressionRow {
            month,
            total_minutes: acc.total_minutes,
            tracks_played: acc.tracks_played,
            skips: acc.skips,
            unique_artists: acc.artists.len(),
            unique_tracks: acc.tracks.len(),
            days_with_listening: acc.dates.len(),
            hours_played: round2(acc.total_minutes / 60.0),
            skip_rate: round2(acc.skips as f64 / acc.tracks_played as f64 * 100.0),
            month_name: MONTH_NAMES[(month - 1) as usize].to_string(),
        })
        .collect()
}

// =============================================================================
// Platform Distribution
// =============================================================================

/// One row of the platform distribution, keyed by platform string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformDistributionRow {
    pub platform: String,
    pub total_minutes: f64,
    pub track_count: usize,
    /// Share of all plays on this platform, two decimal places
    pub percentage: f64,
}

#[derive(Default)]
struct PlatformAccumulator {
    total_minutes: f64,
    track_count: usize,
}

/// Build the platform distribution, ordered by descending play count
///
/// Events without a platform string are grouped under "unknown" so the
/// track_count column still sums to the total event count.
pub fn build_platform_distribution(plays: &[EnrichedPlay]) -> Vec<PlatformDistributionRow> {
    let mut groups: BTreeMap<&str, PlatformAccumulator> = BTreeMap::new();

    for play in plays {
        let acc = groups.entry(play.platform_key()).or_default();
        acc.total_minutes += play.minutes_played;
        acc.track_count += 1;
    }

    let total_plays = plays.len();
    let mut rows: Vec<PlatformDistributionRow> = groups
        .into_iter()
        .map(|(platform, acc)| PlatformDistributionRow {
            platform: platform.to_string(),
            total_minutes: acc.total_minutes,
            track_count: acc.track_count,
            percentage: round2(acc.track_count as f64 / total_plays as f64 * 100.0),
        })
        .collect();

    rows.sort_by(|a, b| b.track_count.cmp(&a.track_count));
    rows
}
