//! Overall listening KPIs and console number formatting
//!
//! The KPI scalars are computed once over the whole enriched event set.
//! On an empty set the rate and average fields are NaN (0/0) rather than
//! an error; the console report prints them as-is.

use crate::app::models::EnrichedPlay;
use serde::Serialize;
use std::collections::HashSet;

/// Scalar key performance indicators for one report year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiReport {
    /// Total listening time in minutes
    pub total_minutes: f64,
    /// Total listening time in hours
    pub total_hours: f64,
    /// Total track plays (row count)
    pub total_tracks: usize,
    /// Distinct artist names
    pub unique_artists: usize,
    /// Distinct track names
    pub unique_tracks: usize,
    /// Skipped plays as a percentage of all plays (NaN on an empty set)
    pub skip_rate: f64,
    /// Completed plays as a percentage of all plays (NaN on an empty set)
    pub completion_rate: f64,
    /// Distinct calendar dates with at least one play
    pub listening_days: usize,
    /// total_minutes / listening_days (NaN when there are no listening days)
    pub avg_daily_minutes: f64,
}

impl KpiReport {
    /// Compute the KPI scalars from the enriched event set
    pub fn compute(plays: &[EnrichedPlay]) -> Self {
        let total_minutes: f64 = plays.iter().map(|p| p.minutes_played).sum();
        let total_tracks = plays.len();

        let skips: usize = plays.iter().map(|p| p.was_skipped as usize).sum();
        let completions: usize = plays.iter().map(|p| p.was_completed as usize).sum();

        let mut artists = HashSet::new();
        let mut tracks = HashSet::new();
        let mut days = HashSet::new();
        for play in plays {
            artists.insert(play.artist_name.as_str());
            tracks.insert(play.track_name.as_str());
            days.insert(play.date);
        }

        Self {
            total_minutes,
            total_hours: total_minutes / 60.0,
            total_tracks,
            unique_artists: artists.len(),
            unique_tracks: tracks.len(),
            skip_rate: skips as f64 / total_tracks as f64 * 100.0,
            completion_rate: completions as f64 / total_tracks as f64 * 100.0,
            listening_days: days.len(),
            avg_daily_minutes: total_minutes / days.len() as f64,
        }
    }
}

// =============================================================================
// Console Number Formatting
// =============================================================================

/// Format a count with thousands separators (e.g. 12345 -> "12,345")
pub fn format_count(value: usize) -> String {
    group_digits(&value.to_string())
}

/// Format a float with thousands separators and fixed decimal places
///
/// Non-finite values (the NaN rate columns on an empty set) format with
/// the standard float rendering.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (integral, fraction) = match formatted.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(integral));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Insert a comma every three digits, counting from the right
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
