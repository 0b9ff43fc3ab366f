//! Aggregation module for the enriched play-event set
//!
//! Produces the seven summary tables and the overall listening KPIs. Every
//! table is an independent snapshot computed in its own accumulation pass
//! over the same enriched event set; no table reads another.
//!
//! # Architecture
//!
//! - [`summary_tables`] - Daily, artist, and track summaries
//! - [`pattern_tables`] - Hourly, weekly, monthly, and platform tables
//! - [`kpi`] - Scalar KPIs and console number formatting
//!
//! Grouping uses ordered-map accumulators keyed by the group dimension, so
//! tables whose presentation order equals their grouping order (date, hour,
//! weekday, month) come out sorted for free; the minute-ranked tables get a
//! stable descending sort afterwards, preserving key order among ties.

pub mod kpi;
pub mod pattern_tables;
pub mod summary_tables;

#[cfg(test)]
pub mod tests;

pub use kpi::KpiReport;
pub use pattern_tables::{
    HourlyPatternRow, MonthlyProgressionRow, PlatformDistributionRow, WeeklyPatternRow,
    build_hourly_pattern, build_monthly_progression, build_platform_distribution,
    build_weekly_pattern,
};
pub use summary_tables::{
    ArtistSummaryRow, DailySummaryRow, TrackSummaryRow, build_artist_summary,
    build_daily_summary, build_track_summary,
};

use crate::app::models::EnrichedPlay;
use tracing::info;

/// Round a ratio/measure to two decimal places
///
/// NaN propagates unchanged, matching the accepted division-by-zero
/// behavior for rate columns.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The complete set of aggregate report tables
#[derive(Debug, Clone)]
pub struct ReportTables {
    pub daily_summary: Vec<DailySummaryRow>,
    pub artist_summary: Vec<ArtistSummaryRow>,
    pub track_summary: Vec<TrackSummaryRow>,
    pub hourly_pattern: Vec<HourlyPatternRow>,
    pub weekly_pattern: Vec<WeeklyPatternRow>,
    pub monthly_progression: Vec<MonthlyProgressionRow>,
    pub platform_distribution: Vec<PlatformDistributionRow>,
}

impl ReportTables {
    /// Build all seven tables from the enriched event set
    pub fn build(plays: &[EnrichedPlay]) -> Self {
        let tables = Self {
            daily_summary: build_daily_summary(plays),
            artist_summary: build_artist_summary(plays),
            track_summary: build_track_summary(plays),
            hourly_pattern: build_hourly_pattern(plays),
            weekly_pattern: build_weekly_pattern(plays),
            monthly_progression: build_monthly_progression(plays),
            platform_distribution: build_platform_distribution(plays),
        };

        info!(
            "Aggregation complete: {} days, {} artists, {} tracks, {} hours, \
             {} weekdays, {} months, {} platforms",
            tables.daily_summary.len(),
            tables.artist_summary.len(),
            tables.track_summary.len(),
            tables.hourly_pattern.len(),
            tables.weekly_pattern.len(),
            tables.monthly_progression.len(),
            tables.platform_distribution.len()
        );

        tables
    }
}
