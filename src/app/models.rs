//! Data models for the listening analytics pipeline
//!
//! This module contains the data structures for play events at each stage of
//! the pipeline: the loosely-typed record as read from the streaming-history
//! export, the cleaned record with guaranteed identity fields, and the
//! enriched record carrying the derived calendar/time features.

use crate::constants::{MONTH_NAMES, MS_PER_MINUTE, UNKNOWN_PLATFORM, WEEKDAY_NAMES};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

// =============================================================================
// Raw Play Record (source shape)
// =============================================================================

/// A single play event exactly as it appears in the streaming-history export
///
/// Every field is optional: the export contains podcast episodes, voice
/// entries, and partial records where any of these fields may be null or
/// absent. Fields outside this set are discarded during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPlayRecord {
    /// Play timestamp as an ISO-8601 string (e.g. "2025-03-15T14:30:11Z")
    #[serde(default)]
    pub ts: Option<String>,

    /// Track title
    #[serde(default)]
    pub master_metadata_track_name: Option<String>,

    /// Album artist name
    #[serde(default)]
    pub master_metadata_album_artist_name: Option<String>,

    /// Album title
    #[serde(default)]
    pub master_metadata_album_album_name: Option<String>,

    /// Milliseconds of the track that were actually played
    #[serde(default)]
    pub ms_played: Option<u64>,

    /// Whether the user skipped to the next track
    #[serde(default)]
    pub skipped: Option<bool>,

    /// Whether shuffle mode was on
    #[serde(default)]
    pub shuffle: Option<bool>,

    /// Whether the track was played offline
    #[serde(default)]
    pub offline: Option<bool>,

    /// Whether the session was in private mode
    #[serde(default)]
    pub incognito_mode: Option<bool>,

    /// Playback platform string (e.g. "android", "web_player")
    #[serde(default)]
    pub platform: Option<String>,

    /// Country the stream was played from
    #[serde(default)]
    pub conn_country: Option<String>,

    /// Why the track ended (e.g. "trackdone", "fwdbtn")
    #[serde(default)]
    pub reason_end: Option<String>,
}

impl RawPlayRecord {
    /// Extract the calendar year from the leading four characters of the
    /// timestamp, if present and numeric
    pub fn timestamp_year(&self) -> Option<i32> {
        let ts = self.ts.as_deref()?;
        ts.get(..4)?.parse().ok()
    }
}

// =============================================================================
// Normalized Play Record
// =============================================================================

/// A cleaned play event with canonical field names
///
/// Guaranteed to carry a timestamp, a track name, and an artist name; every
/// other field remains an explicit option. Two records are duplicates when
/// all twelve fields are equal, which is what `Eq`/`Hash` express here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlayRecord {
    /// Play timestamp as an ISO-8601 string
    pub ts: String,

    /// Track title (canonical rename of the export's metadata field)
    pub track_name: String,

    /// Artist name (canonical rename of the export's metadata field)
    pub artist_name: String,

    /// Album title (canonical rename of the export's metadata field)
    pub album_name: Option<String>,

    /// Milliseconds played
    pub ms_played: Option<u64>,

    /// Skip flag
    pub skipped: Option<bool>,

    /// Shuffle flag
    pub shuffle: Option<bool>,

    /// Offline flag
    pub offline: Option<bool>,

    /// Private-session flag
    pub incognito_mode: Option<bool>,

    /// Playback platform string
    pub platform: Option<String>,

    /// Connection country
    pub conn_country: Option<String>,

    /// End reason string
    pub reason_end: Option<String>,
}

// =============================================================================
// Enriched Play Record
// =============================================================================

/// A normalized play event extended with derived calendar/time features
///
/// Field order matches the column order of the exported enriched data file:
/// the twelve normalized fields first, then the derived features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPlay {
    pub ts: String,
    pub track_name: String,
    pub artist_name: String,
    pub album_name: Option<String>,
    pub ms_played: Option<u64>,
    pub skipped: Option<bool>,
    pub shuffle: Option<bool>,
    pub offline: Option<bool>,
    pub incognito_mode: Option<bool>,
    pub platform: Option<String>,
    pub conn_country: Option<String>,
    pub reason_end: Option<String>,

    /// Timezone-naive instant parsed from `ts`
    pub datetime: NaiveDateTime,

    /// Calendar date of the play
    pub date: NaiveDate,

    /// Hour of day, 0-23
    pub hour: u32,

    /// Weekday name ("Monday" .. "Sunday")
    pub day_name: String,

    /// Weekday index, Monday = 0 .. Sunday = 6
    pub day_of_week_num: u32,

    /// ISO week number
    pub week_number: u32,

    /// Month number, 1-12
    pub month: u32,

    /// English month name
    pub month_name: String,

    /// Minutes played (`ms_played` / 60000; 0.0 when milliseconds missing)
    pub minutes_played: f64,

    /// 1 when the play ran to completion (not skipped), else 0
    pub was_completed: u8,

    /// 1 when the play was skipped, else 0
    pub was_skipped: u8,
}

impl EnrichedPlay {
    /// Derive the enriched event from a normalized record
    ///
    /// The timestamp must be a full ISO-8601 / RFC 3339 string with a Zulu
    /// suffix or numeric UTC offset; a parse failure here is fatal for the
    /// whole run. A missing skip flag counts as not skipped, and missing
    /// milliseconds count as zero minutes played.
    pub fn from_record(record: PlayRecord) -> Result<Self> {
        let datetime = chrono::DateTime::parse_from_rfc3339(&record.ts)
            .map_err(|e| {
                Error::timestamp_parsing(format!("Invalid play timestamp '{}'", record.ts), e)
            })?
            .naive_utc();

        let date = datetime.date();
        let day_of_week_num = datetime.weekday().num_days_from_monday();
        let month = datetime.month();

        let minutes_played = record.ms_played.unwrap_or(0) as f64 / MS_PER_MINUTE;
        let was_skipped = u8::from(record.skipped.unwrap_or(false));

        Ok(Self {
            ts: record.ts,
            track_name: record.track_name,
            artist_name: record.artist_name,
            album_name: record.album_name,
            ms_played: record.ms_played,
            skipped: record.skipped,
            shuffle: record.shuffle,
            offline: record.offline,
            incognito_mode: record.incognito_mode,
            platform: record.platform,
            conn_country: record.conn_country,
            reason_end: record.reason_end,
            datetime,
            date,
            hour: datetime.hour(),
            day_name: WEEKDAY_NAMES[day_of_week_num as usize].to_string(),
            day_of_week_num,
            week_number: datetime.iso_week().week(),
            month,
            month_name: MONTH_NAMES[(month - 1) as usize].to_string(),
            minutes_played,
            was_completed: 1 - was_skipped,
            was_skipped,
        })
    }

    /// Platform group key: the platform string, or "unknown" when absent
    pub fn platform_key(&self) -> &str {
        self.platform.as_deref().unwrap_or(UNKNOWN_PLATFORM)
    }
}
