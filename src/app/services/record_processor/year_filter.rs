//! Calendar-year filtering of raw play records
//!
//! The filter reads only the leading four characters of the timestamp, so a
//! record survives here even when the rest of the string is malformed; the
//! full parse happens during enrichment.

use crate::app::models::RawPlayRecord;
use tracing::info;

/// Retain only records whose timestamp falls in the target year
///
/// Records with a missing or unparsable timestamp are excluded. Order of the
/// surviving records is preserved. Pure function, no side effects beyond a
/// progress log line.
pub fn filter_to_year(records: Vec<RawPlayRecord>, target_year: i32) -> Vec<RawPlayRecord> {
    let total = records.len();
    let filtered: Vec<RawPlayRecord> = records
        .into_iter()
        .filter(|record| record.timestamp_year() == Some(target_year))
        .collect();

    info!(
        "Year filter: {} of {} records fall in {}",
        filtered.len(),
        total,
        target_year
    );

    filtered
}
