//! Feature enrichment for normalized play records
//!
//! Derives the calendar/time features and play-outcome flags from each
//! record. Stateless per record; a timestamp that fails the full ISO-8601
//! parse is fatal for the whole run, since the year filter only validated
//! the leading year digits.

use crate::Result;
use crate::app::models::{EnrichedPlay, PlayRecord};
use tracing::info;

/// Enrich every normalized record with derived features
///
/// # Returns
///
/// The enriched events in input order, or the first timestamp parse error
pub fn enrich_records(records: Vec<PlayRecord>) -> Result<Vec<EnrichedPlay>> {
    let enriched = records
        .into_iter()
        .map(EnrichedPlay::from_record)
        .collect::<Result<Vec<_>>>()?;

    info!("Feature enrichment complete for {} events", enriched.len());

    Ok(enriched)
}
