//! Streaming-history loader
//!
//! Reads the raw JSON export into memory as a sequence of loosely-typed
//! play records. A missing source file is the one load failure with a
//! dedicated error; malformed content propagates as a fatal parse error.

use crate::app::models::RawPlayRecord;
use crate::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Load the full collection of raw play records from the export file
///
/// # Arguments
///
/// * `path` - Path to the streaming-history JSON export
///
/// # Returns
///
/// All records in source order, or `Error::SourceNotFound` when the file
/// does not exist
pub fn load_history(path: &Path) -> Result<Vec<RawPlayRecord>> {
    if !path.exists() {
        return Err(Error::source_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open '{}'", path.display()), e))?;

    let records: Vec<RawPlayRecord> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            Error::json_parsing(
                path.display().to_string(),
                "Streaming history is not a valid JSON array of play records",
                Some(e),
            )
        })?;

    info!(
        "Loaded {} raw play records from {}",
        records.len(),
        path.display()
    );

    Ok(records)
}
