//! Tests for the main RecordProcessor and integration scenarios

use super::*;
use crate::Error;
use crate::app::services::record_processor::RecordProcessor;
use chrono::Datelike;

#[test]
fn test_process_full_pipeline_counts() {
    let processor = RecordProcessor::new(2025);

    let duplicate = create_complete_record("2025-01-01T10:00:00Z");
    let records = vec![
        create_complete_record("2024-06-01T10:00:00Z"), // wrong year
        duplicate.clone(),
        duplicate, // exact duplicate
        create_raw_record(Some("2025-02-01T10:00:00Z"), None, Some("Artist")),
        create_raw_record(Some("2025-03-01T10:00:00Z"), Some("Track"), None),
        create_complete_record("2025-04-01T10:00:00Z"),
        create_raw_record(None, Some("Track"), Some("Artist")), // no timestamp
    ];

    let result = processor.process(records).unwrap();

    assert_eq!(result.stats.total_input, 7);
    assert_eq!(result.stats.in_target_year, 5);
    assert_eq!(result.stats.missing_track_name, 1);
    assert_eq!(result.stats.missing_artist_name, 1);
    assert_eq!(result.stats.duplicates_removed, 1);
    assert_eq!(result.stats.normalized, 2);
    assert_eq!(result.stats.final_output, 2);
    assert_eq!(result.play_count(), 2);
}

#[test]
fn test_process_every_event_in_target_year() {
    let processor = RecordProcessor::new(2025);

    let records = vec![
        create_complete_record("2023-01-01T10:00:00Z"),
        create_complete_record("2025-01-01T10:00:00Z"),
        create_complete_record("2025-12-31T23:00:00Z"),
        create_complete_record("2026-01-01T00:00:00Z"),
    ];

    let result = processor.process(records).unwrap();

    for play in &result.plays {
        assert_eq!(play.date.year(), 2025);
    }
}

#[test]
fn test_process_record_missing_artist_absent_from_output() {
    let processor = RecordProcessor::new(2025);

    let mut orphan = create_raw_record(Some("2025-05-05T10:00:00Z"), Some("Orphan Track"), None);
    orphan.platform = Some("web_player".to_string());
    let records = vec![orphan, create_complete_record("2025-05-05T11:00:00Z")];

    let result = processor.process(records).unwrap();

    assert_eq!(result.play_count(), 1);
    assert!(
        result
            .plays
            .iter()
            .all(|play| play.track_name != "Orphan Track")
    );
}

#[test]
fn test_process_empty_input() {
    let processor = RecordProcessor::new(2025);
    let result = processor.process(vec![]).unwrap();

    assert_eq!(result.play_count(), 0);
    assert_eq!(result.stats.total_input, 0);
    assert_eq!(result.stats.retention_rate(), 100.0);
}

#[test]
fn test_process_propagates_timestamp_error() {
    let processor = RecordProcessor::new(2025);
    let records = vec![create_complete_record("2025-99-99T10:00:00Z")];

    let result = processor.process(records);
    assert!(matches!(result, Err(Error::TimestampParsing { .. })));
}
