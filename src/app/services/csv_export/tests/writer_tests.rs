//! Tests for the CSV writer

use crate::Error;
use crate::app::services::aggregator::ReportTables;
use crate::app::services::aggregator::tests::create_play;
use crate::app::services::csv_export::CsvExporter;
use crate::config::Config;
use std::path::PathBuf;
use tempfile::TempDir;

fn test_plays() -> Vec<crate::app::models::EnrichedPlay> {
    vec![
        create_play("2025-01-01T08:00:00Z", "Track A", "Artist A", 180_000, false),
        create_play("2025-01-02T09:00:00Z", "Track B", "Artist B", 120_000, true),
    ]
}

fn config_for(output_dir: PathBuf) -> Config {
    Config::default()
        .with_target_year(2025)
        .with_output_dir(output_dir)
}

#[test]
fn test_export_all_creates_eight_files() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("reports");
    let config = config_for(output_dir.clone());

    let plays = test_plays();
    let tables = ReportTables::build(&plays);
    let summary = CsvExporter::new(&config).export_all(&tables, &plays).unwrap();

    assert_eq!(summary.files.len(), 8);
    for file_name in [
        "daily_summary.csv",
        "artist_summary.csv",
        "track_summary.csv",
        "hourly_pattern.csv",
        "weekly_pattern.csv",
        "monthly_progression.csv",
        "platform_distribution.csv",
        "raw_data_2025.csv",
    ] {
        assert!(
            output_dir.join(file_name).exists(),
            "missing export: {file_name}"
        );
    }
}

#[test]
fn test_export_writes_headers_and_rows() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("reports");
    let config = config_for(output_dir.clone());

    let plays = test_plays();
    let tables = ReportTables::build(&plays);
    CsvExporter::new(&config).export_all(&tables, &plays).unwrap();

    let daily = std::fs::read_to_string(output_dir.join("daily_summary.csv")).unwrap();
    let mut lines = daily.lines();
    let header = lines.next().unwrap();
    assert_eq!(
        header,
        "date,total_minutes,tracks_played,skips,completions,unique_artists,skip_rate,hours_played"
    );
    assert_eq!(lines.count(), 2); // one row per listening day

    let weekly = std::fs::read_to_string(output_dir.join("weekly_pattern.csv")).unwrap();
    assert!(weekly.starts_with(
        "day_name,total_minutes,track_count,skips,unique_artists,skip_rate,day_order"
    ));
}

#[test]
fn test_export_summary_row_counts() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path().join("reports"));

    let plays = test_plays();
    let tables = ReportTables::build(&plays);
    let summary = CsvExporter::new(&config).export_all(&tables, &plays).unwrap();

    let raw_rows = summary
        .files
        .iter()
        .find(|(name, _)| name == "raw_data_2025.csv")
        .map(|(_, rows)| *rows)
        .unwrap();
    assert_eq!(raw_rows, plays.len());
    assert!(summary.total_rows() > 0);
}

#[test]
fn test_export_overwrites_existing_files() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("reports");
    std::fs::create_dir_all(&output_dir).unwrap();
    std::fs::write(output_dir.join("daily_summary.csv"), "stale content").unwrap();

    let config = config_for(output_dir.clone());
    let plays = test_plays();
    let tables = ReportTables::build(&plays);
    CsvExporter::new(&config).export_all(&tables, &plays).unwrap();

    let daily = std::fs::read_to_string(output_dir.join("daily_summary.csv")).unwrap();
    assert!(!daily.contains("stale content"));
    assert!(daily.starts_with("date,"));
}

#[test]
fn test_export_fails_when_destination_unwritable() {
    let temp_dir = TempDir::new().unwrap();
    // A plain file where the output directory should be
    let blocked = temp_dir.path().join("reports");
    std::fs::write(&blocked, "not a directory").unwrap();

    let config = config_for(blocked);
    let plays = test_plays();
    let tables = ReportTables::build(&plays);

    let result = CsvExporter::new(&config).export_all(&tables, &plays);
    assert!(matches!(
        result,
        Err(Error::Io { .. }) | Err(Error::CsvWriting { .. })
    ));
}

#[test]
fn test_export_empty_event_set() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("reports");
    let config = config_for(output_dir.clone());

    let plays: Vec<crate::app::models::EnrichedPlay> = vec![];
    let tables = ReportTables::build(&plays);
    let summary = CsvExporter::new(&config).export_all(&tables, &plays).unwrap();

    assert_eq!(summary.files.len(), 8);
    assert_eq!(summary.total_rows(), 0);
    assert!(output_dir.join("raw_data_2025.csv").exists());
}
