//! Command implementation for the listening analytics CLI
//!
//! This module contains the pipeline orchestration, logging setup, and the
//! final console KPI report.

use crate::app::services::aggregator::kpi::{format_count, format_grouped};
use crate::app::services::aggregator::{KpiReport, ReportTables};
use crate::app::services::csv_export::{CsvExporter, ExportSummary};
use crate::app::services::loader;
use crate::app::services::record_processor::RecordProcessor;
use crate::cli::args::Args;
use crate::config::Config;
use crate::Result;
use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info};

/// Run statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of raw records loaded from the export
    pub records_loaded: usize,
    /// Number of enriched events analyzed
    pub plays_analyzed: usize,
    /// Number of CSV files written
    pub files_written: usize,
    /// Total run time
    pub run_time: std::time::Duration,
}

/// Main command runner for the listening analytics pipeline
///
/// Orchestrates the full batch run:
/// 1. Set up logging and configuration
/// 2. Load the streaming-history export
/// 3. Clean and enrich the play events for the target year
/// 4. Aggregate the report tables and KPI scalars
/// 5. Export everything as CSV and print the KPI report
pub fn run(args: Args) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("Starting listening analytics pipeline");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let records = loader::load_history(&config.source_path)?;
    let records_loaded = records.len();

    let processor = RecordProcessor::new(config.target_year);
    let processed = processor.process(records)?;

    let tables = ReportTables::build(&processed.plays);
    let kpis = KpiReport::compute(&processed.plays);

    let exporter = CsvExporter::new(&config);
    let export_summary = exporter.export_all(&tables, &processed.plays)?;

    print_kpi_report(&config, &kpis, &export_summary);

    let stats = RunStats {
        records_loaded,
        plays_analyzed: processed.play_count(),
        files_written: export_summary.files.len(),
        run_time: start_time.elapsed(),
    };

    info!(
        "Pipeline complete: {} raw records -> {} plays -> {} files in {:.2?}",
        stats.records_loaded, stats.plays_analyzed, stats.files_written, stats.run_time
    );

    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("listening_analytics={}", log_level)));

    // try_init so repeated calls inside one process (tests) are harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Print the final KPI report to stdout
fn print_kpi_report(config: &Config, kpis: &KpiReport, export_summary: &ExportSummary) {
    let title = format!("Listening Report {}", config.target_year);

    println!();
    println!("{}", title.bold().green());
    println!("{}", "=".repeat(title.len()).green());
    println!(
        "Total Listening Time: {} hours ({} minutes)",
        format_grouped(kpis.total_hours, 1),
        format_grouped(kpis.total_minutes, 0)
    );
    println!("Total Tracks Played: {}", format_count(kpis.total_tracks));
    println!("Unique Artists: {}", format_count(kpis.unique_artists));
    println!("Unique Tracks: {}", format_count(kpis.unique_tracks));
    println!("Skip Rate: {:.2}%", kpis.skip_rate);
    println!("Completion Rate: {:.2}%", kpis.completion_rate);
    println!("Listening Days: {}", format_count(kpis.listening_days));
    println!(
        "Average Daily Listening: {:.2} minutes ({:.2} hours)",
        kpis.avg_daily_minutes,
        kpis.avg_daily_minutes / 60.0
    );

    println!();
    println!("{}", "Exported Reports".bold());
    for (file_name, rows) in &export_summary.files {
        println!("  {} ({} rows)", file_name, rows);
    }
    println!(
        "\nAll CSV files saved to: {}",
        config.output_dir.display().to_string().cyan()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args_for(source: PathBuf, output: PathBuf) -> Args {
        Args {
            source_path: Some(source),
            target_year: Some(2025),
            output_dir: Some(output),
            verbose: 0,
            quiet: true,
        }
    }

    #[test]
    fn test_run_full_pipeline() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("history.json");
        let output = temp_dir.path().join("reports");

        std::fs::write(
            &source,
            r#"[
                {"ts": "2025-01-01T10:00:00Z",
                 "master_metadata_track_name": "Song A",
                 "master_metadata_album_artist_name": "Artist A",
                 "ms_played": 180000, "skipped": false, "platform": "android"},
                {"ts": "2024-06-01T10:00:00Z",
                 "master_metadata_track_name": "Old Song",
                 "master_metadata_album_artist_name": "Artist B",
                 "ms_played": 60000, "skipped": false}
            ]"#,
        )
        .unwrap();

        let stats = run(args_for(source, output.clone())).unwrap();

        assert_eq!(stats.records_loaded, 2);
        assert_eq!(stats.plays_analyzed, 1);
        assert_eq!(stats.files_written, 8);
        assert!(output.join("daily_summary.csv").exists());
    }

    #[test]
    fn test_run_missing_source_fails() {
        let temp_dir = TempDir::new().unwrap();
        let args = args_for(
            temp_dir.path().join("no_such_file.json"),
            temp_dir.path().join("reports"),
        );

        let result = run(args);
        assert!(matches!(result, Err(crate::Error::SourceNotFound { .. })));
    }

    #[test]
    fn test_print_kpi_report_handles_empty_set() {
        let config = Config::default();
        let kpis = KpiReport::compute(&[]);
        let export_summary = ExportSummary::default();

        // NaN rates must render, not panic
        print_kpi_report(&config, &kpis, &export_summary);
    }
}
