//! dirtally — directory statistics with a persisted JSON report.
//!
//! Thin binary entry point. All logic lives in the `dirtally-core` crate;
//! this shim owns argument checking, console output, and exit codes.

use dirtally_core::{DirectoryAnalyzer, DEFAULT_REPORT_FILE_NAME};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Threshold for the console's "Large files" section — looser than the
/// report's, so some context shows even when the report section is empty.
const CONSOLE_LARGE_FILE_MIN_MB: f64 = 5.0;

/// How many large files the console lists.
const CONSOLE_LARGE_FILE_LIMIT: usize = 5;

fn main() -> ExitCode {
    // Diagnostics go to stderr and are off unless RUST_LOG opts in, keeping
    // stdout clean for the summary.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("dirtally starting");

    let mut args = std::env::args().skip(1);
    let (directory, extra) = (args.next(), args.next());
    let directory = match (directory, extra) {
        (Some(dir), None) => dir,
        _ => {
            println!("Usage: dirtally <directory>");
            return ExitCode::from(2);
        }
    };

    match run(&directory) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Analyze one directory and print the summary.
fn run(directory: &str) -> anyhow::Result<()> {
    let analyzer = DirectoryAnalyzer::new(directory)?;

    println!("Analyzing directory: {directory}");
    println!("{}", "-".repeat(50));

    let stats = analyzer.compute_stats();
    println!("Total files: {}", stats.total_files);
    println!("Total size: {} MB", fmt_mb(stats.total_size_mb));

    println!("\nFile types:");
    for (ext, count) in &stats.extensions_count {
        let label = if ext.is_empty() { "no extension" } else { ext };
        println!("  {label}: {count}");
    }

    let large_files = analyzer.find_large_files(CONSOLE_LARGE_FILE_MIN_MB);
    if !large_files.is_empty() {
        println!("\nLarge files (>{CONSOLE_LARGE_FILE_MIN_MB} MB):");
        for entry in large_files.iter().take(CONSOLE_LARGE_FILE_LIMIT) {
            println!("  {} MB: {}", fmt_mb(entry.size_mb), entry.path);
        }
    }

    let report_path = analyzer.generate_report(DEFAULT_REPORT_FILE_NAME)?;
    println!("\nReport saved: {}", report_path.display());

    Ok(())
}

/// Render a rounded megabyte value for the console. f64 `Display` drops the
/// trailing `.0` on whole values; `Debug` keeps it, so `0` prints as `0.0`
/// and `5` as `5.0`.
fn fmt_mb(mb: f64) -> String {
    format!("{mb:?}")
}
