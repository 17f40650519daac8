//! Export run orchestration.
//!
//! Wires configuration, HTTP client, page collection and export together.

mod collect;
mod finalize;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::config::Config;
use crate::error_handling::ProcessingStats;
use crate::export::{export, ExportOptions};
use crate::fetch::ReviewFeed;
use crate::initialization::init_client;

pub use collect::collect_reviews;
use finalize::print_page_statistics;

/// Results of an export run.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// App Store id the reviews belong to
    pub app_id: u64,
    /// Number of feed pages requested
    pub pages_requested: usize,
    /// Pages that contributed no reviews (non-200, no entries, or all malformed)
    pub empty_pages: usize,
    /// Malformed entries that were skipped
    pub dropped_entries: usize,
    /// Number of reviews written to the output file
    pub records_exported: usize,
    /// Path of the written export file
    pub output_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a review export with the provided configuration.
///
/// Requests pages `1..=config.max_pages` of the app's review feed in order,
/// then writes every collected review to `config.output_path()`, replacing
/// any existing file. The file is written once, after all pages are fetched.
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid
/// - The HTTP client cannot be built
/// - A page request fails at the network level or returns an undecodable body
/// - The output file cannot be written
///
/// # Example
///
/// ```no_run
/// use app_reviews::{run_export, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let report = run_export(Config::default()).await?;
/// println!("Exported {} reviews", report.records_exported);
/// # Ok(())
/// # }
/// ```
pub async fn run_export(config: Config) -> Result<ExportReport> {
    let start_time = Instant::now();
    config.validate().context("Invalid configuration")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let feed = ReviewFeed::from_config(client, &config);
    let stats = ProcessingStats::new();

    info!(
        "Collecting reviews for app {} ({} page(s), country {})",
        config.app_id, config.max_pages, config.country
    );
    let table = collect_reviews(&feed, config.app_id, config.max_pages, &stats)
        .await
        .with_context(|| format!("Failed to collect reviews for app {}", config.app_id))?;
    print_page_statistics(&stats, table.len());

    let options = ExportOptions {
        output: config.output_path(),
        format: config.format,
    };
    let records_exported = export(&table, &options)?;
    info!(
        "Wrote {} review(s) to {}",
        records_exported,
        options.output.display()
    );

    Ok(ExportReport {
        app_id: config.app_id,
        pages_requested: stats.total_pages(),
        empty_pages: stats.empty_pages(),
        dropped_entries: stats.dropped_entries(),
        records_exported,
        output_path: options.output,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
