//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `app_reviews` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use app_reviews::config::Opt;
use app_reviews::initialization::init_logger_with;
use app_reviews::{run_export, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config: Config = Opt::parse().into();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_export(config).await {
        Ok(report) => {
            println!(
                "Exported {} review{} for app {} from {} page{} in {:.1}s",
                report.records_exported,
                if report.records_exported == 1 { "" } else { "s" },
                report.app_id,
                report.pages_requested,
                if report.pages_requested == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("app_reviews error: {:#}", e);
            process::exit(1);
        }
    }
}
