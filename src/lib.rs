//! app_reviews library: App Store customer review export
//!
//! This library pages through the public App Store customer review feed of one
//! application, normalizes every review into a fixed five-column record, and
//! writes the collected reviews to a CSV (or JSONL) file.
//!
//! # Example
//!
//! ```no_run
//! use app_reviews::{run_export, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     app_id: 1065803457,
//!     max_pages: 10,
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!("Exported {} reviews to {}",
//!          report.records_exported, report.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Pages are still fetched strictly one
//! after another; a current-thread runtime is enough.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
mod run;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use export::ExportFormat;
pub use models::{ReviewRecord, ReviewTable};
pub use run::{collect_reviews, run_export, ExportReport};
