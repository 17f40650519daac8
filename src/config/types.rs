//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_APP_ID, DEFAULT_COUNTRY, DEFAULT_FEED_BASE_URL, DEFAULT_MAX_PAGES,
    DEFAULT_OUTPUT_DIR,
};
use crate::error_handling::ConfigError;
use crate::export::ExportFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Every field defaults to the value the export job has always used, so
/// `Config::default()` exports the reviews of the default app from the first
/// ten feed pages into `./<app_id>.csv`.
///
/// # Examples
///
/// ```no_run
/// use app_reviews::Config;
///
/// let config = Config {
///     app_id: 284882215,
///     max_pages: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// App Store id of the application
    pub app_id: u64,

    /// Number of feed pages to request, starting at page 1
    pub max_pages: u32,

    /// Storefront country code used in the feed URL
    pub country: String,

    /// Scheme and host of the review feed
    pub feed_base_url: String,

    /// Directory the export file is written into
    pub output_dir: PathBuf,

    /// Export format
    pub format: ExportFormat,

    /// Optional per-request timeout in seconds (none by default)
    pub timeout_seconds: Option<u64>,

    /// Optional HTTP User-Agent header value (none by default)
    pub user_agent: Option<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID,
            max_pages: DEFAULT_MAX_PAGES,
            country: DEFAULT_COUNTRY.to_string(),
            feed_base_url: DEFAULT_FEED_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: ExportFormat::Csv,
            timeout_seconds: None,
            user_agent: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the settings that cannot be validated by the argument parser.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFeedBaseUrl` if the base URL does not parse,
    /// or `ConfigError::EmptyCountry` if the country code is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.feed_base_url).map_err(|source| {
            ConfigError::InvalidFeedBaseUrl {
                url: self.feed_base_url.clone(),
                source,
            }
        })?;
        if self.country.trim().is_empty() {
            return Err(ConfigError::EmptyCountry);
        }
        Ok(())
    }

    /// Path of the export file: `<output_dir>/<app_id>.<extension>`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.app_id, self.format.extension()))
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Export the default app's reviews to ./1065803457.csv
/// app_reviews
///
/// # Another app, five pages, US storefront
/// app_reviews --app-id 284882215 --max-pages 5 --country US
///
/// # JSON Lines into a custom directory
/// app_reviews --format jsonl --output-dir ./exports
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "app_reviews",
    about = "Exports App Store customer reviews for one application to CSV."
)]
pub struct Opt {
    /// App Store id of the application
    #[arg(long, default_value_t = DEFAULT_APP_ID)]
    pub app_id: u64,

    /// Number of feed pages to request (pages 1..=N, empty pages do not stop the run)
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Storefront country code
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Scheme and host of the review feed
    #[arg(long, default_value = DEFAULT_FEED_BASE_URL)]
    pub feed_base_url: String,

    /// Directory to write the export file into (overwrites `<app_id>.<ext>`)
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Export format: csv|jsonl
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Per-request timeout in seconds (no timeout unless set)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value (none unless set)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            app_id: opt.app_id,
            max_pages: opt.max_pages,
            country: opt.country,
            feed_base_url: opt.feed_base_url,
            output_dir: opt.output_dir,
            format: opt.format,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
