//! Logger setup for the CLI.
//!
//! Review-level detail (skipped entries, empty pages) is emitted at `debug`;
//! the default `info` level shows only run totals.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Record};

/// Dependencies whose own logging is capped regardless of `--log-level`.
const QUIET_DEPENDENCIES: [(&str, LevelFilter); 4] = [
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("rustls", LevelFilter::Warn),
];

/// Installs the global logger.
///
/// `level` applies to this crate and to anything `RUST_LOG` does not mention;
/// HTTP and TLS dependencies stay at `info`/`warn` so `--log-level debug`
/// shows per-page detail without connection chatter.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show skipped entries and empty pages
/// app_reviews --log-level debug
///
/// # JSON lines for a log collector
/// app_reviews --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, cap) in QUIET_DEPENDENCIES {
        builder.filter_module(module, cap);
    }
    builder.filter_module("app_reviews", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| writeln!(buf, "{}", json_line(record))),
        LogFormat::Plain => builder.format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                record.target().cyan(),
                painted_level(record.level()),
                record.args()
            )
        }),
    };

    builder.try_init()?;
    Ok(())
}

/// One log record as a single-line JSON object.
fn json_line(record: &Record) -> String {
    serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

fn painted_level(level: Level) -> ColoredString {
    let label = level.as_str();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}
