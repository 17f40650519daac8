//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, configuration, entry parsing, page fetching)
//! - Page outcome categories
//! - Processing statistics tracking (page outcomes, dropped entries)
//!
//! Only `FetchError`, `InitializationError` and `ConfigError` ever reach the
//! caller. `EntryError` is recovered inside the page fetcher by dropping the entry.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ConfigError, EntryError, FetchError, InitializationError, PageOutcome};
