//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, fixed feed URL segments, export columns)
//! - CLI option types and parsing
//! - The library-facing `Config` struct

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
