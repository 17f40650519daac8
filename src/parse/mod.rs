//! Feed entry parsing.
//!
//! Turns one raw JSON feed entry into a `ReviewRecord`. Parsing is pure: no
//! I/O, no logging, and a failed entry never yields a partial record.

mod entry;

// Re-export public API
pub use entry::parse_entry;
