//! Error type definitions.
//!
//! This module defines the error types and page outcome categories used
//! throughout the application.

use std::num::ParseIntError;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Configuration values rejected before any request is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The feed base URL does not parse.
    #[error("Invalid feed base URL '{url}': {source}")]
    InvalidFeedBaseUrl {
        /// The rejected value
        url: String,
        /// Why it failed to parse
        #[source]
        source: url::ParseError,
    },

    /// The storefront country code is blank.
    #[error("Country code must not be empty")]
    EmptyCountry,
}

/// Why a single feed entry could not be turned into a review record.
///
/// These errors never leave the page fetcher: the entry is dropped and its
/// siblings are kept.
#[derive(Error, Debug)]
pub enum EntryError {
    /// A key on the path to a label is absent, or a node on the path is not an object.
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// The label exists but is not a JSON string.
    #[error("field '{0}' is not a string")]
    NotAString(&'static str),

    /// An integer field holds text that is not an integer.
    #[error("field '{field}' is not an integer: {value:?}")]
    ParseError {
        /// Dotted path of the label
        field: &'static str,
        /// The label text as found in the feed
        value: String,
        /// Integer parse failure
        #[source]
        source: ParseIntError,
    },
}

/// Unrecovered failures while fetching one feed page.
///
/// A non-200 status is not an error: the page fetcher reports it as an empty page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, DNS, or body read failure.
    #[error("Request to {url} failed: {source}")]
    Request {
        /// Page URL
        url: String,
        /// Underlying transport error
        #[source]
        source: ReqwestError,
    },

    /// The response body is not valid JSON.
    #[error("Response from {url} is not valid JSON: {source}")]
    InvalidJson {
        /// Page URL
        url: String,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// The response JSON has no top-level `feed` object.
    #[error("Response from {url} has no 'feed' object")]
    MissingFeed {
        /// Page URL
        url: String,
    },
}

/// How a single page request ended.
///
/// The page fetcher collapses every variant except `Populated` into an empty
/// result; these categories only feed the run statistics and debug logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum PageOutcome {
    /// At least one entry parsed into a review record
    Populated,
    /// The feed had no entries
    NoEntries,
    /// Entries were present but every one was malformed
    AllEntriesMalformed,
    /// The server answered with a status other than 200
    NonSuccessStatus,
}

impl std::fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PageOutcome {
    /// Human-readable label used in the run statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageOutcome::Populated => "Pages with reviews",
            PageOutcome::NoEntries => "Pages without entries",
            PageOutcome::AllEntriesMalformed => "Pages with only malformed entries",
            PageOutcome::NonSuccessStatus => "Pages with non-200 status",
        }
    }
}
