// Error types for RangeScout
//
// Structured error types using thiserror so callers can match on the
// failure kind instead of inspecting message strings. Transport and JSON
// decode failures pass through transparently from reqwest and serde_json.

use std::net::AddrParseError;

use ipnetwork::IpNetworkError;
use thiserror::Error;

/// Errors produced while locating, parsing, and querying range data
#[derive(Debug, Error)]
pub enum RangeError {
    /// A string handed to range expansion is not a valid IPv4 CIDR block
    #[error("invalid IPv4 range '{cidr}': {source}")]
    InvalidRange {
        cidr: String,
        source: IpNetworkError,
    },

    /// A string handed to membership resolution is not a valid IPv4 address
    #[error("invalid IPv4 address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        source: AddrParseError,
    },

    /// The landing page contains no link matching the download pattern
    #[error("no download link matching `{pattern}` found in page content")]
    DownloadLinkNotFound { pattern: String },

    /// The range document decodes as JSON but lacks the expected record shape
    #[error("malformed range document: {details}")]
    MalformedDocument { details: String },

    /// Built-in data or caller configuration is unusable
    #[error("configuration error: {message}")]
    Config { message: String },

    /// The remote server answered with a non-success status
    #[error("HTTP status {status} fetching {url}")]
    Http { status: u16, url: String },

    /// Network-level failure from the HTTP client
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The fetched document is not valid JSON at all
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
