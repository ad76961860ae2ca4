use thiserror::Error;

/// Failures of a single search request
///
/// The widget treats every variant the same way (log and hide), but the
/// distinction is kept for logging and for the one-shot CLI mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Transport failure: connection refused, timeout, body read error
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a status outside 200..=299
    #[error("Search endpoint returned HTTP {code}")]
    Status { code: u16 },

    /// Body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors raised while setting the application up
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
