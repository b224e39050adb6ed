//! Error types for search operations

use thiserror::Error;

/// Search client errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// No client could be constructed
    #[error("Search client unavailable: {0}")]
    Unavailable(String),

    /// Transport-level error (connection, status, body)
    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a bot-detection page
    #[error("Search provider blocked the request, try again in a few minutes")]
    Blocked,

    /// Result page could not be parsed
    #[error("Failed to parse search results: {0}")]
    Parse(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, SearchError>;
