//! Search client abstraction

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single search result entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Page title
    pub title: String,
    /// Target URL (may be empty)
    pub url: String,
    /// Short text excerpt
    pub snippet: String,
}

impl SearchResult {
    /// Create a result entry
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }
}

/// Provider of web search results
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Return at most `max_results` results for `query`
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>>;
}
