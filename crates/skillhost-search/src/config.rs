//! Configuration for the default search client

use serde::Deserialize;
use std::time::Duration;

/// Settings used to build the default DuckDuckGo client
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    /// HTML search endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Optional request timeout in seconds (none by default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    "https://html.duckduckgo.com/html/".to_string()
}

fn default_user_agent() -> String {
    concat!("skillhost/", env!("CARGO_PKG_VERSION")).to_string()
}

impl SearchSettings {
    /// Request timeout, if one is configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}
