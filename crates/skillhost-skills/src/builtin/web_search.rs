//! Web search skill: runs a search and keeps the hits for later processing
//!
//! Results are stored under [`STORAGE_NAMESPACE`] keyed by the exact query, and the
//! query itself under [`LAST_QUERY_KEY`]. Other skills read these keys, so they are
//! part of this module's public surface.

use async_trait::async_trait;
use skillhost_search::{DuckDuckGoClient, SearchClient, SearchError, SearchResult, SearchSettings};
use skillhost_storage::Storage;
use skillhost_types::{SearchRecord, SkillMetadata, StoredValue};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::skill::Skill;
use crate::text::truncate_chars;

/// Storage namespace owned by the web search skill
pub const STORAGE_NAMESPACE: &str = "web_search";
/// Reserved key holding the most recent query
pub const LAST_QUERY_KEY: &str = "__last_query__";
/// Results requested per search unless configured otherwise
pub const DEFAULT_MAX_RESULTS: usize = 5;

const MAX_SNIPPET_CHARS: usize = 180;
const UNTITLED: &str = "Unbenannter Treffer";

fn default_metadata() -> SkillMetadata {
    SkillMetadata::new(
        "WebSearchSkill",
        "Führt eine Websuche durch und speichert die Ergebnisse für weitere Verarbeitung.",
    )
}

/// Skill that performs a web search using a configurable search client
pub struct WebSearchSkill {
    metadata: SkillMetadata,
    /// Injected client, or the default client once it has been built
    client: OnceCell<Arc<dyn SearchClient>>,
    /// Used to build the default client on first use
    settings: SearchSettings,
    max_results: usize,
}

impl WebSearchSkill {
    /// Create the skill; the default DuckDuckGo client is built on the first search
    pub fn new() -> Self {
        Self {
            metadata: default_metadata(),
            client: OnceCell::new(),
            settings: SearchSettings::default(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Create the skill with an explicit search client
    pub fn with_client(client: Arc<dyn SearchClient>) -> Self {
        Self {
            client: OnceCell::from(client),
            ..Self::new()
        }
    }

    /// Settings for the default client (ignored when a client was injected)
    pub fn with_settings(mut self, settings: SearchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Number of results requested per search (at least 1)
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.max(1);
        self
    }

    /// Replace the metadata
    pub fn with_metadata(mut self, metadata: SkillMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Number of results requested per search
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    async fn resolve_client(&self) -> Result<Arc<dyn SearchClient>, SearchError> {
        self.client
            .get_or_try_init(|| async {
                let client = DuckDuckGoClient::new(&self.settings)?;
                Ok::<_, SearchError>(Arc::new(client) as Arc<dyn SearchClient>)
            })
            .await
            .cloned()
    }

    fn format_response(query: &str, results: &[SearchRecord]) -> String {
        let mut lines = vec![format!("Suchergebnisse für '{query}':")];

        for entry in results {
            let title = if entry.title.is_empty() {
                UNTITLED
            } else {
                entry.title.as_str()
            };
            let link = if entry.url.is_empty() {
                String::new()
            } else {
                format!(" ({})", entry.url)
            };
            let snippet = truncate_chars(entry.snippet.trim(), MAX_SNIPPET_CHARS);
            lines.push(format!("- {title}{link}: {snippet}"));
        }

        lines.join("\n")
    }
}

impl Default for WebSearchSkill {
    fn default() -> Self {
        Self::new()
    }
}

fn to_record(result: SearchResult) -> SearchRecord {
    SearchRecord {
        title: result.title,
        url: result.url,
        snippet: result.snippet,
    }
}

#[async_trait]
impl Skill for WebSearchSkill {
    fn metadata(&self) -> &SkillMetadata {
        &self.metadata
    }

    async fn handle(&self, message: &str, storage: &mut dyn Storage) -> String {
        let query = message.trim();
        if query.is_empty() {
            return "Bitte gib ein Suchthema an, um eine Websuche zu starten.".to_string();
        }

        let client = match self.resolve_client().await {
            Ok(client) => client,
            Err(e) => {
                warn!("No search client available: {}", e);
                return format!(
                    "Die Standard-Websuche ist nicht verfügbar ({e}). \
                     Bitte übergib einen eigenen SearchClient."
                );
            }
        };

        let results = match client.search(query, self.max_results).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Search for '{}' failed: {}", query, e);
                return format!("Die Websuche für '{query}' ist fehlgeschlagen: {e}");
            }
        };

        let stored: Vec<SearchRecord> = results
            .into_iter()
            .filter(|result| !result.title.is_empty() || !result.url.is_empty())
            .map(to_record)
            .collect();

        info!("Storing {} results for query: {}", stored.len(), query);
        storage.set(STORAGE_NAMESPACE, query, StoredValue::Records(stored.clone()));
        storage.set(STORAGE_NAMESPACE, LAST_QUERY_KEY, StoredValue::from(query));

        if stored.is_empty() {
            return format!("Keine Treffer für '{query}' gefunden.");
        }

        Self::format_response(query, &stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_results_clamped() {
        assert_eq!(WebSearchSkill::new().with_max_results(0).max_results(), 1);
        assert_eq!(WebSearchSkill::new().max_results(), DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_format_omits_empty_url() {
        let response = WebSearchSkill::format_response(
            "Q",
            &[SearchRecord::new("Title", "", "  Snippet  ")],
        );
        assert_eq!(response, "Suchergebnisse für 'Q':\n- Title: Snippet");
    }

    #[test]
    fn test_format_truncates_long_snippets() {
        let snippet = "x".repeat(181);
        let response = WebSearchSkill::format_response(
            "Q",
            &[SearchRecord::new("", "https://example.com", snippet)],
        );

        let line = response.lines().nth(1).unwrap_or_default();
        assert!(line.starts_with("- Unbenannter Treffer (https://example.com): "));
        assert!(line.ends_with(&format!("{}...", "x".repeat(177))));
    }
}
