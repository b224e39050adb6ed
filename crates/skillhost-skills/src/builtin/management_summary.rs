//! Management summary skill: condenses stored web search results

use async_trait::async_trait;
use skillhost_storage::Storage;
use skillhost_types::{SearchRecord, SkillMetadata, StoredValue};

use super::web_search;
use crate::skill::Skill;
use crate::text::truncate_chars;

/// Storage namespace owned by the summary skill
pub const STORAGE_NAMESPACE: &str = "management_summary";
/// Bullets per summary unless configured otherwise
pub const DEFAULT_MAX_ITEMS: usize = 3;

const MAX_SNIPPET_CHARS: usize = 160;
const UNTITLED: &str = "Eintrag ohne Titel";
const NO_DESCRIPTION: &str = "Keine Beschreibung verfügbar.";

fn default_metadata() -> SkillMetadata {
    SkillMetadata::new(
        "ManagementSummarySkill",
        "Fasst gespeicherte Suchergebnisse zu einer kurzen Management Summary zusammen.",
    )
}

/// Builds a short summary from results previously stored by the web search skill
///
/// An empty message summarizes the most recent web search.
#[derive(Debug, Clone)]
pub struct ManagementSummarySkill {
    metadata: SkillMetadata,
    max_items: usize,
}

impl ManagementSummarySkill {
    /// Create the skill with default metadata and item limit
    pub fn new() -> Self {
        Self {
            metadata: default_metadata(),
            max_items: DEFAULT_MAX_ITEMS,
        }
    }

    /// Maximum number of bullets (at least 1)
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items.max(1);
        self
    }

    /// Replace the metadata
    pub fn with_metadata(mut self, metadata: SkillMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Maximum number of bullets per summary
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    fn build_summary(topic: &str, results: &[SearchRecord]) -> Vec<String> {
        let mut lines = vec![format!("Management Summary zu '{topic}':")];

        for entry in results {
            let title = if entry.title.is_empty() {
                UNTITLED
            } else {
                entry.title.as_str()
            };
            let snippet = match entry.snippet.trim() {
                "" => NO_DESCRIPTION.to_string(),
                snippet => truncate_chars(snippet, MAX_SNIPPET_CHARS),
            };
            lines.push(format!("- {title}: {snippet}"));
        }

        if results.is_empty() {
            lines.push("- Keine Ergebnisse zum Zusammenfassen vorhanden.".to_string());
        }

        lines
    }
}

impl Default for ManagementSummarySkill {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Skill for ManagementSummarySkill {
    fn metadata(&self) -> &SkillMetadata {
        &self.metadata
    }

    async fn handle(&self, message: &str, storage: &mut dyn Storage) -> String {
        let mut topic = message.trim().to_string();
        if topic.is_empty() {
            topic = storage
                .get(web_search::STORAGE_NAMESPACE, web_search::LAST_QUERY_KEY)
                .and_then(|value| value.as_text().map(str::to_string))
                .unwrap_or_default();
        }

        if topic.is_empty() {
            return "Keine Suchanfrage gefunden. Bitte starte zuerst eine Websuche.".to_string();
        }

        let results = storage
            .get(web_search::STORAGE_NAMESPACE, &topic)
            .and_then(StoredValue::into_records)
            .unwrap_or_default();

        if results.is_empty() {
            return format!(
                "Keine gespeicherten Suchergebnisse für '{topic}' gefunden. \
                 Führe zunächst die WebSearchSkill aus."
            );
        }

        let limit = results.len().min(self.max_items);
        let summary = Self::build_summary(&topic, &results[..limit]);
        storage.set(STORAGE_NAMESPACE, &topic, StoredValue::TextList(summary.clone()));
        summary.join("\n")
    }
}
