//! Echo skill: returns the input and keeps a conversation history

use async_trait::async_trait;
use skillhost_storage::Storage;
use skillhost_types::{SkillMetadata, StoredValue};

use crate::skill::Skill;

/// Storage namespace owned by the echo skill
pub const HISTORY_NAMESPACE: &str = "echo";
/// Key of the message history inside [`HISTORY_NAMESPACE`]
pub const HISTORY_KEY: &str = "history";

fn default_metadata() -> SkillMetadata {
    SkillMetadata::new(
        "EchoSkill",
        "Returns the exact input back to the caller and stores a history of messages.",
    )
}

/// Skill that echoes the input message and records every message it saw
///
/// The history grows without bound for the lifetime of the storage.
#[derive(Debug, Clone)]
pub struct EchoSkill {
    metadata: SkillMetadata,
}

impl EchoSkill {
    /// Create the skill with its default metadata
    pub fn new() -> Self {
        Self {
            metadata: default_metadata(),
        }
    }

    /// Replace the metadata, e.g. to register under another name
    pub fn with_metadata(metadata: SkillMetadata) -> Self {
        Self { metadata }
    }

    /// Messages handled so far, oldest first
    pub fn conversation_history(storage: &dyn Storage) -> Vec<String> {
        storage
            .get(HISTORY_NAMESPACE, HISTORY_KEY)
            .and_then(StoredValue::into_text_list)
            .unwrap_or_default()
    }
}

impl Default for EchoSkill {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Skill for EchoSkill {
    fn metadata(&self) -> &SkillMetadata {
        &self.metadata
    }

    async fn handle(&self, message: &str, storage: &mut dyn Storage) -> String {
        let mut history = Self::conversation_history(storage);
        history.push(message.to_string());
        storage.set(HISTORY_NAMESPACE, HISTORY_KEY, StoredValue::TextList(history));
        message.to_string()
    }
}
