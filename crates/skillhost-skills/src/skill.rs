//! Skill contract

use async_trait::async_trait;
use skillhost_storage::Storage;
use skillhost_types::SkillMetadata;

/// A named handler taking a text message and the shared storage
///
/// Skills receive the storage per call and must not keep it between calls.
#[async_trait]
pub trait Skill: Send + Sync {
    /// Metadata identifying the skill
    fn metadata(&self) -> &SkillMetadata;

    /// Process an incoming message and return the response text
    async fn handle(&self, message: &str, storage: &mut dyn Storage) -> String;

    /// Registry name of the skill
    fn name(&self) -> &str {
        &self.metadata().name
    }

    /// Short description of the skill
    fn description(&self) -> &str {
        &self.metadata().description
    }
}
