//! Agent application wiring storage and skills together

use skillhost_storage::{InMemoryStorage, Storage};
use tracing::debug;

use crate::builtin::{BuiltinOptions, EchoSkill, ManagementSummarySkill, WebSearchSkill};
use crate::error::{AgentError, Result};
use crate::registry::SkillRegistry;
use crate::skill::Skill;

/// Agent application managing skills and their shared storage
///
/// Owns exactly one storage instance and one registry; both live as long as the app.
pub struct AgentApp {
    storage: Box<dyn Storage>,
    skills: SkillRegistry,
}

impl AgentApp {
    /// Create an application backed by in-memory storage
    pub fn new() -> Self {
        Self::with_storage(Box::new(InMemoryStorage::new()))
    }

    /// Create an application backed by the given storage
    pub fn with_storage(storage: Box<dyn Storage>) -> Self {
        Self {
            storage,
            skills: SkillRegistry::new(),
        }
    }

    /// Create an in-memory application with Echo, WebSearch and ManagementSummary registered
    pub fn with_builtin_skills(options: &BuiltinOptions) -> Self {
        let mut app = Self::new();
        app.register_skill(EchoSkill::new());
        app.register_skill(
            WebSearchSkill::new()
                .with_settings(options.search.clone())
                .with_max_results(options.max_results),
        );
        app.register_skill(ManagementSummarySkill::new().with_max_items(options.max_items));
        app
    }

    /// Register a skill, replacing any skill with the same name
    pub fn register_skill<S: Skill + 'static>(&mut self, skill: S) {
        self.skills.register(Box::new(skill));
    }

    /// Look up a registered skill
    pub fn get_skill(&self, name: &str) -> Result<&dyn Skill> {
        self.skills
            .get(name)
            .ok_or_else(|| AgentError::SkillNotRegistered(name.to_string()))
    }

    /// Route a message to the named skill and return its response
    ///
    /// Storage is left untouched when the skill is not registered.
    pub async fn invoke(&mut self, name: &str, message: &str) -> Result<String> {
        let skill = self
            .skills
            .get(name)
            .ok_or_else(|| AgentError::SkillNotRegistered(name.to_string()))?;

        debug!("Invoking skill '{}'", name);
        Ok(skill.handle(message, self.storage.as_mut()).await)
    }

    /// Shared storage
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Mutable access to the shared storage
    pub fn storage_mut(&mut self) -> &mut dyn Storage {
        self.storage.as_mut()
    }

    /// Registered skills
    pub fn skills(&self) -> &SkillRegistry {
        &self.skills
    }
}

impl Default for AgentApp {
    fn default() -> Self {
        Self::new()
    }
}
