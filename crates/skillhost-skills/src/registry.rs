//! Skills registry mapping names to handlers

use std::collections::HashMap;
use tracing::{info, warn};

use crate::skill::Skill;

/// Registry of all skills known to an application
///
/// Names are unique; registering a second skill under the same name replaces the first.
pub struct SkillRegistry {
    skills: HashMap<String, Box<dyn Skill>>,
}

impl SkillRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            skills: HashMap::new(),
        }
    }

    /// Register a skill under its metadata name, returning the skill it replaced
    pub fn register(&mut self, skill: Box<dyn Skill>) -> Option<Box<dyn Skill>> {
        let name = skill.name().to_string();
        let replaced = self.skills.insert(name.clone(), skill);

        if replaced.is_some() {
            warn!("Skill '{}' was already registered, replacing it", name);
        } else {
            info!("Registered skill: {}", name);
        }

        replaced
    }

    /// Get a skill by name
    pub fn get(&self, name: &str) -> Option<&dyn Skill> {
        self.skills.get(name).map(Box::as_ref)
    }

    /// Check whether a skill is registered
    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    /// All skill names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.skills.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get number of skills
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// One "- name: description" line per skill, sorted by name
    pub fn describe(&self) -> String {
        if self.skills.is_empty() {
            return "No skills available".to_string();
        }

        let mut sorted_skills: Vec<_> = self.skills.values().collect();
        sorted_skills.sort_unstable_by(|a, b| a.name().cmp(b.name()));

        sorted_skills
            .iter()
            .map(|skill| skill.metadata().to_summary())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for SkillRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skillhost_storage::Storage;
    use skillhost_types::SkillMetadata;

    struct Fixed {
        metadata: SkillMetadata,
        reply: &'static str,
    }

    impl Fixed {
        fn boxed(name: &str, reply: &'static str) -> Box<dyn Skill> {
            Box::new(Self {
                metadata: SkillMetadata::new(name, format!("Always answers {reply}")),
                reply,
            })
        }
    }

    #[async_trait]
    impl Skill for Fixed {
        fn metadata(&self) -> &SkillMetadata {
            &self.metadata
        }

        async fn handle(&self, _message: &str, _storage: &mut dyn Storage) -> String {
            self.reply.to_string()
        }
    }

    #[test]
    fn test_registry_new() {
        let registry = SkillRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.describe(), "No skills available");
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SkillRegistry::new();
        assert!(registry.register(Fixed::boxed("b-skill", "b")).is_none());
        assert!(registry.register(Fixed::boxed("a-skill", "a")).is_none());

        assert!(registry.contains("a-skill"));
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.names(), vec!["a-skill", "b-skill"]);
        assert_eq!(
            registry.describe(),
            "- a-skill: Always answers a\n- b-skill: Always answers b"
        );
    }

    #[tokio::test]
    async fn test_last_registration_wins() {
        let mut registry = SkillRegistry::new();
        registry.register(Fixed::boxed("same", "first"));
        let replaced = registry.register(Fixed::boxed("same", "second"));

        assert!(replaced.is_some());
        assert_eq!(registry.len(), 1);

        let mut storage = skillhost_storage::InMemoryStorage::new();
        let skill = registry.get("same");
        assert!(skill.is_some());
        if let Some(skill) = skill {
            assert_eq!(skill.handle("hi", &mut storage).await, "second");
        }
    }
}
