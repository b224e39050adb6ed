//! SkillHost Types - Core types shared by the SkillHost crates
//!
//! This module defines the skill metadata and the values skills keep in storage.

mod value;

pub use value::{SearchRecord, StoredValue};

use serde::{Deserialize, Serialize};

/// Metadata describing a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMetadata {
    /// Human readable name, used as the registry key
    pub name: String,
    /// Short explanation of what the skill does
    pub description: String,
}

impl SkillMetadata {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Format: "- {name}: {description}"
    pub fn to_summary(&self) -> String {
        format!("- {}: {}", self.name, self.description)
    }
}
