//! SkillHost Skills
//!
//! Named message handlers invoked against shared namespaced storage.
//!
//! ## Architecture
//!
//! - [`Skill`]: contract every handler implements (metadata + `handle`)
//! - [`SkillRegistry`]: name → skill mapping, last registration wins
//! - [`AgentApp`]: owns the storage and the registry, routes `invoke` calls
//! - [`builtin`]: Echo, WebSearch and ManagementSummary skills

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod app;
pub mod builtin;
pub mod error;
pub mod registry;
pub mod skill;
mod text;

pub use app::AgentApp;
pub use builtin::{BuiltinOptions, EchoSkill, ManagementSummarySkill, WebSearchSkill};
pub use error::{AgentError, Result};
pub use registry::SkillRegistry;
pub use skill::Skill;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{AgentApp, AgentError, Skill, SkillRegistry};
    pub use skillhost_storage::{InMemoryStorage, Storage};
    pub use skillhost_types::{SkillMetadata, StoredValue};
}
