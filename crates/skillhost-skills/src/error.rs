//! Error types for skill invocation

use thiserror::Error;

/// Agent application errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// No skill with this name has been registered
    #[error("Skill '{0}' is not registered")]
    SkillNotRegistered(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, AgentError>;
