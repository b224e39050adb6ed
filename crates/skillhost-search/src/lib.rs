//! SkillHost Search
//!
//! Web search collaborator used by the web search skill.
//!
//! ## Features
//!
//! - `SearchClient` trait so tests and embedders can plug in their own provider
//! - DuckDuckGo HTML client as the default provider
//! - No retries and no backoff: a failed request is reported to the caller as is

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod client;
pub mod config;
pub mod duckduckgo;
pub mod error;

pub use client::{SearchClient, SearchResult};
pub use config::SearchSettings;
pub use duckduckgo::DuckDuckGoClient;
pub use error::{Result, SearchError};
