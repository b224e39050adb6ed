//! SkillHost Storage
//!
//! Namespaced key/value storage shared by all skills of one application.
//! Every skill owns a namespace and the keys inside it.

#![deny(unsafe_code, unused_imports, missing_docs)]

pub mod memory;

pub use memory::InMemoryStorage;

use skillhost_types::StoredValue;
use std::collections::HashMap;

/// Storage used to persist skill state
///
/// Reads of a missing namespace or key yield `None`, never an error.
pub trait Storage: Send + Sync {
    /// Return a copy of the value stored under the namespace and key
    fn get(&self, namespace: &str, key: &str) -> Option<StoredValue>;

    /// Store a value, creating the namespace on first use and replacing any previous value
    fn set(&mut self, namespace: &str, key: &str, value: StoredValue);

    /// Return all key/value pairs of a namespace (empty if unknown)
    fn dump_namespace(&self, namespace: &str) -> HashMap<String, StoredValue>;
}
