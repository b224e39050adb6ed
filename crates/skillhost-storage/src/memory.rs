//! In-memory storage backend

use crate::Storage;
use skillhost_types::StoredValue;
use std::collections::HashMap;
use tracing::debug;

/// Map backed storage that keeps values for the lifetime of the process
///
/// No size bound and no expiry.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    /// namespace → key → value
    store: HashMap<String, HashMap<String, StoredValue>>,
}

impl InMemoryStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all namespaces written so far, sorted
    pub fn namespaces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.store.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, namespace: &str, key: &str) -> Option<StoredValue> {
        self.store
            .get(namespace)
            .and_then(|entries| entries.get(key))
            .cloned()
    }

    fn set(&mut self, namespace: &str, key: &str, value: StoredValue) {
        debug!(namespace, key, "Storing value");
        self.store
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    fn dump_namespace(&self, namespace: &str) -> HashMap<String, StoredValue> {
        self.store.get(namespace).cloned().unwrap_or_default()
    }
}
