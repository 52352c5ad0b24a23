//! In-Memory Override Provider
//!
//! A simple in-memory key-value snapshot. Useful for testing and
//! code-defined tuning.

use std::collections::HashMap;

use super::provider::OverrideProvider;

/// In-memory override provider.
#[derive(Debug, Clone, Default)]
pub struct MemoryOverrideProvider {
    data: HashMap<String, String>,
    name: String,
}

impl MemoryOverrideProvider {
    /// Create a new empty memory provider.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            name: "memory".to_string(),
        }
    }

    /// Create a memory provider with a custom name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            data: HashMap::new(),
            name: name.into(),
        }
    }

    /// Create a memory provider from existing data.
    pub fn from_data(data: HashMap<String, String>) -> Self {
        Self {
            data,
            name: "memory".to_string(),
        }
    }

    /// Add a value during construction (builder pattern).
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Insert a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    /// Get the number of stored values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl OverrideProvider for MemoryOverrideProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }
}
