//! Persisted locale preference.

use std::collections::HashMap;

use crate::error::SiteError;

/// Origin-scoped durable key/value storage.
pub trait PreferenceStore {
    /// Read a value. Unreadable storage reads as absent.
    fn load(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn store(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with one value already persisted.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Store whose writes all fail, like a browser with storage disabled.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of successful writes.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        if self.read_only {
            return Err(SiteError::Storage(format!("cannot write {key}: read-only")));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
