//! Bibliography lookup table
//!
//! Maps each citation key to the display line rendered in the references
//! section. The table is read-only once built and is shared by every
//! registry created from it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::entry::BibEntry;
use crate::error::ReferenceError;

/// Citation key → pre-formatted display string
#[derive(Clone, Debug, Default)]
pub struct Bibliography {
    /// Display strings keyed by citation key
    entries: HashMap<String, String>,
    /// Keys in the order they were added
    order: Vec<String>,
}

impl Bibliography {
    /// Create an empty bibliography
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bibliography from parsed records
    ///
    /// Fails with [`ReferenceError::DuplicateKey`] if two records share a key.
    pub fn from_entries(
        entries: impl IntoIterator<Item = BibEntry>,
    ) -> Result<Self, ReferenceError> {
        let mut bibliography = Self::new();
        for entry in entries {
            let display = entry.format();
            bibliography.insert(entry.key, display)?;
        }
        Ok(bibliography)
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self, ReferenceError> {
        let entries: Vec<BibEntry> =
            serde_json::from_str(json).map_err(|e| ReferenceError::Parse(e.to_string()))?;
        Self::from_entries(entries)
    }

    /// Read and parse a JSON bibliography file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ReferenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bibliography = Self::from_json_str(&json)?;
        info!(path = ?path, entries = bibliography.len(), "Bibliography loaded");
        Ok(bibliography)
    }

    /// Add a pre-formatted display string under `key`
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        display: impl Into<String>,
    ) -> Result<(), ReferenceError> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(ReferenceError::DuplicateKey { key });
        }
        debug!(key = %key, "Bibliography entry added");
        self.entries.insert(key.clone(), display.into());
        self.order.push(key);
        Ok(())
    }

    /// Display string for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
