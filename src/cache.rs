//! Per-module locals cache.
//!
//! Pure storage: the upstream style processor stores one entry per file,
//! finalization reads it back. A missing entry is a pipeline-ordering bug
//! and is surfaced as a fatal error, never tolerated.

use std::collections::HashMap;

use log::debug;
use serde_json::Value;

use crate::error::ScopeError;

#[derive(Debug, Default)]
pub struct LocalsCache {
    entries: HashMap<String, Value>,
}

impl LocalsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `value` with `file_id`, overwriting any prior entry. The
    /// value's shape is the upstream processor's business.
    pub fn insert(&mut self, file_id: impl Into<String>, value: Value) {
        let file_id = file_id.into();
        debug!("caching locals for {file_id}");
        self.entries.insert(file_id, value);
    }

    pub fn get(&self, file_id: &str) -> Result<&Value, ScopeError> {
        self.entries.get(file_id).ok_or_else(|| ScopeError::CacheMiss {
            path: file_id.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
