//! In-memory help document cache.
//!
//! Unbounded, keyed by `(language, category)`. Entries are replaced
//! wholesale and only removed by `invalidate` or `clear`. Synchronization
//! is left to the owner (`HelpContentLoader` keeps it behind a `RwLock`).

use crate::domain::content::{ContentDocument, ContentKey};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct ContentCache {
    entries: HashMap<ContentKey, Arc<ContentDocument>>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &ContentKey) -> Option<Arc<ContentDocument>> {
        self.entries.get(key).cloned()
    }

    /// Insert or silently replace the entry for `key`
    pub fn put(&mut self, key: ContentKey, document: Arc<ContentDocument>) {
        self.entries.insert(key, document);
    }

    /// Drop every entry for `language`, returning how many were removed
    pub fn invalidate(&mut self, language: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.language() != language);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Languages with at least one cached entry, sorted
    pub fn languages(&self) -> Vec<String> {
        self.entries
            .keys()
            .map(|key| key.language().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
