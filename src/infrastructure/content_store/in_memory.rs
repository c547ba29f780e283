//! In-memory content store.
//!
//! Holds raw documents in a map and records every read, so tests can tell
//! cache hits from store reads.

use crate::domain::content::ContentKey;
use crate::domain::errors::ContentError;
use crate::domain::ports::ContentStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryContentStore {
    documents: Arc<RwLock<HashMap<ContentKey, String>>>,
    reads: Arc<RwLock<Vec<ContentKey>>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the raw document for `(language, category)`
    pub async fn insert(&self, language: &str, category: &str, raw: impl Into<String>) {
        self.documents
            .write()
            .await
            .insert(ContentKey::new(language, category), raw.into());
    }

    pub async fn remove(&self, language: &str, category: &str) -> bool {
        self.documents
            .write()
            .await
            .remove(&ContentKey::new(language, category))
            .is_some()
    }

    /// Every key read so far, in order
    pub async fn reads(&self) -> Vec<ContentKey> {
        self.reads.read().await.clone()
    }

    pub async fn read_count(&self) -> usize {
        self.reads.read().await.len()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn read(&self, key: &ContentKey) -> Result<String, ContentError> {
        self.reads.write().await.push(key.clone());
        self.documents
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| ContentError::missing(key, "no such document"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_read_and_count() {
        let store = InMemoryContentStore::new();
        store.insert("en", "bubbles", r#"{"title":"Bubbles"}"#).await;

        let key = ContentKey::new("en", "bubbles");
        assert_eq!(store.read(&key).await.unwrap(), r#"{"title":"Bubbles"}"#);
        assert!(store.read(&ContentKey::new("ja", "bubbles")).await.is_err());

        assert_eq!(store.read_count().await, 2);
        assert_eq!(store.reads().await[0], key);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryContentStore::new();
        store.insert("en", "bubbles", "{}").await;

        assert!(store.remove("en", "bubbles").await);
        assert!(!store.remove("en", "bubbles").await);
        assert!(store.read(&ContentKey::new("en", "bubbles")).await.is_err());
    }
}
