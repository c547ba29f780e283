//! Help Content Loader
//!
//! Entry point for multilingual help documents. A load walks the fallback
//! chain of the requested language; for each language it records an attempt,
//! serves a cache hit, or reads and parses the document from the store.
//!
//! # Design
//!
//! - The loader is an explicitly constructed value; share it with `Arc`.
//! - Cache, attempt log and current language sit behind `tokio::sync::RwLock`.
//!   No lock is held across a store read.
//! - Concurrent loads of the same key are not coalesced: both read the store
//!   and the last cache insert wins.
//!
//! # Example
//!
//! ```rust,no_run
//! use bubblepop_help::application::HelpContentLoader;
//! use bubblepop_help::config::Config;
//!
//! # async {
//! let config = Config::from_env()?;
//! let loader = HelpContentLoader::from_config(&config);
//! let doc = loader.load_content("ja", "bubbles").await?;
//! println!("{:?}", doc.title);
//! # Ok::<(), anyhow::Error>(())
//! # };
//! ```

use crate::config::Config;
use crate::domain::content::{ContentDocument, ContentKey, HelpItem, LoadAttemptRecord};
use crate::domain::errors::ContentError;
use crate::domain::fallback::FallbackResolver;
use crate::domain::ports::ContentStore;
use crate::domain::search::{SearchOptions, SearchResult, dedupe_and_sort, search_document};
use crate::infrastructure::cache::ContentCache;
use crate::infrastructure::content_store::FileContentStore;
use futures::future::join_all;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Availability of the configured categories for one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentCoverage {
    pub language: String,
    pub total: usize,
    pub available: usize,
    pub coverage_pct: f64,
    pub missing: Vec<String>,
}

/// Outcome of a forced refresh of one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentSyncReport {
    pub language: String,
    pub synced: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

pub struct HelpContentLoader {
    store: Arc<dyn ContentStore>,
    resolver: FallbackResolver,
    supported_languages: Vec<String>,
    current_language: RwLock<String>,
    cache: RwLock<ContentCache>,
    attempts: RwLock<Vec<LoadAttemptRecord>>,
    fallback_usage: RwLock<HashMap<String, u64>>,
}

impl HelpContentLoader {
    pub fn new(
        store: Arc<dyn ContentStore>,
        resolver: FallbackResolver,
        current_language: impl Into<String>,
    ) -> Self {
        let current_language = current_language.into();
        let mut supported_languages = vec![current_language.clone()];
        if resolver.fallback_language() != current_language {
            supported_languages.push(resolver.fallback_language().to_string());
        }

        Self {
            store,
            resolver,
            supported_languages,
            current_language: RwLock::new(current_language),
            cache: RwLock::new(ContentCache::new()),
            attempts: RwLock::new(Vec::new()),
            fallback_usage: RwLock::new(HashMap::new()),
        }
    }

    /// Loader over the on-disk content tree named by `config`
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(FileContentStore::new(config.content_dir.clone()));
        Self::new(store, config.fallback_resolver(), config.default_language.clone())
            .with_supported_languages(config.supported_languages.clone())
    }

    pub fn with_supported_languages(mut self, languages: Vec<String>) -> Self {
        self.supported_languages = languages;
        self
    }

    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    pub fn resolver(&self) -> &FallbackResolver {
        &self.resolver
    }

    /// Load the document for `(language, category)`, walking the fallback
    /// chain on missing or malformed documents.
    ///
    /// Fails with `ContentError::ContentNotFound` naming the original request
    /// once the chain is exhausted.
    pub async fn load_content(
        &self,
        language: &str,
        category: &str,
    ) -> Result<Arc<ContentDocument>, ContentError> {
        self.resolve(language, category).await.map(|(_, doc)| doc)
    }

    /// Walk the chain and return the key that served the document with it
    async fn resolve(
        &self,
        language: &str,
        category: &str,
    ) -> Result<(ContentKey, Arc<ContentDocument>), ContentError> {
        let mut attempted: Vec<String> = Vec::new();

        while let Some(next) = self.resolver.next_language(language, &attempted) {
            let key = ContentKey::new(next.clone(), category);
            match self.load_exact(&key).await {
                Ok(doc) => {
                    if next != language {
                        info!(
                            "HelpContentLoader: Served {}/{} from fallback language '{}'",
                            language, category, next
                        );
                        *self
                            .fallback_usage
                            .write()
                            .await
                            .entry(language.to_string())
                            .or_insert(0) += 1;
                    }
                    return Ok((key, doc));
                }
                Err(e) => {
                    warn!("HelpContentLoader: {} ({})", e, self.store.locate(&key));
                }
            }
            attempted.push(next);
        }

        error!(
            "HelpContentLoader: Fallback chain exhausted for {}/{} (tried {:?})",
            language, category, attempted
        );
        Err(ContentError::ContentNotFound {
            language: language.to_string(),
            category: category.to_string(),
        })
    }

    /// Load `category` in the current language
    pub async fn load_current(&self, category: &str) -> Result<Arc<ContentDocument>, ContentError> {
        let language = self.current_language().await;
        self.load_content(&language, category).await
    }

    /// Load a document, then extract the item `item_id` from it.
    ///
    /// `ItemNotFound` names the language that served the document.
    pub async fn load_item(
        &self,
        language: &str,
        category: &str,
        item_id: &str,
    ) -> Result<HelpItem, ContentError> {
        let (key, doc) = self.resolve(language, category).await?;
        doc.find_item(item_id)
            .map(HelpItem::from)
            .ok_or_else(|| ContentError::ItemNotFound {
                key,
                item_id: item_id.to_string(),
            })
    }

    /// One step of the chain: record the attempt, then cache or store.
    async fn load_exact(&self, key: &ContentKey) -> Result<Arc<ContentDocument>, ContentError> {
        self.attempts.write().await.push(LoadAttemptRecord::new(key));

        let cached = self.cache.read().await.get(key);
        if let Some(doc) = cached {
            debug!("HelpContentLoader: Cache hit for {}", key);
            return Ok(doc);
        }

        let doc = Arc::new(self.fetch(key).await?);
        self.cache.write().await.put(key.clone(), doc.clone());
        debug!("HelpContentLoader: Cached {}", key);
        Ok(doc)
    }

    /// Read and parse from the store, bypassing cache and attempt log
    async fn fetch(&self, key: &ContentKey) -> Result<ContentDocument, ContentError> {
        let raw = self.store.read(key).await?;
        ContentDocument::from_json(key, &raw)
    }

    /// Make `language` current and drop its cached entries so the next load
    /// re-reads the store. Other languages stay cached.
    pub async fn switch_language(&self, language: &str) {
        let removed = self.cache.write().await.invalidate(language);
        let previous = std::mem::replace(
            &mut *self.current_language.write().await,
            language.to_string(),
        );

        info!(
            "HelpContentLoader: Switched language {} -> {} ({} cached entries invalidated)",
            previous, language, removed
        );
    }

    pub async fn current_language(&self) -> String {
        self.current_language.read().await.clone()
    }

    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
        info!("HelpContentLoader: Cache cleared");
    }

    pub async fn cache_size(&self) -> usize {
        self.cache.read().await.size()
    }

    /// Languages with at least one cached document
    pub async fn cached_languages(&self) -> Vec<String> {
        self.cache.read().await.languages()
    }

    /// Every per-language attempt so far, oldest first
    pub async fn load_attempts(&self) -> Vec<LoadAttemptRecord> {
        self.attempts.read().await.clone()
    }

    pub async fn clear_load_attempts(&self) {
        self.attempts.write().await.clear();
    }

    /// How often each requested language was served by another language
    pub async fn fallback_usage(&self) -> HashMap<String, u64> {
        self.fallback_usage.read().await.clone()
    }

    /// Search `category` in `language`, widening to the rest of its fallback
    /// chain when fewer than `options.min_results` items match.
    pub async fn search(
        &self,
        category: &str,
        query: &str,
        language: &str,
        options: &SearchOptions,
    ) -> Vec<SearchResult> {
        let chain = self.resolver.chain_for(language);
        let mut results = Vec::new();

        for (idx, lang) in chain.iter().enumerate() {
            if idx == 1 && results.len() >= options.min_results {
                break;
            }
            if idx > 0 && results.len() >= options.max_results {
                break;
            }

            match self.load_exact(&ContentKey::new(lang.clone(), category)).await {
                Ok(doc) => results.extend(search_document(&doc, query, lang)),
                Err(e) => debug!("HelpContentLoader: Search skipped {}: {}", lang, e),
            }
        }

        let results = dedupe_and_sort(results);
        debug!(
            "HelpContentLoader: Search '{}' in {}/{} returned {} results",
            query,
            language,
            category,
            results.len()
        );
        results
    }

    /// Check which of `categories` load for every supported language.
    ///
    /// Reads the store directly: no fallback, no caching, no attempt records.
    pub async fn analyze_coverage(&self, categories: &[&str]) -> Vec<ContentCoverage> {
        let reports = join_all(
            self.supported_languages
                .iter()
                .map(|language| self.language_coverage(language, categories)),
        )
        .await;

        info!(
            "HelpContentLoader: Content coverage analysed for {} languages",
            reports.len()
        );
        reports
    }

    async fn language_coverage(&self, language: &str, categories: &[&str]) -> ContentCoverage {
        let mut missing = Vec::new();
        for category in categories {
            if let Err(e) = self.fetch(&ContentKey::new(language, *category)).await {
                debug!("HelpContentLoader: Coverage gap: {}", e);
                missing.push(category.to_string());
            }
        }

        let total = categories.len();
        let available = total - missing.len();
        let coverage_pct = if total == 0 {
            0.0
        } else {
            available as f64 / total as f64 * 100.0
        };

        ContentCoverage {
            language: language.to_string(),
            total,
            available,
            coverage_pct,
            missing,
        }
    }

    /// Re-read every category of `language` from the store, replacing cached
    /// entries. Failed categories keep whatever was cached before.
    pub async fn sync_language(&self, language: &str, categories: &[&str]) -> ContentSyncReport {
        let mut report = ContentSyncReport {
            language: language.to_string(),
            ..Default::default()
        };

        for category in categories {
            let key = ContentKey::new(language, *category);
            match self.fetch(&key).await {
                Ok(doc) => {
                    self.cache.write().await.put(key, Arc::new(doc));
                    report.synced += 1;
                }
                Err(e) => {
                    report.failed += 1;
                    report.errors.push(format!("{}: {}", category, e));
                }
            }
        }

        info!(
            "HelpContentLoader: Content sync for {}: {} synced, {} failed",
            language, report.synced, report.failed
        );
        report
    }
}
