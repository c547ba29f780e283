//! Configuration module for the help content loader.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by domain: Content store and Languages.

mod content_config;
mod language_config;

pub use content_config::ContentEnvConfig;
pub use language_config::{LanguageEnvConfig, parse_fallback_chains};

use crate::domain::fallback::FallbackResolver;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Main help content configuration.
///
/// Aggregates the sub-configs into flat fields for the rest of the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Content store (from ContentEnvConfig)
    pub content_dir: PathBuf,

    // Languages (from LanguageEnvConfig)
    pub fallback_language: String,
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub fallback_chains: HashMap<String, Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content = ContentEnvConfig::from_lookup(&lookup);
        let languages =
            LanguageEnvConfig::from_lookup(&lookup).context("Failed to load language config")?;

        Ok(Self {
            content_dir: content.content_dir,
            fallback_language: languages.fallback_language,
            default_language: languages.default_language,
            supported_languages: languages.supported_languages,
            fallback_chains: languages.fallback_chains,
        })
    }

    /// Build the fallback resolver described by this configuration
    pub fn fallback_resolver(&self) -> FallbackResolver {
        self.fallback_chains.iter().fold(
            FallbackResolver::new(self.fallback_language.clone()),
            |resolver, (language, predecessors)| {
                resolver.with_chain(language.clone(), predecessors.iter().cloned())
            },
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        let languages = LanguageEnvConfig::from_lookup(|_| None)
            .unwrap_or_else(|_| LanguageEnvConfig {
                fallback_language: "en".to_string(),
                default_language: "en".to_string(),
                supported_languages: vec!["en".to_string()],
                fallback_chains: HashMap::new(),
            });

        Self {
            content_dir: ContentEnvConfig::default().content_dir,
            fallback_language: languages.fallback_language,
            default_language: languages.default_language,
            supported_languages: languages.supported_languages,
            fallback_chains: languages.fallback_chains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.content_dir, PathBuf::from("content/help"));
        assert_eq!(config.fallback_language, "en");
    }

    #[test]
    fn test_fallback_resolver_from_config() {
        let config = Config::from_lookup(|key| match key {
            "HELP_FALLBACK_CHAINS" => Some("zh-HK=zh-TW,zh-CN".to_string()),
            _ => None,
        })
        .unwrap();

        let resolver = config.fallback_resolver();
        assert_eq!(resolver.fallback_language(), "en");
        assert_eq!(resolver.chain_for("zh-HK"), vec!["zh-HK", "zh-TW", "zh-CN", "en"]);
        assert_eq!(resolver.chain_for("ja"), vec!["ja", "en"]);
    }

    #[test]
    fn test_invalid_config_reports_context() {
        let err = Config::from_lookup(|key| {
            (key == "HELP_FALLBACK_CHAINS").then(|| "nonsense".to_string())
        })
        .unwrap_err();

        assert!(format!("{:#}", err).contains("language config"));
    }
}
