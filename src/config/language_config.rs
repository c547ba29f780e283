//! Language configuration parsing from environment variables.
//!
//! This module handles the supported languages, the default language and
//! the fallback chains.

use anyhow::{Context, Result};
use std::collections::HashMap;

const DEFAULT_FALLBACK_LANGUAGE: &str = "en";
const DEFAULT_LANGUAGE: &str = "ja";
const DEFAULT_SUPPORTED_LANGUAGES: &str = "ja,en,zh-CN,zh-TW,ko";
const DEFAULT_FALLBACK_CHAINS: &str = "zh-CN=zh-TW;zh-TW=zh-CN;ko=ja";

/// Language environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEnvConfig {
    pub fallback_language: String,
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub fallback_chains: HashMap<String, Vec<String>>,
}

impl LanguageEnvConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fallback_language = lookup("HELP_FALLBACK_LANGUAGE")
            .unwrap_or_else(|| DEFAULT_FALLBACK_LANGUAGE.to_string())
            .trim()
            .to_string();
        if fallback_language.is_empty() {
            anyhow::bail!("HELP_FALLBACK_LANGUAGE must not be empty");
        }

        let default_language = lookup("HELP_DEFAULT_LANGUAGE")
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
            .trim()
            .to_string();
        if default_language.is_empty() {
            anyhow::bail!("HELP_DEFAULT_LANGUAGE must not be empty");
        }

        let mut supported_languages = parse_language_list(
            &lookup("HELP_SUPPORTED_LANGUAGES")
                .unwrap_or_else(|| DEFAULT_SUPPORTED_LANGUAGES.to_string()),
        );
        for required in [&default_language, &fallback_language] {
            if !supported_languages.contains(required) {
                supported_languages.push(required.clone());
            }
        }

        let fallback_chains = parse_fallback_chains(
            &lookup("HELP_FALLBACK_CHAINS").unwrap_or_else(|| DEFAULT_FALLBACK_CHAINS.to_string()),
        )
        .context("Invalid HELP_FALLBACK_CHAINS")?;

        Ok(Self {
            fallback_language,
            default_language,
            supported_languages,
            fallback_chains,
        })
    }
}

fn parse_language_list(raw: &str) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for lang in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !languages.iter().any(|l| l == lang) {
            languages.push(lang.to_string());
        }
    }
    languages
}

/// Parse `lang=pred1,pred2;lang2=pred3` into a chain map
pub fn parse_fallback_chains(raw: &str) -> Result<HashMap<String, Vec<String>>> {
    let mut chains = HashMap::new();

    for entry in raw.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (language, predecessors) = entry
            .split_once('=')
            .with_context(|| format!("Chain entry '{}' is missing '='", entry))?;

        let language = language.trim();
        if language.is_empty() {
            anyhow::bail!("Chain entry '{}' has no language", entry);
        }

        let predecessors = parse_language_list(predecessors);
        if predecessors.is_empty() {
            anyhow::bail!("Chain entry '{}' lists no fallback languages", entry);
        }

        if chains.insert(language.to_string(), predecessors).is_some() {
            anyhow::bail!("Duplicate chain entry for '{}'", language);
        }
    }

    Ok(chains)
}
