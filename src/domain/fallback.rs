//! Language fallback chains.
//!
//! Every chain starts at the requested language, walks its configured
//! predecessors and ends at the fallback language. Chains are duplicate-free,
//! so walking one always terminates.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackResolver {
    fallback_language: String,
    chains: HashMap<String, Vec<String>>,
}

impl FallbackResolver {
    /// Resolver with the single-step policy: any language -> `fallback_language`
    pub fn new(fallback_language: impl Into<String>) -> Self {
        Self {
            fallback_language: fallback_language.into(),
            chains: HashMap::new(),
        }
    }

    /// Register prioritized predecessors tried before the fallback language
    pub fn with_chain<I, S>(mut self, language: impl Into<String>, predecessors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chains.insert(
            language.into(),
            predecessors.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn fallback_language(&self) -> &str {
        &self.fallback_language
    }

    /// Full ordered chain for `language`, the requested language first.
    pub fn chain_for(&self, language: &str) -> Vec<String> {
        let mut chain = vec![language.to_string()];
        if language == self.fallback_language {
            return chain;
        }

        if let Some(predecessors) = self.chains.get(language) {
            for candidate in predecessors {
                if candidate == &self.fallback_language {
                    break;
                }
                if !chain.contains(candidate) {
                    chain.push(candidate.clone());
                }
            }
        }

        chain.push(self.fallback_language.clone());
        chain
    }

    /// Next language to try after the languages in `attempted` failed.
    /// `None` once the chain is exhausted.
    pub fn next_language(&self, requested: &str, attempted: &[String]) -> Option<String> {
        self.chain_for(requested)
            .into_iter()
            .find(|lang| !attempted.contains(lang))
    }
}
