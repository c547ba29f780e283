//! Content store configuration parsing from environment variables.

use std::path::PathBuf;

const DEFAULT_CONTENT_DIR: &str = "content/help";

/// Content store environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEnvConfig {
    pub content_dir: PathBuf,
}

impl Default for ContentEnvConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
        }
    }
}

impl ContentEnvConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            content_dir: lookup("HELP_CONTENT_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR)),
        }
    }
}
