use crate::domain::content::ContentKey;
use thiserror::Error;

/// Errors raised while resolving help content
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Help content missing for {key}: {reason}")]
    ResourceMissing { key: ContentKey, reason: String },

    #[error("Malformed help content for {key}: {reason}")]
    ParseError { key: ContentKey, reason: String },

    #[error("No help content available for language '{language}', category '{category}'")]
    ContentNotFound { language: String, category: String },

    #[error("Item '{item_id}' not found in {key}")]
    ItemNotFound { key: ContentKey, item_id: String },
}

impl ContentError {
    /// Whether the fallback chain may continue past this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ContentError::ResourceMissing { .. } | ContentError::ParseError { .. }
        )
    }

    pub fn missing(key: &ContentKey, reason: impl Into<String>) -> Self {
        ContentError::ResourceMissing {
            key: key.clone(),
            reason: reason.into(),
        }
    }

    pub fn parse(key: &ContentKey, reason: impl Into<String>) -> Self {
        ContentError::ParseError {
            key: key.clone(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_not_found_formatting() {
        let error = ContentError::ContentNotFound {
            language: "xx".to_string(),
            category: "bubbles".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("'xx'"));
        assert!(msg.contains("'bubbles'"));
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_recoverable_errors() {
        let key = ContentKey::new("ja", "controls");

        let missing = ContentError::missing(&key, "no such file");
        assert!(missing.is_recoverable());
        assert!(missing.to_string().contains("ja/controls"));

        let parse = ContentError::parse(&key, "expected value at line 1");
        assert!(parse.is_recoverable());
        assert!(parse.to_string().contains("Malformed"));

        let item = ContentError::ItemNotFound {
            key,
            item_id: "combo".to_string(),
        };
        assert!(!item.is_recoverable());
    }
}
