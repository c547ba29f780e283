use crate::domain::content::ContentKey;
use crate::domain::errors::ContentError;
use async_trait::async_trait;

/// Read-only source of raw help documents, laid out as
/// `<base>/<language>/<category>.json`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Read the raw document for `key`. A missing document is
    /// `ContentError::ResourceMissing`.
    async fn read(&self, key: &ContentKey) -> Result<String, ContentError>;

    /// Human-readable location of `key`, used in logs
    fn locate(&self, key: &ContentKey) -> String {
        format!("{}/{}.json", key.language(), key.category())
    }
}
