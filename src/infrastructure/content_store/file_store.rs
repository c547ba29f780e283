use crate::domain::content::ContentKey;
use crate::domain::errors::ContentError;
use crate::domain::ports::ContentStore;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Reads bundled help documents from `<base>/<language>/<category>.json`.
/// Never writes.
#[derive(Debug, Clone)]
pub struct FileContentStore {
    base: PathBuf,
}

impl FileContentStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Path of the document for `key`, or `None` when a key segment could
    /// escape the content root.
    pub fn path_for(&self, key: &ContentKey) -> Option<PathBuf> {
        if !is_plain_segment(key.language()) || !is_plain_segment(key.category()) {
            return None;
        }
        Some(
            self.base
                .join(key.language())
                .join(format!("{}.json", key.category())),
        )
    }
}

fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}

#[async_trait]
impl ContentStore for FileContentStore {
    async fn read(&self, key: &ContentKey) -> Result<String, ContentError> {
        let path = self
            .path_for(key)
            .ok_or_else(|| ContentError::missing(key, "invalid language or category"))?;

        debug!("FileContentStore: reading {:?}", path);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ContentError::missing(key, format!("{:?} not found", path)),
                _ => ContentError::missing(key, format!("failed to read {:?}: {}", path, e)),
            })
    }

    fn locate(&self, key: &ContentKey) -> String {
        match self.path_for(key) {
            Some(path) => path.display().to_string(),
            None => format!("<invalid key {}>", key),
        }
    }
}
