// Multilingual help content loading
pub mod help_content_loader;

pub use help_content_loader::{ContentCoverage, ContentSyncReport, HelpContentLoader};
