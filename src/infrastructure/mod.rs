pub mod cache;
pub mod content_store;
pub mod i18n;

pub use cache::ContentCache;
pub use content_store::{FileContentStore, InMemoryContentStore};
