pub mod file_store;
pub mod in_memory;

pub use file_store::FileContentStore;
pub use in_memory::InMemoryContentStore;
