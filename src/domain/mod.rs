// Help document schema and keys
pub mod content;

// Domain-specific error types
pub mod errors;

// Language fallback chains
pub mod fallback;

// Port interfaces
pub mod ports;

// Query scoring over help documents
pub mod search;
