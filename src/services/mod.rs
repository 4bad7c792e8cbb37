//! Services Layer
//!
//! Business logic between the HTTP handlers and the store adapter:
//! input validation, ledger mutation through the domain layer, and
//! aggregate statistics.

pub mod book_service;

// Re-export for convenience
pub use book_service::*;
