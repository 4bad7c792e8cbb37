//! Domain layer - Pure business logic
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Progress derivation, session ledger rules, trait definitions and
//! domain error types.

pub mod errors;
pub mod ledger;
pub mod progress;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
