//! Repository trait definitions
//!
//! The store adapter boundary: it persists and retrieves book records by
//! identifier and trusts the caller for every field value, including the
//! derived ones. Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::book::Book;

/// Repository trait for Book records
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find all books
    async fn find_all(&self) -> Result<Vec<Book>, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;

    /// Create a new book
    async fn create(&self, book: Book) -> Result<Book, DomainError>;

    /// Update an existing book, echoing back the canonical record
    async fn update(&self, id: i32, book: Book) -> Result<Book, DomainError>;

    /// Delete a book by ID, returning the number of deleted records
    async fn delete(&self, id: i32) -> Result<u64, DomainError>;
}
