//! Book Service - business logic without the HTTP layer
//!
//! All book-related operations extracted from the Axum handlers. Every
//! mutation that touches the session ledger or the page count goes
//! through `domain::ledger`, so derived fields are computed in exactly
//! one place before anything is persisted.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::ledger::{self, NewSession};
use crate::domain::progress::ReadingStatus;
use crate::domain::{BookRepository, DomainError};
use crate::models::book::{Book, Session};

/// Body of a create request. Only title and author are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub total_pages: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
}

/// Body of a partial-update request. Absent fields are left unchanged;
/// `cover` distinguishes absent from an explicit null.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub total_pages: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover: Option<Option<String>>,
    #[serde(default)]
    pub reading_sessions: Option<Vec<Session>>,
}

// Maps an absent field to None and an explicit null to Some(None), so a
// PATCH can clear the cover without clobbering it on unrelated updates.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(de).map(Some)
}

/// Body of an append-session request. The date defaults to today.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionInput {
    #[serde(default)]
    pub date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub start_page: Option<i32>,
    #[serde(default)]
    pub end_page: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Aggregate numbers for the dashboard header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingStats {
    pub total_books: usize,
    pub currently_reading: usize,
    pub completed: usize,
    pub average_rating: f64,
}

/// List all books
pub async fn list_books(repo: &dyn BookRepository) -> Result<Vec<Book>, DomainError> {
    repo.find_all().await
}

/// Fetch a single book
pub async fn get_book(repo: &dyn BookRepository, id: i32) -> Result<Book, DomainError> {
    repo.find_by_id(id).await?.ok_or(DomainError::NotFound)
}

/// Create a book with an empty session ledger
pub async fn create_book(
    repo: &dyn BookRepository,
    input: CreateBookInput,
) -> Result<Book, DomainError> {
    let title = input.title.as_deref().unwrap_or("").trim().to_string();
    let author = input.author.as_deref().unwrap_or("").trim().to_string();
    if title.is_empty() || author.is_empty() {
        return Err(DomainError::Validation(
            "Missing required fields: title and author".to_string(),
        ));
    }

    let total_pages = input.total_pages.unwrap_or(0);
    if total_pages < 0 {
        return Err(DomainError::Validation(
            "totalPages cannot be negative".to_string(),
        ));
    }

    let mut book = Book::new(title, author, total_pages);
    book.notes = input.notes.unwrap_or_default();
    book.cover = input.cover;

    let created = repo.create(book).await?;
    tracing::info!(id = ?created.id, title = %created.title, "Book created");
    Ok(created)
}

/// Apply a partial update, re-deriving progress whenever the ledger or
/// the page count changed
pub async fn update_book(
    repo: &dyn BookRepository,
    id: i32,
    input: UpdateBookInput,
) -> Result<Book, DomainError> {
    let mut book = repo.find_by_id(id).await?.ok_or(DomainError::NotFound)?;

    if let Some(title) = input.title {
        if title.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".to_string()));
        }
        book.title = title;
    }
    if let Some(author) = input.author {
        if author.trim().is_empty() {
            return Err(DomainError::Validation(
                "author cannot be empty".to_string(),
            ));
        }
        book.author = author;
    }

    let pages_changed = input.total_pages.is_some();
    if let Some(total_pages) = input.total_pages {
        if total_pages < 0 {
            return Err(DomainError::Validation(
                "totalPages cannot be negative".to_string(),
            ));
        }
        book.total_pages = total_pages;
    }

    if let Some(notes) = input.notes {
        book.notes = notes;
    }
    if let Some(rating) = input.rating {
        if !(0..=5).contains(&rating) {
            return Err(DomainError::Validation(
                "rating must be between 0 and 5".to_string(),
            ));
        }
        book.rating = rating;
    }
    if let Some(cover) = input.cover {
        book.cover = cover;
    }

    if let Some(sessions) = input.reading_sessions {
        ledger::replace_sessions(&mut book, sessions)?;
    } else if pages_changed {
        ledger::rederive(&mut book);
    }

    repo.update(id, book).await
}

/// Delete a book, reporting how many records went away
pub async fn delete_book(repo: &dyn BookRepository, id: i32) -> Result<u64, DomainError> {
    let deleted = repo.delete(id).await?;
    if deleted == 0 {
        return Err(DomainError::NotFound);
    }
    tracing::info!(id, "Book deleted");
    Ok(deleted)
}

/// Append a reading session and echo the canonical record
pub async fn add_session(
    repo: &dyn BookRepository,
    id: i32,
    input: NewSessionInput,
) -> Result<Book, DomainError> {
    let (Some(start_page), Some(end_page)) = (input.start_page, input.end_page) else {
        return Err(DomainError::Validation(
            "Missing required fields: startPage and endPage".to_string(),
        ));
    };

    let mut book = repo.find_by_id(id).await?.ok_or(DomainError::NotFound)?;
    ledger::add_session(
        &mut book,
        NewSession {
            date: input.date.unwrap_or_else(|| Utc::now().date_naive()),
            start_page,
            end_page,
            notes: input.notes,
        },
    )?;

    repo.update(id, book).await
}

/// Remove a session by id (a no-op when the id is unknown) and echo the
/// canonical record
pub async fn remove_session(
    repo: &dyn BookRepository,
    id: i32,
    session_id: &str,
) -> Result<Book, DomainError> {
    let mut book = repo.find_by_id(id).await?.ok_or(DomainError::NotFound)?;
    ledger::remove_session(&mut book, session_id);
    repo.update(id, book).await
}

/// Aggregate stats over the whole collection
pub async fn reading_stats(repo: &dyn BookRepository) -> Result<ReadingStats, DomainError> {
    let books = repo.find_all().await?;

    let rated: Vec<i32> = books
        .iter()
        .filter(|b| b.rating > 0)
        .map(|b| b.rating)
        .collect();
    let average_rating = if rated.is_empty() {
        0.0
    } else {
        let mean = rated.iter().sum::<i32>() as f64 / rated.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    Ok(ReadingStats {
        total_books: books.len(),
        currently_reading: books
            .iter()
            .filter(|b| b.status == ReadingStatus::Reading)
            .count(),
        completed: books
            .iter()
            .filter(|b| b.status == ReadingStatus::Completed)
            .count(),
        average_rating,
    })
}
