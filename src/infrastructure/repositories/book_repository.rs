//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{BookRepository, DomainError};
use crate::models::book::{ActiveModel, Book, Column, Entity as BookEntity, Session};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn sessions_json(sessions: &[Session]) -> String {
    serde_json::to_string(sessions).unwrap_or_else(|_| "[]".to_string())
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        let books = BookEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(books.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        let book_model = BookEntity::find_by_id(id).one(&self.db).await?;

        Ok(book_model.map(Book::from))
    }

    async fn create(&self, book: Book) -> Result<Book, DomainError> {
        let now = chrono::Utc::now();

        let new_book = ActiveModel {
            title: Set(book.title),
            author: Set(book.author),
            total_pages: Set(book.total_pages),
            current_page: Set(book.current_page),
            progress: Set(book.progress),
            status: Set(book.status.to_string()),
            rating: Set(book.rating),
            notes: Set(book.notes),
            cover: Set(book.cover),
            reading_sessions: Set(sessions_json(&book.reading_sessions)),
            start_date: Set(book.start_date.map(|d| d.to_string())),
            end_date: Set(book.end_date.map(|d| d.to_string())),
            created_at: Set(now.to_rfc3339()),
            updated_at: Set(now.to_rfc3339()),
            ..Default::default()
        };

        let result = new_book.insert(&self.db).await?;
        Ok(Book::from(result))
    }

    async fn update(&self, id: i32, book: Book) -> Result<Book, DomainError> {
        let existing = BookEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let now = chrono::Utc::now();

        let mut active: ActiveModel = existing.into();
        active.title = Set(book.title);
        active.author = Set(book.author);
        active.total_pages = Set(book.total_pages);
        active.current_page = Set(book.current_page);
        active.progress = Set(book.progress);
        active.status = Set(book.status.to_string());
        active.rating = Set(book.rating);
        active.notes = Set(book.notes);
        active.cover = Set(book.cover);
        active.reading_sessions = Set(sessions_json(&book.reading_sessions));
        active.start_date = Set(book.start_date.map(|d| d.to_string()));
        active.end_date = Set(book.end_date.map(|d| d.to_string()));
        active.updated_at = Set(now.to_rfc3339());

        let result = active.update(&self.db).await?;
        Ok(Book::from(result))
    }

    async fn delete(&self, id: i32) -> Result<u64, DomainError> {
        let result = BookEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}
