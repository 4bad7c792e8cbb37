use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::progress::ReadingStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub total_pages: i32,
    pub current_page: i32,
    pub progress: i32,
    #[sea_orm(default_value = "to-read")]
    pub status: String,
    pub rating: i32,
    pub notes: String,
    pub cover: Option<String>,
    pub reading_sessions: String, // JSON array
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A single reading session inside a book's ledger.
///
/// Insertion order in the ledger is not semantically meaningful; clients
/// sort by date for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique within the owning book; assigned on append.
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    pub start_page: i32,
    pub end_page: i32,
    #[serde(default)]
    pub notes: Option<String>,
}

// DTO for API responses - field names match the JSON wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Option<i32>,
    pub title: String,
    pub author: String,
    pub total_pages: i32,
    pub current_page: i32,
    pub progress: i32,
    pub status: ReadingStatus,
    pub rating: i32,
    pub notes: String,
    pub cover: Option<String>,
    pub reading_sessions: Vec<Session>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Book {
    /// A freshly created book: empty ledger, everything derived zeroed.
    pub fn new(title: String, author: String, total_pages: i32) -> Self {
        Self {
            id: None,
            title,
            author,
            total_pages,
            current_page: 0,
            progress: 0,
            status: ReadingStatus::ToRead,
            rating: 0,
            notes: String::new(),
            cover: None,
            reading_sessions: Vec::new(),
            start_date: None,
            end_date: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        let reading_sessions: Vec<Session> =
            serde_json::from_str(&model.reading_sessions).unwrap_or_default();

        Self {
            id: Some(model.id),
            title: model.title,
            author: model.author,
            total_pages: model.total_pages,
            current_page: model.current_page,
            progress: model.progress,
            status: model.status.parse().unwrap_or(ReadingStatus::ToRead),
            rating: model.rating,
            notes: model.notes,
            cover: model.cover,
            reading_sessions,
            start_date: model.start_date.and_then(|d| d.parse().ok()),
            end_date: model.end_date.and_then(|d| d.parse().ok()),
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }
}
