pub mod books;
pub mod health;
pub mod sessions;
pub mod stats;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .patch(books::update_book)
                .delete(books::delete_book),
        )
        // Reading sessions
        .route("/books/:id/sessions", post(sessions::add_session))
        .route(
            "/books/:id/sessions/:session_id",
            axum::routing::delete(sessions::delete_session),
        )
        // Stats
        .route("/stats", get(stats::reading_stats))
        .with_state(state)
}

/// Map a domain failure to its HTTP response
pub(crate) fn error_response(err: DomainError) -> Response {
    match err {
        DomainError::NotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "error": "Book not found" })),
        )
            .into_response(),
        DomainError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, axum::Json(json!({ "error": msg }))).into_response()
        }
        DomainError::Database(msg) => {
            tracing::error!("Database error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}
