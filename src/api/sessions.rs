use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::error_response;
use crate::infrastructure::AppState;
use crate::services::book_service::{self, NewSessionInput};

#[utoipa::path(
    post,
    path = "/api/books/{id}/sessions",
    responses(
        (status = 200, description = "Updated book with the new session"),
        (status = 400, description = "Invalid page range"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn add_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<NewSessionInput>,
) -> impl IntoResponse {
    match book_service::add_session(state.book_repo.as_ref(), id, input).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/books/{id}/sessions/{session_id}",
    responses(
        (status = 200, description = "Updated book; removing an unknown session id is a no-op"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_session(
    State(state): State<AppState>,
    Path((id, session_id)): Path<(i32, String)>,
) -> impl IntoResponse {
    match book_service::remove_session(state.book_repo.as_ref(), id, &session_id).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}
