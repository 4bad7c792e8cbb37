use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use super::error_response;
use crate::infrastructure::AppState;
use crate::services::book_service::{self, CreateBookInput, UpdateBookInput};

#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "All books in the collection")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> impl IntoResponse {
    match book_service::list_books(state.book_repo.as_ref()).await {
        Ok(books) => (StatusCode::OK, Json(books)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    responses(
        (status = 200, description = "The requested book"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match book_service::get_book(state.book_repo.as_ref(), id).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/books",
    responses(
        (status = 201, description = "Book created"),
        (status = 400, description = "Missing title or author")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(input): Json<CreateBookInput>,
) -> impl IntoResponse {
    match book_service::create_book(state.book_repo.as_ref(), input).await {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    patch,
    path = "/api/books/{id}",
    responses(
        (status = 200, description = "Updated book"),
        (status = 400, description = "Invalid field value"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateBookInput>,
) -> impl IntoResponse {
    match book_service::update_book(state.book_repo.as_ref(), id, input).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match book_service::delete_book(state.book_repo.as_ref(), id).await {
        Ok(deleted_count) => (
            StatusCode::OK,
            Json(json!({
                "message": "Book deleted successfully",
                "deletedCount": deleted_count
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
