use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::error_response;
use crate::infrastructure::AppState;
use crate::services::book_service;

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Aggregate collection stats")
    )
)]
pub async fn reading_stats(State(state): State<AppState>) -> impl IntoResponse {
    match book_service::reading_stats(state.book_repo.as_ref()).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => error_response(e),
    }
}
