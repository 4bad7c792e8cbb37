// Server module - Router assembly shared by main.rs and the integration tests

use axum::Router;
use axum::extract::DefaultBodyLimit;
use std::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infrastructure::AppState;

/// Request bodies up to 10MB, so inline base64 covers fit.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    let api_router = api::api_router(state);

    // CORS configuration - the API is single-user and serves a local
    // browser client, so the policy is permissive
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", axum::routing::get(api::health::root))
        .nest("/api", api_router)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Find an available port starting from the preferred port
pub fn find_available_port(preferred_port: u16) -> Option<u16> {
    // Try preferred port first
    if TcpListener::bind(("0.0.0.0", preferred_port)).is_ok() {
        return Some(preferred_port);
    }

    // Scan next 100 ports
    ((preferred_port + 1)..(preferred_port + 100))
        .find(|&port| TcpListener::bind(("0.0.0.0", port)).is_ok())
}
