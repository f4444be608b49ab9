//! Router configuration for the web server.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check for container orchestration
        .route("/health", get(handlers::health))
        // Year check API
        .route(
            "/api/check",
            get(handlers::check_get).post(handlers::check_post),
        )
        .route("/api/check-multiple", post(handlers::check_multiple))
        .route(
            "/api/adjacent-leap-years",
            get(handlers::adjacent_get).post(handlers::adjacent_post),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
