//! Router
//!
//! Assembles the HTTP surface and its layers.

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{memos, users};
use super::middleware::request_id_middleware;
use super::AppState;

/// Build the application router with all routes and layers applied
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest(memos::MEMOS_BASE_PATH, memos::router())
        .nest("/users", users::router())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
