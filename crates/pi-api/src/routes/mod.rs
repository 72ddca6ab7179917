//! API route definitions and router builder.

pub mod health;
pub mod summary;
pub mod todos;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(health::health))
        .route("/v1/summary", get(summary::get_summary))
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route("/todos/{id}", get(todos::get_todo))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
