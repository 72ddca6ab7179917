//! Health check endpoint.

use axum::Json;
use serde_json::{Value, json};

/// GET /healthz — liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
