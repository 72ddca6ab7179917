//! CI run summary endpoint.
//!
//! Reads the run document on every request; nothing is cached.

use axum::Json;
use axum::extract::State;

use pi_runs::{RunDocument, RunsResult, Summary, summarize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const FALLBACK_MESSAGE: &str = "failed to compute summary";

/// GET /v1/summary — success rate and mean duration over the last 10
/// completed runs.
///
/// Any failure (missing file, bad JSON, unexpected shape) is a 500 carrying
/// the underlying message.
pub async fn get_summary(State(state): State<AppState>) -> ApiResult<Json<Summary>> {
    compute(&state).await.map(Json).map_err(|e| {
        tracing::error!(path = %state.runs_path, error = %e, "summary failed");
        let message = e.to_string();
        ApiError::Internal(if message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        })
    })
}

async fn compute(state: &AppState) -> RunsResult<Summary> {
    let raw = state.runs.read_document(&state.runs_path).await?;
    let document = RunDocument::inspect(raw)?;
    tracing::debug!(
        shape = document.shape(),
        entries = document.len(),
        "loaded run document"
    );
    Ok(summarize(&document.into_runs()))
}
