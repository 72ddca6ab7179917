//! Shared test harness for E2E integration tests.
//!
//! Serves the real router with a `FileRunSource` pointed at a run document
//! written to a temporary directory.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use pi_api::routes::build_router;
use pi_api::state::AppState;

/// End-to-end harness: router + on-disk run document.
pub struct TestHarness {
    /// Keeps the temp directory alive for the test's duration.
    _dir: TempDir,
    /// Path the summary route reads.
    pub runs_path: PathBuf,
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Harness whose run document does not exist yet.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let runs_path = dir.path().join("gha-runs.json");
        Self::build(dir, runs_path, |path| AppState::new(path))
    }

    /// Harness with `document` written as the run file.
    pub fn with_document(document: &serde_json::Value) -> Self {
        let h = Self::new();
        h.write_document(document);
        h
    }

    /// Harness with custom state construction (e.g. token auth).
    pub fn with_state(make: impl FnOnce(&str) -> AppState) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let runs_path = dir.path().join("gha-runs.json");
        Self::build(dir, runs_path, make)
    }

    fn build(dir: TempDir, runs_path: PathBuf, make: impl FnOnce(&str) -> AppState) -> Self {
        let state = make(runs_path.to_str().unwrap());
        let router = build_router(state.clone());
        Self {
            _dir: dir,
            runs_path,
            state,
            router,
        }
    }

    /// Overwrite the run file with JSON.
    pub fn write_document(&self, document: &serde_json::Value) {
        self.write_raw(&serde_json::to_string_pretty(document).unwrap());
    }

    /// Overwrite the run file with arbitrary text.
    pub fn write_raw(&self, content: &str) {
        std::fs::write(&self.runs_path, content).unwrap();
    }

    /// Send a request through the router. Returns (status, JSON body).
    pub async fn request(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    /// GET /v1/summary.
    pub async fn summary(&self) -> (StatusCode, serde_json::Value) {
        self.request(Request::get("/v1/summary").body(Body::empty()).unwrap())
            .await
    }

    /// POST /todos with an optional bearer token.
    pub async fn create_todo(
        &self,
        body: &serde_json::Value,
        token: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::post("/todos").header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        self.request(
            builder
                .body(Body::from(serde_json::to_vec(body).unwrap()))
                .unwrap(),
        )
        .await
    }
}

/// A completed run with an explicit duration.
pub fn completed(conclusion: &str, duration_ms: u64, updated_at: &str) -> serde_json::Value {
    serde_json::json!({
        "status": "completed",
        "conclusion": conclusion,
        "run_duration_ms": duration_ms,
        "updated_at": updated_at,
    })
}
