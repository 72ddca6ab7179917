//! Mock run source for testing — serves pre-loaded documents.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;

use crate::error::{RunsError, RunsResult};
use crate::source::RunSource;

/// A mock run source that serves pre-loaded documents by path.
pub struct MockRunSource {
    documents: HashMap<String, Value>,
}

impl MockRunSource {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
        }
    }

    /// Add a document served at `path`.
    pub fn add_document(&mut self, path: impl Into<String>, document: Value) {
        self.documents.insert(path.into(), document);
    }

    /// Builder form of [`add_document`](Self::add_document).
    pub fn with_document(mut self, path: impl Into<String>, document: Value) -> Self {
        self.add_document(path, document);
        self
    }

    /// A GitHub Actions style export with a mix of statuses and conclusions,
    /// served at `/data/gha-runs.json`.
    ///
    /// Completed runs: 3 success, 1 failure, 1 cancelled. Durations
    /// 1000/2000/3000/4000 explicit plus 5000 derived from timestamps, so
    /// the mean is 3000 and the success rate 0.75.
    pub fn with_workflow_runs_sample() -> Self {
        Self::new().with_document(
            "/data/gha-runs.json",
            json!({
                "total_count": 7,
                "workflow_runs": [
                    {"status": "completed", "conclusion": "success", "run_duration_ms": 1000,
                     "updated_at": "2025-03-01T10:05:00Z"},
                    {"status": "completed", "conclusion": "failure", "run_duration_ms": 2000,
                     "updated_at": "2025-03-01T09:05:00Z"},
                    {"status": "in_progress", "conclusion": null,
                     "updated_at": "2025-03-01T11:00:00Z"},
                    {"status": "completed", "conclusion": "success", "run_duration_ms": 3000,
                     "updated_at": "2025-03-01T08:05:00Z"},
                    {"status": "completed", "conclusion": "cancelled", "run_duration_ms": 4000,
                     "updated_at": "2025-03-01T07:05:00Z"},
                    {"status": "completed", "conclusion": "success",
                     "created_at": "2025-03-01T06:00:00Z",
                     "run_started_at": "2025-03-01T06:00:10Z",
                     "updated_at": "2025-03-01T06:00:15Z"},
                    {"status": "queued"}
                ]
            }),
        )
    }
}

impl Default for MockRunSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RunSource for MockRunSource {
    async fn read_document(&self, path: &str) -> RunsResult<Value> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| RunsError::NotFound(path.to_string()))
    }
}
