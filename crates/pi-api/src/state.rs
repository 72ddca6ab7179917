//! Shared application state for the Axum server.
//!
//! Every collaborator sits behind a trait object so tests can swap in
//! mocks:
//! - **Run source**: filesystem in production, `MockRunSource` in tests.
//! - **Auth**: bearer-token table, or guest mode when none is configured.
//! - **Todos**: in-memory store.

use std::sync::Arc;

use pi_runs::{FileRunSource, MockRunSource, RunSource};

use crate::auth::{HttpAuth, TokenAuth};
use crate::config::{ApiConfig, DEFAULT_RUNS_PATH};
use crate::todos::{InMemoryTodoStore, TodoListService};

/// Shared application state, wrapped in `Arc` for Axum handler sharing.
#[derive(Clone)]
pub struct AppState {
    /// Path of the run document served by `/v1/summary`.
    pub runs_path: Arc<str>,
    /// Loader for the run document (read fresh on every request).
    pub runs: Arc<dyn RunSource>,
    /// Credentials collaborator for the todo routes.
    pub auth: Arc<dyn HttpAuth>,
    /// Todo storage collaborator.
    pub todos: Arc<dyn TodoListService>,
}

impl AppState {
    /// Create state from loaded configuration (production).
    pub fn from_config(config: ApiConfig) -> Self {
        Self {
            runs_path: config.runs_path.into(),
            runs: Arc::new(FileRunSource),
            auth: Arc::new(TokenAuth::new(config.auth_tokens)),
            todos: Arc::new(InMemoryTodoStore::new()),
        }
    }

    /// Filesystem-backed state reading `runs_path`, guest auth.
    pub fn new(runs_path: impl Into<Arc<str>>) -> Self {
        Self {
            runs_path: runs_path.into(),
            runs: Arc::new(FileRunSource),
            auth: Arc::new(TokenAuth::guest()),
            todos: Arc::new(InMemoryTodoStore::new()),
        }
    }

    /// Create state serving the mock workflow-run sample (for tests).
    pub fn with_sample_data() -> Self {
        Self {
            runs: Arc::new(MockRunSource::with_workflow_runs_sample()),
            ..Self::new(DEFAULT_RUNS_PATH)
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(ApiConfig::default())
    }
}
