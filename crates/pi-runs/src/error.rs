//! Run document error types.

use thiserror::Error;

/// Errors that can occur while loading or interpreting a run document.
#[derive(Debug, Error)]
pub enum RunsError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("run document not found: {0}")]
    NotFound(String),

    #[error("invalid JSON in {path}: {message}")]
    Json { path: String, message: String },

    #[error(
        "invalid runs document: expected an array or an object with a `workflow_runs` or `runs` array, got {0}"
    )]
    Shape(&'static str),
}

/// Convenience alias for run document results.
pub type RunsResult<T> = Result<T, RunsError>;
