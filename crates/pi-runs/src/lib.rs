//! CI workflow run history for Platform Insights.
//!
//! Reads a run document (a bare array of runs, or a GitHub-style
//! `{"workflow_runs": [...]}` / `{"runs": [...]}` object), normalizes it into
//! absent-tolerant [`Run`] records, and reduces the most recent completed runs
//! into a [`Summary`].

pub mod document;
pub mod error;
pub mod mock;
pub mod source;
pub mod summary;
pub mod time;
pub mod types;

// Re-export key types for convenience
pub use document::{RunDocument, parse_runs};
pub use error::{RunsError, RunsResult};
pub use mock::MockRunSource;
pub use source::{FileRunSource, RunSource};
pub use summary::{WINDOW_SIZE, summarize};
pub use types::{Run, RunCounts, Summary};
