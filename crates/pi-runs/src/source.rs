//! Run source abstraction — load run documents from files or mocks.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{RunsError, RunsResult};

/// Abstraction for loading a raw run document.
///
/// Lets the summary route run against in-memory fixtures in tests and the
/// filesystem in production.
#[async_trait]
pub trait RunSource: Send + Sync {
    /// Load and parse the JSON document at `path`.
    async fn read_document(&self, path: &str) -> RunsResult<Value>;
}

/// Reads run documents from the local filesystem.
pub struct FileRunSource;

#[async_trait]
impl RunSource for FileRunSource {
    async fn read_document(&self, path: &str) -> RunsResult<Value> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RunsError::NotFound(path.to_string())
            } else {
                RunsError::Io(format!("{path}: {e}"))
            }
        })?;
        serde_json::from_str(&content).map_err(|e| RunsError::Json {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
