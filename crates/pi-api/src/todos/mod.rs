//! Todo list collaborator.
//!
//! Route handlers only validate input and resolve credentials; storage and
//! ownership are the [`TodoListService`]'s business.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::auth::Credentials;
use crate::error::ApiResult;

/// A stored todo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: Uuid,
    pub title: String,
    /// Catalog entity this todo is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<String>,
    /// Principal reference of the creator.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Validated body of `POST /todos`. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    /// May be omitted, but `null` is rejected.
    #[serde(default, deserialize_with = "present_string")]
    pub entity_ref: Option<String>,
}

fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

/// Trait for todo storage backends.
#[async_trait]
pub trait TodoListService: Send + Sync {
    /// Create a todo on behalf of `credentials`.
    async fn create_todo(&self, input: NewTodo, credentials: &Credentials)
    -> ApiResult<TodoItem>;

    /// All todos, oldest first.
    async fn list_todos(&self) -> ApiResult<Vec<TodoItem>>;

    async fn get_todo(&self, id: Uuid) -> ApiResult<TodoItem>;
}

pub use memory::InMemoryTodoStore;
