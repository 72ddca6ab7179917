//! In-memory todo store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewTodo, TodoItem, TodoListService};
use crate::auth::Credentials;
use crate::error::{ApiError, ApiResult};

/// Todo store backed by a `RwLock<Vec>`. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryTodoStore {
    items: RwLock<Vec<TodoItem>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoListService for InMemoryTodoStore {
    async fn create_todo(
        &self,
        input: NewTodo,
        credentials: &Credentials,
    ) -> ApiResult<TodoItem> {
        let item = TodoItem {
            id: Uuid::new_v4(),
            title: input.title,
            entity_ref: input.entity_ref,
            created_by: credentials.principal.reference(),
            created_at: Utc::now(),
        };

        self.items.write().await.push(item.clone());
        tracing::info!(todo_id = %item.id, created_by = %item.created_by, "todo created");

        Ok(item)
    }

    async fn list_todos(&self) -> ApiResult<Vec<TodoItem>> {
        Ok(self.items.read().await.clone())
    }

    async fn get_todo(&self, id: Uuid) -> ApiResult<TodoItem> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("todo '{id}' not found")))
    }
}
