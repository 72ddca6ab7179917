//! Todo endpoints, delegated to the auth and todo collaborators.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::PrincipalKind;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::todos::{NewTodo, TodoItem};

/// POST /todos — create a todo as the calling user.
///
/// Body: `{"title": string, "entityRef"?: string}`.
pub async fn create_todo(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TodoItem>)> {
    let Json(value) = body.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    let input: NewTodo =
        serde_json::from_value(value).map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let credentials = state
        .auth
        .credentials(&headers, &[PrincipalKind::User])
        .await?;
    let item = state.todos.create_todo(input, &credentials).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /todos — list all todos.
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<TodoItem>>> {
    state.todos.list_todos().await.map(Json)
}

/// GET /todos/{id} — get one todo.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoItem>> {
    let id: Uuid = id
        .parse()
        .map_err(|_| ApiError::InvalidInput(format!("'{id}' is not a valid todo id")))?;
    state.todos.get_todo(id).await.map(Json)
}
