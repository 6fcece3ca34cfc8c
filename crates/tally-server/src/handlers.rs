//! REST handlers. Pure glue: shape validation here, everything else
//! delegated to the store or the pipeline.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use tally_core::{Todo, TodoId, TodoPatch};

use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTodoBody {
    #[serde(default)]
    pub content: Option<String>,
}

/// One item of a summarize request. Clients typically post back records from
/// `GET /api/todos`, so unknown fields are accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct SummarizeItem {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeBody {
    #[serde(default)]
    pub todos: Option<Vec<SummarizeItem>>,
}

/// A body that fails extraction (malformed JSON, wrong shape) is the
/// caller's error, not ours; report it as a 400 rather than axum's 422.
fn bad_body(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// `GET /api/todos`: all todos, newest first.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todos.list()?;
    Ok(Json(todos))
}

/// `POST /api/todos`: create from `{content}`.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(body) = body.map_err(bad_body)?;
    let content = body
        .content
        .ok_or_else(|| ApiError::BadRequest("content is required".into()))?;
    let todo = state.todos.create(&content)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PATCH /api/todos/:id`: partial update of content and/or completed.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    patch: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(patch) = patch.map_err(bad_body)?;
    state.todos.update(&TodoId::from_raw(id), &patch)?;
    Ok(Json(json!({ "message": "Todo updated successfully" })))
}

/// `DELETE /api/todos/:id`
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.todos.delete(&TodoId::from_raw(id))?;
    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}

/// `POST /api/summarize`: summarize the posted todos and deliver to chat.
pub async fn summarize(
    State(state): State<AppState>,
    body: Result<Json<SummarizeBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body.map_err(bad_body)?;
    let items = body
        .todos
        .ok_or_else(|| ApiError::BadRequest("no todos provided for summarization".into()))?;

    // The pipeline only reads content; give the transient records fresh ids.
    let todos: Vec<Todo> = items
        .into_iter()
        .map(|item| Todo {
            id: TodoId::new(),
            content: item.content,
            completed: false,
            created_at: String::new(),
        })
        .collect();

    let result = state.summarizer.summarize(&todos).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Summary sent to Slack successfully",
        "summary": result.summary,
    })))
}
