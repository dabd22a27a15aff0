//! Todo Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{CreateTodoRequest, PatchTodoRequest, UpdateTodoRequest};
use crate::application::dto::response::TodoResponse;
use crate::presentation::http::extractors::{JsonBody, TodoId};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all todos
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let todos = state.todo_service.get_todos().await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Get todo by ID
pub async fn get_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.todo_service.get_todo(id).await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let todo = state.todo_service.create_todo(body.into()).await?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

/// Replace a todo
pub async fn update_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
    JsonBody(body): JsonBody<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    body.check()?;

    let todo = state.todo_service.update_todo(id, body.into()).await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// Partially update a todo
pub async fn patch_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
    JsonBody(body): JsonBody<PatchTodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    body.check()?;

    let todo = state.todo_service.patch_todo(id, body.into()).await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// Delete a todo
pub async fn delete_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> Result<StatusCode, AppError> {
    state.todo_service.delete_todo(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
