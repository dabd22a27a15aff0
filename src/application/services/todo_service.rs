//! Todo Service
//!
//! Validation and orchestration for todo operations. The repository is the
//! only collaborator; every storage outcome is translated into [`TodoError`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{RepositoryError, Todo, TodoRepository};
use crate::shared::validation::{field_message, not_blank};

/// Todo service trait
#[async_trait]
pub trait TodoService: Send + Sync {
    /// List all todos ordered by id
    async fn get_todos(&self) -> Result<Vec<Todo>, TodoError>;

    /// Get todo by ID
    async fn get_todo(&self, id: i64) -> Result<Todo, TodoError>;

    /// Create a new todo
    async fn create_todo(&self, request: CreateTodoDto) -> Result<Todo, TodoError>;

    /// Replace every field of an existing todo
    async fn update_todo(&self, id: i64, request: UpdateTodoDto) -> Result<Todo, TodoError>;

    /// Merge the supplied fields into an existing todo
    async fn patch_todo(&self, id: i64, request: PatchTodoDto) -> Result<Todo, TodoError>;

    /// Delete a todo
    async fn delete_todo(&self, id: i64) -> Result<(), TodoError>;
}

/// Create todo request
///
/// Both fields are optional so that "absent" and "present but empty" stay
/// distinguishable; the service rejects either case.
#[derive(Debug, Clone, Default)]
pub struct CreateTodoDto {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Full update request. All three fields are required.
#[derive(Debug, Clone, Default)]
pub struct UpdateTodoDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Partial update request. At least one field is required.
#[derive(Debug, Clone, Default)]
pub struct PatchTodoDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl PatchTodoDto {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.completed.is_none()
    }

    fn apply_to(self, todo: &mut Todo) {
        if let Some(name) = self.name {
            todo.name = name;
        }
        if let Some(description) = self.description {
            todo.description = description;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

/// Todo fields that a full update must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoField {
    Name,
    Description,
    Completed,
}

impl TodoField {
    /// Declaration order; validation reports the first failing field in it
    pub const ORDER: [TodoField; 3] = [
        TodoField::Name,
        TodoField::Description,
        TodoField::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoField::Name => "name",
            TodoField::Description => "description",
            TodoField::Completed => "completed",
        }
    }

    pub fn names() -> [&'static str; 3] {
        Self::ORDER.map(|f| f.as_str())
    }
}

impl fmt::Display for TodoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Todo service errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    #[error("Todo not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    /// A full update omitted one of its required fields
    #[error("{0} is required")]
    MissingField(TodoField),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for TodoError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => TodoError::NotFound,
            RepositoryError::Internal(msg) => TodoError::Internal(msg),
        }
    }
}

/// TodoService implementation
pub struct TodoServiceImpl<R>
where
    R: TodoRepository,
{
    todo_repo: Arc<R>,
}

impl<R> TodoServiceImpl<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repo: Arc<R>) -> Self {
        Self { todo_repo }
    }
}

#[async_trait]
impl<R> TodoService for TodoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    async fn get_todos(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.todo_repo.list_all().await?)
    }

    async fn get_todo(&self, id: i64) -> Result<Todo, TodoError> {
        Ok(self.todo_repo.get_by_id(id).await?)
    }

    async fn create_todo(&self, request: CreateTodoDto) -> Result<Todo, TodoError> {
        let name = required_text(TodoField::Name, request.name)?;
        let description = required_text(TodoField::Description, request.description)?;

        let mut todo = Todo::new(name, description);
        self.todo_repo.create(&mut todo).await?;

        Ok(todo)
    }

    async fn update_todo(&self, id: i64, request: UpdateTodoDto) -> Result<Todo, TodoError> {
        // Presence only; checked in field order, first miss wins
        let name = request.name.ok_or(TodoError::MissingField(TodoField::Name))?;
        let description = request
            .description
            .ok_or(TodoError::MissingField(TodoField::Description))?;
        let completed = request
            .completed
            .ok_or(TodoError::MissingField(TodoField::Completed))?;

        let todo = Todo {
            id,
            name,
            description,
            completed,
        };

        Ok(self.todo_repo.update(&todo).await?)
    }

    async fn patch_todo(&self, id: i64, request: PatchTodoDto) -> Result<Todo, TodoError> {
        // Read-modify-write without isolation: a concurrent writer between
        // the read and the update is overwritten (last write wins).
        let mut todo = self.todo_repo.get_by_id(id).await?;

        if request.is_empty() {
            return Err(TodoError::Validation(
                "at least one of name, description or completed must be provided".into(),
            ));
        }

        request.apply_to(&mut todo);
        tracing::debug!(todo_id = id, "Applying partial update");

        Ok(self.todo_repo.update(&todo).await?)
    }

    async fn delete_todo(&self, id: i64) -> Result<(), TodoError> {
        Ok(self.todo_repo.delete(id).await?)
    }
}

/// Present and not blank; the first check to fail names the field
fn required_text(field: TodoField, value: Option<String>) -> Result<String, TodoError> {
    let value = value.ok_or_else(|| TodoError::Validation(format!("{} is required", field)))?;
    not_blank(&value).map_err(|e| TodoError::Validation(field_message(field.as_str(), &e)))?;
    Ok(value)
}
