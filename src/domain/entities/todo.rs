//! Todo entity and repository trait.
//!
//! Maps to the `todos` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// Maps to the `todos` table:
/// - id: INTEGER PRIMARY KEY AUTOINCREMENT
/// - name: TEXT NOT NULL
/// - description: TEXT NOT NULL
/// - completed: INTEGER NOT NULL (0 or 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Row ID assigned by storage on insert. Zero until persisted.
    pub id: i64,

    /// Short title, never blank once persisted
    pub name: String,

    /// Free-form details, never blank once persisted
    pub description: String,

    pub completed: bool,
}

impl Todo {
    /// Build an unsaved todo. New items always start out not completed.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            completed: false,
        }
    }
}

/// Outcomes a repository may report besides success.
///
/// Raw storage errors never cross this boundary; they are logged where they
/// occur and collapsed into `Internal`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Todo not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository trait for Todo data access operations.
///
/// Every id-keyed operation must affect exactly one row when the id exists.
/// Affecting zero rows is reported as `NotFound`; failing to execute at all
/// is reported as `Internal`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// List every todo ordered by id ascending.
    async fn list_all(&self) -> Result<Vec<Todo>, RepositoryError>;

    /// Find a todo by its ID.
    async fn get_by_id(&self, id: i64) -> Result<Todo, RepositoryError>;

    /// Insert a new todo and write the generated ID back into `todo`.
    async fn create(&self, todo: &mut Todo) -> Result<(), RepositoryError>;

    /// Replace name, description and completed of the row keyed by `todo.id`.
    async fn update(&self, todo: &Todo) -> Result<Todo, RepositoryError>;

    /// Permanently delete a todo.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
