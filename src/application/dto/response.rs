//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::Todo;

/// Todo response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            name: todo.name,
            description: todo.description,
            completed: todo.completed,
        }
    }
}
