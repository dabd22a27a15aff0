//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **TodoService**: Todo validation, full and partial updates

pub mod todo_service;

pub use todo_service::{
    CreateTodoDto, PatchTodoDto, TodoError, TodoField, TodoService, TodoServiceImpl,
    UpdateTodoDto,
};
