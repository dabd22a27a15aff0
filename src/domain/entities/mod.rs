//! # Domain Entities
//!
//! The todo service manages exactly one entity:
//!
//! - **Todo**: a named task with a description and a completion flag
//!
//! ## Repository Traits
//!
//! The entity has an associated repository trait defining its data access
//! operations. The trait is implemented in the infrastructure layer, so the
//! application layer depends only on the contract.

mod todo;

pub use todo::{RepositoryError, Todo, TodoRepository};

#[cfg(test)]
pub use todo::MockTodoRepository;
