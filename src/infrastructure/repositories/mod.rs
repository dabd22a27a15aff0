//! Repository Implementations
//!
//! SQLite implementations of domain repository traits.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::SqlitePool;
//! use crate::infrastructure::repositories::SqliteTodoRepository;
//!
//! fn setup_repositories(pool: SqlitePool) -> SqliteTodoRepository {
//!     SqliteTodoRepository::new(pool)
//! }
//! ```

pub mod todo_repository;

pub use todo_repository::SqliteTodoRepository;
