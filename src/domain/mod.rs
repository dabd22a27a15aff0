//! # Domain Layer
//!
//! Core entity and repository contract of the todo service.
//! Independent of axum, sqlx and every other infrastructure concern.
//!
//! ## Structure
//!
//! - **entities**: the `Todo` entity and the `TodoRepository` trait

pub mod entities;

pub use entities::*;
