//! # Todo API Library
//!
//! A small HTTP service managing todo items stored in SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer**: the `Todo` entity and the repository trait
//! - **Application Layer**: validation, full vs partial updates, DTOs
//! - **Infrastructure Layer**: SQLite pool, repository, metrics
//! - **Presentation Layer**: axum routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! todo_api/
//! +-- config/         Configuration management
//! +-- domain/         Todo entity and repository trait
//! +-- application/    Todo service and DTOs
//! +-- infrastructure/ Database, repository and metrics implementations
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
