//! HTTP Boundary
//!
//! Decodes requests into DTOs, calls the todo service and encodes results
//! or [`AppError`](crate::shared::error::AppError)s into responses.

pub mod extractors;
pub mod handlers;
pub mod routes;
