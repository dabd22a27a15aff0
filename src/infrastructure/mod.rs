//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - SQLite connection pool and migrations
//! - Todo repository
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
