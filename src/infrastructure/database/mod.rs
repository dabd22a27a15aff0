//! Database Module
//!
//! SQLite connection pool and schema migrations.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::DatabaseSettings;

/// Create a SQLite connection pool
///
/// In-memory databases live and die with their connection, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);

    let pool_options = SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout));

    let pool_options = if settings.is_in_memory() {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
    };

    pool_options.connect_with(options).await
}

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Round-trip a trivial query, used by readiness checks
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn memory_settings() -> DatabaseSettings {
    DatabaseSettings {
        url: "sqlite::memory:".into(),
        max_connections: 5,
        min_connections: 1,
        acquire_timeout: 5,
        run_migrations: true,
    }
}

/// Fresh migrated in-memory database
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = create_pool(&memory_settings()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
