//! Common Test Utilities
//!
//! Builds the real router over a fresh in-memory SQLite database.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use todo_api::config::{CorsSettings, DatabaseSettings, ServerSettings, Settings};
use todo_api::infrastructure::database;
use todo_api::startup::{build_router, AppState};

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
}

/// Decoded response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 8080,
            request_timeout_secs: 5,
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: 5,
            run_migrations: true,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

impl TestApp {
    /// Create a new test application with an empty database
    pub async fn new() -> Self {
        let settings = test_settings();
        let db = database::create_pool(&settings.database)
            .await
            .expect("Failed to create test database");
        database::run_migrations(&db)
            .await
            .expect("Failed to migrate test database");

        let router = build_router(AppState::new(db.clone(), settings));

        Self { router, db }
    }

    /// Send a request with an optional JSON body
    pub async fn request(&self, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request("GET", uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> TestResponse {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &str) -> TestResponse {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn patch_json(&self, uri: &str, body: &str) -> TestResponse {
        self.request("PATCH", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request("DELETE", uri, None).await
    }

    /// Number of rows currently stored, bypassing the API
    pub async fn row_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(&self.db)
            .await
            .unwrap()
    }
}
