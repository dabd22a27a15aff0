//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

use crate::application::services::{TodoService, TodoServiceImpl};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::SqliteTodoRepository;
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub todo_service: Arc<dyn TodoService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the repository and service over `db`
    pub fn new(db: SqlitePool, settings: Settings) -> Self {
        let todo_repo = Arc::new(SqliteTodoRepository::new(db.clone()));
        let todo_service: Arc<dyn TodoService> = Arc::new(TodoServiceImpl::new(todo_repo));

        Self {
            db,
            todo_service,
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with every middleware layer applied
pub fn build_router(state: AppState) -> Router {
    let settings = state.settings.clone();

    routes::create_router(state)
        .layer(TimeoutLayer::new(settings.server.request_timeout()))
        .layer(create_trace_layer())
        .layer(create_cors_layer(&settings.cors))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        health::init_server_start();

        let addr = settings.server.socket_addr()?;
        let router = build_router(AppState::new(db, settings));

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped (Ctrl+C)
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
