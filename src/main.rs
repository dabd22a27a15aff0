//! # Todo API
//!
//! Application entry point. Initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - SQLite connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use todo_api::config::Settings;
use todo_api::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    todo_api::telemetry::init_tracing();

    info!("Starting Todo API...");

    let settings = Settings::load()?;
    info!(
        address = %settings.server_addr(),
        database = %settings.database.url,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
