//! Transaction API - Main Application Entry Point
//!
//! REST API server for creating, reading, updating, and deleting
//! transaction records (customer/product pairs) in PostgreSQL.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. Create database connection pool
//! 4. Run database migrations
//! 5. Build the HTTP router around the PostgreSQL-backed service
//! 6. Start the server on the configured port
//!
//! Any failure before step 6 aborts the process.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use transaction_api::{
    config::Config, create_app, db, services::transaction_service::PgTransactionService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads the RUST_LOG
    // environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Construct the service and hand it to the router
    let service = Arc::new(PgTransactionService::new(pool));
    let app = create_app(service);

    // Bind to network address and start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Serve HTTP requests concurrently on the tokio runtime
    axum::serve(listener, app).await?;

    Ok(())
}
