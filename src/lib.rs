//! REST API for managing transaction records (customer/product pairs).
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Format**: JSON requests/responses
//!
//! Requests flow one way: a handler decodes the request, calls one
//! operation on the [`TransactionService`] contract, and serializes the
//! result or error. The service owns all storage access.
//!
//! [`TransactionService`]: services::transaction_service::TransactionService

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::services::transaction_service::DynTransactionService;

/// Build the application router around a transaction service.
///
/// The service is injected here once; handlers receive it through axum's
/// `State` extraction. Tests pass an in-memory implementation, `main` passes
/// the PostgreSQL one.
pub fn create_app(service: DynTransactionService) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::health_check))
        .route(
            "/api/transaction",
            get(handlers::transactions::get_all_transactions),
        )
        .route(
            "/api/transaction/{id}",
            get(handlers::transactions::get_transaction),
        )
        .route(
            "/api/transaction/{id}",
            delete(handlers::transactions::delete_transaction),
        )
        .route(
            "/api/transaction/{id}",
            put(handlers::transactions::update_transaction),
        )
        .route(
            "/api/transaction",
            post(handlers::transactions::post_transaction),
        )
        // Request/response tracing for observability
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
