//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur while serving a
/// request. Each variant maps to a specific HTTP status code and a fixed
/// human-readable message.
///
/// # Error Categories
///
/// - **Decoding errors**: the path id or the request body could not be
///   parsed; raised in the handler layer before any service call
/// - **Not found**: the requested transaction does not exist
/// - **Database errors**: any sqlx::Error from storage operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested transaction does not exist (or was deleted).
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Transaction not found")]
    TransactionNotFound,

    /// The `{id}` path parameter did not parse as a non-negative integer.
    ///
    /// Returns HTTP 400 Bad Request. The operation is never invoked.
    #[error("{0}")]
    InvalidId(#[from] PathRejection),

    /// The request body did not decode as a transaction object.
    ///
    /// Returns HTTP 400 Bad Request. The operation is never invoked.
    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows handlers to return `Result<T, AppError>` and
/// have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "Message": "Fixed human-readable message",
///   "Error": "raw error text"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Database` → 500 Internal Server Error
/// - `TransactionNotFound` → 404 Not Found
/// - `InvalidId` → 400 Bad Request
/// - `InvalidBody` → 400 Bad Request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, fixed message)
        let (status, message) = match &self {
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database operation failed",
            ),
            AppError::TransactionNotFound => (StatusCode::NOT_FOUND, "Transaction not found"),
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, "Error parsing the transaction ID"),
            AppError::InvalidBody(_) => {
                (StatusCode::BAD_REQUEST, "Error decoding the request body")
            }
        };

        // Build the JSON envelope: a fixed Message plus the raw error text
        let body = Json(json!({
            "Message": message,
            "Error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
