//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Calls at most one transaction service operation
//! 3. Returns an HTTP response (JSON, status code)

use serde::Serialize;

/// Health check endpoint
pub mod health;
/// Transaction CRUD endpoints
pub mod transactions;

/// Fixed-message response body.
///
/// Used for the health check and the delete confirmation.
///
/// # JSON Example
///
/// ```json
/// {
///   "Message": "All good"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation text
    #[serde(rename = "Message")]
    pub message: String,
}
