//! Health check endpoint for service monitoring.

use axum::Json;

use crate::handlers::MessageResponse;

/// Health check handler.
///
/// Liveness only: answers 200 with a fixed body and never touches the
/// storage backend, so it stays green while the database is down.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "Message": "All good"
/// }
/// ```
pub async fn health_check() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "All good".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_reports_fixed_message() {
        let Json(body) = health_check().await;

        assert_eq!(body.message, "All good");
    }
}
