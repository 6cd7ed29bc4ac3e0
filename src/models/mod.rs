//! Data models representing database entities.

/// Transaction record and request body
pub mod transaction;
