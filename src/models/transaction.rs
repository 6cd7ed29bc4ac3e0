//! Transaction data model and API request type.
//!
//! This module defines:
//! - `Transaction`: Database entity representing a transaction record
//! - `TransactionRequest`: Request body for create and update operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each transaction:
/// - Has a unique id assigned by the database on insert
/// - Pairs a customer with a product (both free-form text)
/// - Carries create/update timestamps maintained by the database
///
/// Soft-deleted rows never reach this struct; every query filters them out.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "customer": "Alice",
///   "product": "Laptop",
///   "created_at": "2025-06-01T10:00:00Z",
///   "updated_at": "2025-06-01T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// Unique identifier for this transaction.
    ///
    /// Stored as BIGINT; ids are assigned by a sequence and are always
    /// positive, so the domain type stays unsigned.
    #[sqlx(try_from = "i64")]
    pub id: u64,

    /// Customer the transaction belongs to.
    pub customer: String,

    /// Product that was transacted.
    pub product: String,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or updating a transaction.
///
/// # JSON Example
///
/// ```json
/// {
///   "customer": "Alice",
///   "product": "Laptop"
/// }
/// ```
///
/// Both fields are optional; `null` and a missing member are equivalent.
/// Unknown members (including a client-supplied `id`) are ignored. On create,
/// missing fields persist as empty strings. On update, the overlay rule in
/// [`Transaction::apply_partial`] decides which stored fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionRequest {
    /// Customer name, free-form.
    pub customer: Option<String>,

    /// Product name, free-form.
    pub product: Option<String>,
}

impl Transaction {
    /// Overlay the non-empty fields of `partial` onto this record.
    ///
    /// A field only changes when the request carries a non-empty string for
    /// it; empty strings and missing members both leave the stored value
    /// untouched. The merge therefore cannot express "clear this field to
    /// empty".
    pub fn apply_partial(&mut self, partial: TransactionRequest) {
        if let Some(customer) = partial.customer.filter(|value| !value.is_empty()) {
            self.customer = customer;
        }
        if let Some(product) = partial.product.filter(|value| !value.is_empty()) {
            self.product = product;
        }
    }
}
