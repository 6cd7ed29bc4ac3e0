//! Transaction service - persistence operations for transaction records.
//!
//! The service is the single place that translates domain operations on
//! transactions into storage calls. It is defined as a trait so the HTTP
//! layer can be constructed against any implementation; the production
//! implementation runs against PostgreSQL.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    db::DbPool,
    error::AppError,
    models::transaction::{Transaction, TransactionRequest},
};

/// The transaction persistence contract.
///
/// Implementations own the mapping between [`Transaction`] and its storage
/// representation. Callers receive storage failures opaquely as
/// [`AppError`]; no operation retries or recovers.
#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Fetch one record by its id.
    ///
    /// # Errors
    ///
    /// - `TransactionNotFound`: no visible record has this id
    /// - `Database`: the storage call failed
    async fn get(&self, id: u64) -> Result<Transaction, AppError>;

    /// Fetch all records whose customer equals `customer` (case-sensitive
    /// exact match). Returns an empty vector, not an error, when nothing
    /// matches.
    async fn get_by_customer(&self, customer: &str) -> Result<Vec<Transaction>, AppError>;

    /// Fetch every record.
    async fn get_all(&self) -> Result<Vec<Transaction>, AppError>;

    /// Persist a new record. The backend assigns the id and timestamps;
    /// missing request fields persist as empty strings.
    async fn create(&self, request: TransactionRequest) -> Result<Transaction, AppError>;

    /// Fetch the record by `id`, overlay the non-empty fields of `partial`
    /// onto it, and persist the merged row.
    ///
    /// # Errors
    ///
    /// - `TransactionNotFound`: no visible record has this id
    /// - `Database`: a storage call failed
    async fn update(&self, id: u64, partial: TransactionRequest) -> Result<Transaction, AppError>;

    /// Remove the record with this id. Deleting an id that does not exist
    /// is a no-op, not an error.
    async fn delete(&self, id: u64) -> Result<(), AppError>;
}

/// Shared, dynamically dispatched handle to the transaction service.
///
/// The router is built against this type so tests can substitute an
/// in-memory implementation.
pub type DynTransactionService = Arc<dyn TransactionService>;

/// PostgreSQL-backed [`TransactionService`].
///
/// Deletion is logical: rows keep their data and gain a `deleted_at`
/// timestamp, and every query here filters on `deleted_at IS NULL`.
/// Multi-record reads order by id so repeated reads return equal sequences.
#[derive(Debug, Clone)]
pub struct PgTransactionService {
    pool: DbPool,
}

impl PgTransactionService {
    /// Create a service that runs its queries on `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionService for PgTransactionService {
    async fn get(&self, id: u64) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, customer, product, created_at, updated_at
            FROM transactions
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(db_id(id)?)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::TransactionNotFound)?;

        Ok(transaction)
    }

    async fn get_by_customer(&self, customer: &str) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, customer, product, created_at, updated_at
            FROM transactions
            WHERE customer = $1 AND deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .bind(customer)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn get_all(&self) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, customer, product, created_at, updated_at
            FROM transactions
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn create(&self, request: TransactionRequest) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (customer, product)
            VALUES ($1, $2)
            RETURNING id, customer, product, created_at, updated_at
            "#,
        )
        .bind(request.customer.unwrap_or_default())
        .bind(request.product.unwrap_or_default())
        .fetch_one(&self.pool)
        .await?;

        Ok(transaction)
    }

    async fn update(&self, id: u64, partial: TransactionRequest) -> Result<Transaction, AppError> {
        // Fetch first so a missing id surfaces as not-found, then persist
        // the merged row. The two statements are deliberately not wrapped in
        // a database transaction; a row deleted in between reads as missing.
        let mut transaction = self.get(id).await?;
        transaction.apply_partial(partial);

        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            UPDATE transactions
            SET customer = $2, product = $3, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, customer, product, created_at, updated_at
            "#,
        )
        .bind(db_id(id)?)
        .bind(&transaction.customer)
        .bind(&transaction.product)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::TransactionNotFound)?;

        Ok(transaction)
    }

    async fn delete(&self, id: u64) -> Result<(), AppError> {
        // Ids beyond BIGINT range cannot exist, so there is nothing to do.
        let Ok(id) = i64::try_from(id) else {
            return Ok(());
        };

        sqlx::query(
            r#"
            UPDATE transactions
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Ids are stored as BIGINT; a path id beyond i64::MAX cannot exist.
fn db_id(id: u64) -> Result<i64, AppError> {
    i64::try_from(id).map_err(|_| AppError::TransactionNotFound)
}
