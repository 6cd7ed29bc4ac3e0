//! Transaction HTTP handlers.
//!
//! This module implements the transaction CRUD endpoints:
//! - GET /api/transaction - List all transactions
//! - GET /api/transaction/{id} - Get one transaction
//! - POST /api/transaction - Create a transaction
//! - PUT /api/transaction/{id} - Update a transaction
//! - DELETE /api/transaction/{id} - Delete a transaction
//!
//! Handlers take their extractors as `Result`s so a parse failure turns
//! into the JSON error envelope instead of axum's default rejection, and no
//! service call happens for an undecodable request.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    error::AppError,
    handlers::MessageResponse,
    models::transaction::{Transaction, TransactionRequest},
    services::transaction_service::DynTransactionService,
};

/// Get a transaction by id.
///
/// # Endpoint
///
/// `GET /api/transaction/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: the transaction
/// - **Error (400)**: the id did not parse as a non-negative integer
/// - **Error (404)**: no transaction has this id
/// - **Error (500)**: storage failure
pub async fn get_transaction(
    State(service): State<DynTransactionService>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Transaction>, AppError> {
    let Path(id) = id?;

    let transaction = service.get(id).await?;

    Ok(Json(transaction))
}

/// List every transaction.
///
/// # Endpoint
///
/// `GET /api/transaction`
///
/// # Response
///
/// Returns a JSON array of transactions (may be empty), ordered by id.
pub async fn get_all_transactions(
    State(service): State<DynTransactionService>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = service.get_all().await?;

    Ok(Json(transactions))
}

/// Create a new transaction.
///
/// # Endpoint
///
/// `POST /api/transaction`
///
/// # Request Body
///
/// ```json
/// {
///   "customer": "Alice",
///   "product": "Laptop"
/// }
/// ```
///
/// Any `id` in the body is ignored; the database assigns one.
///
/// # Response
///
/// - **Success (200 OK)**: the created transaction, including its id
/// - **Error (400)**: the body did not decode as a transaction object
/// - **Error (500)**: storage failure
pub async fn post_transaction(
    State(service): State<DynTransactionService>,
    body: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<Json<Transaction>, AppError> {
    let Json(request) = body?;

    let transaction = service.create(request).await?;

    Ok(Json(transaction))
}

/// Update a transaction by id.
///
/// # Endpoint
///
/// `PUT /api/transaction/{id}`
///
/// # Request Body
///
/// Same shape as create. Only non-empty fields overwrite the stored record;
/// empty or missing fields leave it unchanged, so
///
/// ```json
/// {
///   "product": "Gadget"
/// }
/// ```
///
/// changes the product and keeps the stored customer.
///
/// # Response
///
/// - **Success (200 OK)**: the merged transaction
/// - **Error (400)**: undecodable id or body
/// - **Error (404)**: no transaction has this id
/// - **Error (500)**: storage failure
pub async fn update_transaction(
    State(service): State<DynTransactionService>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<Json<Transaction>, AppError> {
    let Path(id) = id?;
    let Json(partial) = body?;

    let transaction = service.update(id, partial).await?;

    Ok(Json(transaction))
}

/// Delete a transaction by id.
///
/// # Endpoint
///
/// `DELETE /api/transaction/{id}`
///
/// Deleting an id that does not exist still confirms; the storage layer
/// treats it as a no-op.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "Message": "Transaction deleted successfully"
/// }
/// ```
pub async fn delete_transaction(
    State(service): State<DynTransactionService>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = id?;

    service.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Transaction deleted successfully".to_string(),
    }))
}
