use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use http::StatusCode;
use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::extract::ValidatedJson;
use crate::models::{DeleteTransaction, Transaction};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub transaction: Transaction,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions))
        .route("/:id", get(get_transaction))
        .route("/add", post(add_transaction))
        .route("/edit", post(edit_transaction))
        .route("/delete", delete(delete_transaction))
}

pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<TransactionsResponse>, AppError> {
    info!("GET /api/txn - Listing transactions");

    let transactions = state.transaction_service.find_all()
        .await
        .map_err(|e| {
            error!("Failed to fetch transactions: {}", e);
            AppError::Db(e)
        })?;

    Ok(Json(TransactionsResponse { transactions }))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TransactionResponse>, AppError> {
    info!("GET /api/txn/{} - Fetching transaction", raw_id);

    let id: i32 = raw_id
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid transaction id: {}", raw_id)))?;

    let transaction = state.transaction_service.find_by_id(id)
        .await
        .map_err(|e| {
            error!("Failed to fetch transaction {}: {}", id, e);
            AppError::Db(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Transaction {} not found", id)))?;

    Ok(Json(TransactionResponse { transaction }))
}

pub async fn add_transaction(
    State(state): State<AppState>,
    ValidatedJson(mut txn): ValidatedJson<Transaction>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    info!("POST /api/txn/add - Adding {} transaction for {}", txn.kind, txn.ticker);

    state.transaction_service.add(&mut txn)
        .await
        .map_err(|e| {
            error!("Failed to add transaction: {}", e);
            AppError::Db(e)
        })?;

    info!("Added transaction {}", txn.id);
    Ok((StatusCode::CREATED, Json(MessageResponse { message: "Added successfully" })))
}

pub async fn edit_transaction(
    State(state): State<AppState>,
    ValidatedJson(txn): ValidatedJson<Transaction>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    info!("POST /api/txn/edit - Editing transaction {}", txn.id);

    state.transaction_service.edit(&txn)
        .await
        .map_err(|e| {
            error!("Failed to edit transaction {}: {}", txn.id, e);
            AppError::Db(e)
        })?;

    Ok((StatusCode::ACCEPTED, Json(MessageResponse { message: "Edited successfully" })))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DeleteTransaction>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    info!("DELETE /api/txn/delete - Deleting transaction {}", request.id);

    state.transaction_service.delete(request.id)
        .await
        .map_err(|e| {
            error!("Failed to delete transaction {}: {}", request.id, e);
            AppError::Db(e)
        })?;

    Ok((StatusCode::ACCEPTED, Json(MessageResponse { message: "Deleted successfully" })))
}
