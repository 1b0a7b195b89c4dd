//! Transactions API endpoints - JSON API
//!
//! Endpoints:
//! - api_transactions: List all transactions
//! - api_transaction_detail: Get single transaction
//! - api_transaction_create: Create a transaction (201)
//! - api_transaction_update: Replace description and amount
//! - api_transaction_delete: Delete a transaction (204)

use crate::{ApiError, AppState};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::collections::HashMap;
use txledger_core::{require_valid_amount, Transaction};

use super::params::TransactionParams;

/// Get all transactions (JSON API)
pub async fn api_transactions(State(state): State<AppState>) -> Json<Vec<Transaction>> {
    let transactions = state.store.list();
    log::info!("GET /transactions - {} transactions", transactions.len());
    Json(transactions)
}

/// Get single transaction detail (JSON API)
pub async fn api_transaction_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    log::info!("GET /transactions/{}", id);
    Ok(Json(state.store.get(&id)?))
}

/// Create a transaction from `description` and `amount`
pub async fn api_transaction_create(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let params = TransactionParams::bind(query, &body)?;
    log::info!("POST /transactions - params: {:?}", params);

    let amount = require_valid_amount(params.amount)?;
    let transaction = state.store.create(params.description, amount)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Update description and amount of an existing transaction
pub async fn api_transaction_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Result<Json<Transaction>, ApiError> {
    let params = TransactionParams::bind(query, &body)?;
    log::info!("PUT /transactions/{} - params: {:?}", id, params);

    // Amount is checked before the lookup: an invalid amount is a 400 even for unknown ids
    let amount = require_valid_amount(params.amount)?;
    let transaction = state.store.update(&id, params.description, amount)?;

    Ok(Json(transaction))
}

/// Delete a transaction
pub async fn api_transaction_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    log::info!("DELETE /transactions/{}", id);
    state.store.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
