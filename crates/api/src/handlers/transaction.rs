//! Handlers for the `/transactions` resource (manual ledger entries).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shutterdesk_core::error::CoreError;
use shutterdesk_core::types::DbId;
use shutterdesk_db::models::transaction::{CreateTransaction, Transaction};
use shutterdesk_db::repositories::TransactionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/transactions
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateTransaction>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    let tx = TransactionRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(tx)))
}

/// GET /api/v1/transactions
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Transaction>>> {
    let txs = TransactionRepo::list(&state.pool, user.user_id).await?;
    Ok(Json(txs))
}

/// PUT /api/v1/transactions/{id}
///
/// Full replacement: the body carries the same shape as create.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateTransaction>,
) -> AppResult<Json<Transaction>> {
    let tx = TransactionRepo::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Transaction",
            id,
        }))?;
    Ok(Json(tx))
}

/// DELETE /api/v1/transactions/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TransactionRepo::delete(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Transaction",
            id,
        }))
    }
}
