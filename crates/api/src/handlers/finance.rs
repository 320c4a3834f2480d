//! Handlers for the `/finance` resource.

use axum::extract::State;
use axum::Json;
use shutterdesk_db::models::report::LedgerEntry;
use shutterdesk_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/finance/ledger
///
/// Merged activity feed: events appear as Credit lines at their base price,
/// event costs and manual Debit transactions as Debit lines, newest first.
pub async fn ledger(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<LedgerEntry>>> {
    let entries = ReportRepo::ledger(&state.pool, user.user_id).await?;
    Ok(Json(entries))
}
