//! Route definitions for the `/finance` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::finance;
use crate::state::AppState;

/// Routes mounted at `/finance`.
///
/// ```text
/// GET /ledger  -> ledger (merged activity feed)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/ledger", get(finance::ledger))
}
