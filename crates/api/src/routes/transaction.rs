//! Route definitions for the `/transactions` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::transaction;
use crate::state::AppState;

/// Routes mounted at `/transactions`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// PUT    /{id}  -> update (full replace)
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(transaction::list).post(transaction::create))
        .route(
            "/{id}",
            put(transaction::update).delete(transaction::delete),
        )
}
