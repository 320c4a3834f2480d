//! Route definitions for the `/lenses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::lens;
use crate::state::AppState;

/// Routes mounted at `/lenses`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lens::list).post(lens::create))
        .route(
            "/{id}",
            get(lens::get_by_id).put(lens::update).delete(lens::delete),
        )
}
