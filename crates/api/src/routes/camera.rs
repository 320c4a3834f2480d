//! Route definitions for the `/cameras` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::camera;
use crate::state::AppState;

/// Routes mounted at `/cameras`.
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
        .route("/", get(camera::list).post(camera::create))
        .route(
            "/{id}",
            get(camera::get_by_id)
                .put(camera::update)
                .delete(camera::delete),
        )
}
