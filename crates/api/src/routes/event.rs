//! Route definitions for the `/events` resource and the flat `/costs`
//! addressing of individual cost lines.

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::{event, event_cost};
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// DELETE /{id}                -> delete (cascades costs)
/// PATCH  /{id}/status         -> update_status
/// PATCH  /{id}/financials     -> update_base_price
/// GET    /{id}/financials     -> financials
/// POST   /{id}/shutter-usage  -> record_shutter_usage
/// GET    /{id}/public         -> public_page (public)
/// GET    /{id}/costs          -> costs list
/// POST   /{id}/costs          -> costs create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event::list).post(event::create))
        .route("/{id}", get(event::get_by_id).delete(event::delete))
        .route("/{id}/status", patch(event::update_status))
        .route(
            "/{id}/financials",
            get(event::financials).patch(event::update_base_price),
        )
        .route("/{id}/shutter-usage", post(event::record_shutter_usage))
        .route("/{id}/public", get(event::public_page))
        .route("/{id}/costs", get(event_cost::list).post(event_cost::create))
}

/// Routes mounted at `/costs`: direct addressing of one cost line.
///
/// ```text
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn costs_router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(event_cost::update).delete(event_cost::delete),
    )
}
