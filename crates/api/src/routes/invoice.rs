//! Route definitions for the `/invoices` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::invoice;
use crate::state::AppState;

/// Routes mounted at `/invoices`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id (header + items)
/// PUT    /{id}      -> update
/// GET    /{id}/pdf  -> public_pdf (public, link sharing)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(invoice::list).post(invoice::create))
        .route("/{id}", get(invoice::get_by_id).put(invoice::update))
        .route("/{id}/pdf", get(invoice::public_pdf))
}
