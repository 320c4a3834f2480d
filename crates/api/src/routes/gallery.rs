//! Route definitions for the `/albums` resource and the public checkout
//! surface.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{album, checkout};
use crate::state::AppState;

/// Routes mounted at `/albums`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// DELETE /{id}                 -> delete (cascades photos + tiers)
/// POST   /{id}/photos          -> upload_photo (multipart)
/// GET    /{id}/photos          -> public_photos (public)
/// PUT    /{id}/pricing-tiers   -> put_pricing_tiers
/// GET    /{id}/pricing-tiers   -> get_pricing_tiers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(album::list).post(album::create))
        .route("/{id}", delete(album::delete))
        .route(
            "/{id}/photos",
            get(album::public_photos).post(album::upload_photo),
        )
        .route(
            "/{id}/pricing-tiers",
            get(album::get_pricing_tiers).put(album::put_pricing_tiers),
        )
}

/// Routes mounted at `/checkout`: the public purchase flow.
///
/// ```text
/// POST /  -> checkout (public)
/// ```
pub fn checkout_router() -> Router<AppState> {
    Router::new().route("/", post(checkout::checkout))
}

/// Routes mounted at `/payments`: the gateway webhook.
///
/// ```text
/// POST /callback  -> payment_callback (public)
/// ```
pub fn payments_router() -> Router<AppState> {
    Router::new().route("/callback", post(checkout::payment_callback))
}
