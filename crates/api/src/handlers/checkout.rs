//! Handlers for the public checkout flow and the payment webhook.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shutterdesk_core::error::CoreError;
use shutterdesk_core::money::to_minor_units;
use shutterdesk_core::pricing::{resolve_bundle_price, Tier};
use shutterdesk_core::types::DbId;
use shutterdesk_db::repositories::{PhotoRepo, PricingTierRepo};
use shutterdesk_payments::BillRequest;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /checkout`.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub photo_ids: Vec<DbId>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

/// Response for `POST /checkout`: the resolved total and where to pay it.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub total_price: f64,
    pub bill_code: String,
    pub payment_url: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/checkout
///
/// Unauthenticated purchase flow for gallery buyers. Resolves the bundle
/// total from the album's tier schedule, then creates a bill with the
/// payment gateway and hands back the redirect URL. The selection must be
/// non-empty and drawn from a single album.
pub async fn checkout(
    State(state): State<AppState>,
    Json(input): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutResponse>> {
    if input.photo_ids.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "At least one photo must be selected".into(),
        )));
    }

    let mut ids = input.photo_ids;
    ids.sort_unstable();
    ids.dedup();

    // The first photo pins the album; the scoped fetch below catches any
    // id that is missing or belongs elsewhere.
    let album_id = match PhotoRepo::find(&state.pool, ids[0]).await? {
        Some(photo) => photo.album_id,
        None => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Photo",
                id: ids[0],
            }))
        }
    };

    let photos = PhotoRepo::list_by_ids_for_album(&state.pool, album_id, &ids).await?;
    if photos.len() != ids.len() {
        return Err(AppError::Core(CoreError::Validation(
            "All photos must belong to the same album".into(),
        )));
    }

    let tiers: Vec<Tier> = PricingTierRepo::list_for_album(&state.pool, album_id)
        .await?
        .iter()
        .map(|t| Tier {
            quantity: t.quantity,
            price: t.price,
        })
        .collect();
    let prices: Vec<f64> = photos.iter().map(|p| p.price).collect();
    let total_price = resolve_bundle_price(&tiers, &prices);

    let bill = BillRequest {
        name: "Photo purchase".to_string(),
        description: format!("{} photos from album {album_id}", photos.len()),
        amount_cents: to_minor_units(total_price),
        reference: album_id.to_string(),
        customer_name: input.customer_name,
        customer_email: input.customer_email,
        customer_phone: input.customer_phone,
    };

    let session = state.payment_gateway.create_bill(&bill).await?;
    tracing::info!(
        %album_id,
        photos = photos.len(),
        total_price,
        bill_code = %session.bill_code,
        "Checkout bill created"
    );

    Ok(Json(CheckoutResponse {
        total_price,
        bill_code: session.bill_code,
        payment_url: session.payment_url,
    }))
}

/// POST /api/v1/payments/callback
///
/// Gateway webhook. The payload is logged for reconciliation and the
/// gateway always gets a 200 back; replays are harmless.
pub async fn payment_callback(body: String) -> (StatusCode, &'static str) {
    tracing::info!(payload = %body, "Payment gateway callback received");
    (StatusCode::OK, "OK")
}
