//! Handlers for the `/events` resource, including the shutter-usage
//! accrual endpoint and the public event page.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shutterdesk_core::equipment::shutter_wear_cost;
use shutterdesk_core::error::CoreError;
use shutterdesk_core::finance::EventFinancials;
use shutterdesk_core::types::DbId;
use shutterdesk_db::models::event::{
    CreateEvent, Event, UpdateEventBasePrice, UpdateEventStatus,
};
use shutterdesk_db::models::invoice::PublicInvoice;
use shutterdesk_db::repositories::{CameraRepo, EventCostRepo, EventRepo, InvoiceRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /events/{id}/shutter-usage`.
#[derive(Debug, Deserialize)]
pub struct ShutterUsageRequest {
    pub camera_id: DbId,
    pub shutter_count: i64,
}

/// Response for `POST /events/{id}/shutter-usage`.
#[derive(Debug, Serialize)]
pub struct ShutterUsageResponse {
    /// Wear cost booked against the event.
    pub cost: f64,
    /// Camera lifetime count after the accrual.
    pub new_shutter_count: i64,
}

/// Response for `GET /events/{id}/financials`.
#[derive(Debug, Serialize)]
pub struct EventFinancialsResponse {
    pub event_id: DbId,
    #[serde(flatten)]
    pub financials: EventFinancials,
}

/// Response for the public event page: the event plus its issued invoices.
#[derive(Debug, Serialize)]
pub struct PublicEventResponse {
    #[serde(flatten)]
    pub event: Event,
    pub invoices: Vec<PublicInvoice>,
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/events
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = EventRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/events
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Event>>> {
    let events = EventRepo::list(&state.pool, user.user_id).await?;
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(event))
}

/// DELETE /api/v1/events/{id}
///
/// Cascades to the event's cost lines via the schema's foreign keys.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Partial updates
// ---------------------------------------------------------------------------

/// PATCH /api/v1/events/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEventStatus>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::update_status(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(event))
}

/// PATCH /api/v1/events/{id}/financials
pub async fn update_base_price(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEventBasePrice>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::update_base_price(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(event))
}

// ---------------------------------------------------------------------------
// Financials and usage accrual
// ---------------------------------------------------------------------------

/// GET /api/v1/events/{id}/financials
pub async fn financials(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<EventFinancialsResponse>> {
    let event = EventRepo::find(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;

    let total_cost = EventCostRepo::sum_for_event(&state.pool, id).await?;
    Ok(Json(EventFinancialsResponse {
        event_id: id,
        financials: EventFinancials::from_parts(event.base_price, total_cost),
    }))
}

/// POST /api/v1/events/{id}/shutter-usage
///
/// Books shutter wear for a shoot: computes the depreciation cost for the
/// given shot count, advances the camera's lifetime counter and inserts a
/// `Shutter Wear` cost line on the event. Counter update and cost insert
/// happen in one transaction.
pub async fn record_shutter_usage(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ShutterUsageRequest>,
) -> AppResult<Json<ShutterUsageResponse>> {
    if input.shutter_count <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "shutter_count must be a positive integer".into(),
        )));
    }

    if !EventRepo::exists(&state.pool, id, user.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }));
    }

    let camera = CameraRepo::find(&state.pool, input.camera_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Camera",
            id: input.camera_id,
        }))?;

    let cost = shutter_wear_cost(
        camera.purchase_price,
        camera.max_shutter_life,
        input.shutter_count,
    );
    let description = format!("{} shots with {}", input.shutter_count, camera.model_name);

    let new_shutter_count = CameraRepo::record_usage(
        &state.pool,
        camera.id,
        id,
        input.shutter_count,
        cost,
        &description,
    )
    .await?;

    tracing::info!(
        event_id = %id,
        camera_id = %camera.id,
        shots = input.shutter_count,
        cost,
        "Shutter usage recorded"
    );

    Ok(Json(ShutterUsageResponse {
        cost,
        new_shutter_count,
    }))
}

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

/// GET /api/v1/events/{id}/public
///
/// Unauthenticated event page: the event joined with its non-draft invoices.
/// Draft invoices stay private until issued.
pub async fn public_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PublicEventResponse>> {
    let event = EventRepo::find_public(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;

    let invoices = InvoiceRepo::non_draft_for_event(&state.pool, id).await?;
    Ok(Json(PublicEventResponse { event, invoices }))
}
