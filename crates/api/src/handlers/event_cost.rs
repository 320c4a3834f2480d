//! Handlers for event cost lines.
//!
//! Creation and listing live under `/events/{id}/costs`; update and delete
//! address a cost line directly under `/costs/{id}`, with ownership checked
//! through the parent event. The effective `amount` is always resolved
//! server-side from the rate type, so a per-unit line can never carry a
//! stale flat amount.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shutterdesk_core::error::CoreError;
use shutterdesk_core::finance::{cost_amount, RateType};
use shutterdesk_core::types::DbId;
use shutterdesk_db::models::event_cost::{CreateEventCost, EventCost, UpdateEventCost};
use shutterdesk_db::repositories::{EventCostRepo, EventRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn parse_rate(rate_type: Option<&str>) -> Result<RateType, AppError> {
    RateType::parse(rate_type.unwrap_or("flat")).map_err(AppError::Core)
}

/// POST /api/v1/events/{id}/costs
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(event_id): Path<DbId>,
    Json(input): Json<CreateEventCost>,
) -> AppResult<(StatusCode, Json<EventCost>)> {
    if !EventRepo::exists(&state.pool, event_id, user.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }));
    }

    let rate = parse_rate(input.rate_type.as_deref())?;
    let amount = cost_amount(
        rate,
        input.amount.unwrap_or(0.0),
        input.unit_price.unwrap_or(0.0),
        input.quantity.unwrap_or(1.0),
    );

    let cost = EventCostRepo::create(&state.pool, event_id, &input, amount).await?;
    Ok((StatusCode::CREATED, Json(cost)))
}

/// GET /api/v1/events/{id}/costs
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<Vec<EventCost>>> {
    if !EventRepo::exists(&state.pool, event_id, user.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }));
    }

    let costs = EventCostRepo::list_for_event(&state.pool, event_id).await?;
    Ok(Json(costs))
}

/// PUT /api/v1/costs/{id}
///
/// Merges the patch over the stored line, then re-resolves the effective
/// amount from the merged rate type before writing.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEventCost>,
) -> AppResult<Json<EventCost>> {
    let existing = EventCostRepo::find(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventCost",
            id,
        }))?;

    let rate = parse_rate(Some(
        input.rate_type.as_deref().unwrap_or(&existing.rate_type),
    ))?;
    let amount = cost_amount(
        rate,
        input.amount.unwrap_or(existing.amount),
        input.unit_price.unwrap_or(existing.unit_price),
        input.quantity.unwrap_or(existing.quantity),
    );

    let cost = EventCostRepo::update(&state.pool, id, user.user_id, &input, amount)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventCost",
            id,
        }))?;
    Ok(Json(cost))
}

/// DELETE /api/v1/costs/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventCostRepo::delete(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "EventCost",
            id,
        }))
    }
}
