//! Handlers for the `/lenses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shutterdesk_core::error::CoreError;
use shutterdesk_core::types::DbId;
use shutterdesk_db::models::lens::{CreateLens, Lens, UpdateLens};
use shutterdesk_db::repositories::LensRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/lenses
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateLens>,
) -> AppResult<(StatusCode, Json<Lens>)> {
    let lens = LensRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(lens)))
}

/// GET /api/v1/lenses
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Lens>>> {
    let lenses = LensRepo::list(&state.pool, user.user_id).await?;
    Ok(Json(lenses))
}

/// GET /api/v1/lenses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Lens>> {
    let lens = LensRepo::find(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lens", id }))?;
    Ok(Json(lens))
}

/// PUT /api/v1/lenses/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLens>,
) -> AppResult<Json<Lens>> {
    let lens = LensRepo::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lens", id }))?;
    Ok(Json(lens))
}

/// DELETE /api/v1/lenses/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LensRepo::delete(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Lens", id }))
    }
}
