//! Handlers for the `/cameras` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shutterdesk_core::error::CoreError;
use shutterdesk_core::types::DbId;
use shutterdesk_db::models::camera::{Camera, CreateCamera, UpdateCamera};
use shutterdesk_db::repositories::CameraRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/cameras
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCamera>,
) -> AppResult<(StatusCode, Json<Camera>)> {
    let camera = CameraRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(camera)))
}

/// GET /api/v1/cameras
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Camera>>> {
    let cameras = CameraRepo::list(&state.pool, user.user_id).await?;
    Ok(Json(cameras))
}

/// GET /api/v1/cameras/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Camera>> {
    let camera = CameraRepo::find(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Camera",
            id,
        }))?;
    Ok(Json(camera))
}

/// PUT /api/v1/cameras/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCamera>,
) -> AppResult<Json<Camera>> {
    let camera = CameraRepo::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Camera",
            id,
        }))?;
    Ok(Json(camera))
}

/// DELETE /api/v1/cameras/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CameraRepo::delete(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Camera",
            id,
        }))
    }
}
