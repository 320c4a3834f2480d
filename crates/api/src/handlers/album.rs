//! Handlers for the `/albums` resource: album CRUD, photo upload with
//! watermarking, the public photo listing and bundle pricing tiers.

use std::path::Path as FsPath;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use shutterdesk_core::error::CoreError;
use shutterdesk_core::types::DbId;
use shutterdesk_db::models::album::{Album, CreateAlbum};
use shutterdesk_db::models::photo::{CreatePhoto, PhotoResponse};
use shutterdesk_db::models::pricing_tier::{PricingTier, SaveTier};
use shutterdesk_db::repositories::{AlbumRepo, PhotoRepo, PricingTierRepo};
use shutterdesk_media::image_dimensions;
use uuid::Uuid;

use crate::background::bib_tagging;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Albums
// ---------------------------------------------------------------------------

/// POST /api/v1/albums
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateAlbum>,
) -> AppResult<(StatusCode, Json<Album>)> {
    let album = AlbumRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(album)))
}

/// GET /api/v1/albums
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Album>>> {
    let albums = AlbumRepo::list(&state.pool, user.user_id).await?;
    Ok(Json(albums))
}

/// DELETE /api/v1/albums/{id}
///
/// Cascades to the album's photos and pricing tiers via the schema's
/// foreign keys. Stored image files are left on disk.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AlbumRepo::delete(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Album",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

/// POST /api/v1/albums/{id}/photos
///
/// Accepts a multipart form with a required `file` field and an optional
/// `price` field (defaults to 0). Stores the original, watermarks it via
/// the image-processing collaborator, then spawns best-effort bib tagging
/// after the response is sent. A failed watermark leaves
/// `watermarked_path` null rather than failing the upload.
pub async fn upload_photo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(album_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<PhotoResponse>)> {
    AlbumRepo::find(&state.pool, album_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Album",
            id: album_id,
        }))?;

    let mut file_data: Option<(String, Vec<u8>)> = None;
    let mut price: f64 = 0.0;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.jpg").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            "price" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                price = text
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("Invalid price '{text}'")))?;
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    // Stored under a fresh name; the client's filename only contributes
    // its extension.
    let ext = FsPath::new(&filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("jpg");
    let stored_name = format!("{}.{ext}", Uuid::new_v4());

    let original_path = state
        .media_store
        .save(&format!("gallery/{album_id}/original"), &stored_name, &data)
        .await?;

    let watermarked_path = match state.image_processor.watermark(&data, &stored_name).await {
        Ok(bytes) => Some(
            state
                .media_store
                .save(&format!("gallery/{album_id}/watermarked"), &stored_name, &bytes)
                .await?,
        ),
        Err(e) => {
            tracing::warn!(%album_id, error = %e, "Watermarking failed, storing original only");
            None
        }
    };

    let (width, height) = match image_dimensions(&data) {
        Some((w, h)) => (Some(w as i32), Some(h as i32)),
        None => (None, None),
    };

    let photo = PhotoRepo::create(
        &state.pool,
        &CreatePhoto {
            album_id,
            filename: stored_name.clone(),
            original_path: original_path.clone(),
            watermarked_path,
            price,
            width,
            height,
        },
    )
    .await?;

    tracing::info!(photo_id = %photo.id, %album_id, "Photo uploaded");

    tokio::spawn(bib_tagging::run(
        state.pool.clone(),
        state.media_store.clone(),
        state.image_processor.clone(),
        photo.id,
        original_path,
        stored_name,
    ));

    Ok((StatusCode::CREATED, Json(photo.into())))
}

/// GET /api/v1/albums/{id}/photos
///
/// Public listing for buyers. Returns watermarked previews only; an
/// unknown album simply lists as empty.
pub async fn public_photos(
    State(state): State<AppState>,
    Path(album_id): Path<DbId>,
) -> AppResult<Json<Vec<PhotoResponse>>> {
    let photos = PhotoRepo::list_for_album(&state.pool, album_id).await?;
    Ok(Json(photos.into_iter().map(Into::into).collect()))
}

// ---------------------------------------------------------------------------
// Pricing tiers
// ---------------------------------------------------------------------------

/// PUT /api/v1/albums/{id}/pricing-tiers
///
/// Replaces the album's whole tier schedule in one transaction.
pub async fn put_pricing_tiers(
    State(state): State<AppState>,
    user: AuthUser,
    Path(album_id): Path<DbId>,
    Json(tiers): Json<Vec<SaveTier>>,
) -> AppResult<Json<Vec<PricingTier>>> {
    AlbumRepo::find(&state.pool, album_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Album",
            id: album_id,
        }))?;

    if tiers.iter().any(|t| t.quantity < 1) {
        return Err(AppError::Core(CoreError::Validation(
            "Tier quantity must be at least 1".into(),
        )));
    }

    let saved = PricingTierRepo::replace_for_album(&state.pool, album_id, &tiers).await?;
    Ok(Json(saved))
}

/// GET /api/v1/albums/{id}/pricing-tiers
pub async fn get_pricing_tiers(
    State(state): State<AppState>,
    user: AuthUser,
    Path(album_id): Path<DbId>,
) -> AppResult<Json<Vec<PricingTier>>> {
    AlbumRepo::find(&state.pool, album_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Album",
            id: album_id,
        }))?;

    let tiers = PricingTierRepo::list_for_album(&state.pool, album_id).await?;
    Ok(Json(tiers))
}
