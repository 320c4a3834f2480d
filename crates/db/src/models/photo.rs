//! Photo entity model and public response shape.

use serde::Serialize;
use sqlx::FromRow;

use shutterdesk_core::types::{DbId, Timestamp};

/// Photo row from the `photos` table.
///
/// `original_path` points at the clean file buyers pay for -- it must
/// never reach a public listing. Use [`PhotoResponse`] for that.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub album_id: DbId,
    pub filename: String,
    pub original_path: String,
    pub watermarked_path: Option<String>,
    pub price: f64,
    pub bib_numbers: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: Timestamp,
}

/// Public photo shape: watermarked preview only, no original path.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoResponse {
    pub id: DbId,
    pub album_id: DbId,
    pub filename: String,
    pub watermarked_path: Option<String>,
    pub price: f64,
    pub bib_numbers: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: Timestamp,
}

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            album_id: photo.album_id,
            filename: photo.filename,
            watermarked_path: photo.watermarked_path,
            price: photo.price,
            bib_numbers: photo.bib_numbers,
            width: photo.width,
            height: photo.height,
            created_at: photo.created_at,
        }
    }
}

/// Insert payload for a stored photo, built after the upload is written
/// to the media store.
#[derive(Debug)]
pub struct CreatePhoto {
    pub album_id: DbId,
    pub filename: String,
    pub original_path: String,
    pub watermarked_path: Option<String>,
    pub price: f64,
    pub width: Option<i32>,
    pub height: Option<i32>,
}
