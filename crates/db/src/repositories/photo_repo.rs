//! Repository for the `photos` table.
//!
//! Listing order is always `created_at, id`: the checkout's
//! tier-remainder maths charges whichever photos come last in that
//! order, so it must be stable.

use sqlx::PgPool;

use shutterdesk_core::types::DbId;

use crate::models::photo::{CreatePhoto, Photo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, album_id, filename, original_path, watermarked_path, \
                       price, bib_numbers, width, height, created_at";

/// Provides photo persistence for the gallery.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Insert a stored photo row.
    pub async fn create(pool: &PgPool, input: &CreatePhoto) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos \
                (album_id, filename, original_path, watermarked_path, price, width, height)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(input.album_id)
            .bind(&input.filename)
            .bind(&input.original_path)
            .bind(&input.watermarked_path)
            .bind(input.price)
            .bind(input.width)
            .bind(input.height)
            .fetch_one(pool)
            .await
    }

    /// Find a photo by id.
    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE id = $1");
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an album's photos in stable order.
    pub async fn list_for_album(pool: &PgPool, album_id: DbId) -> Result<Vec<Photo>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM photos WHERE album_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Photo>(&query)
            .bind(album_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch a selection of photos from one album in stable order.
    ///
    /// Photos from other albums are silently absent; callers compare
    /// lengths to detect a mixed or invalid selection.
    pub async fn list_by_ids_for_album(
        pool: &PgPool,
        album_id: DbId,
        ids: &[DbId],
    ) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photos \
             WHERE album_id = $1 AND id = ANY($2) \
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(album_id)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Store detected bib numbers on a photo.
    pub async fn set_bib_numbers(
        pool: &PgPool,
        id: DbId,
        bib_numbers: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE photos SET bib_numbers = $2 WHERE id = $1")
            .bind(id)
            .bind(bib_numbers)
            .execute(pool)
            .await?;
        Ok(())
    }
}
