//! Repository for the `albums` table.

use sqlx::PgPool;

use shutterdesk_core::types::DbId;

use crate::models::album::{Album, CreateAlbum};
use crate::tenant::{self, OwnedEntity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, description, created_at";

impl OwnedEntity for Album {
    const TABLE: &'static str = "albums";
    const COLUMNS: &'static str = COLUMNS;
    const ENTITY: &'static str = "Album";
}

/// Provides album operations. Photos and pricing tiers cascade on
/// delete.
pub struct AlbumRepo;

impl AlbumRepo {
    /// Create an album for the user.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateAlbum,
    ) -> Result<Album, sqlx::Error> {
        let query = format!(
            "INSERT INTO albums (user_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an album if it belongs to `user_id`.
    pub async fn find(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Album>, sqlx::Error> {
        tenant::find_owned::<Album>(pool, id, user_id).await
    }

    /// List the user's albums, most recently created first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Album>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM albums WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Album>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an album if it belongs to `user_id`. Photos and tiers
    /// cascade.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        tenant::delete_owned::<Album>(pool, id, user_id).await
    }
}
