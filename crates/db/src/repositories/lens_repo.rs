//! Repository for the `lenses` table.

use sqlx::PgPool;

use shutterdesk_core::types::DbId;

use crate::models::lens::{CreateLens, Lens, UpdateLens};
use crate::tenant::{self, OwnedEntity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, model_name, serial_number, purchase_date, purchase_price, created_at";

impl OwnedEntity for Lens {
    const TABLE: &'static str = "lenses";
    const COLUMNS: &'static str = COLUMNS;
    const ENTITY: &'static str = "Lens";
}

/// Provides CRUD operations for lenses.
pub struct LensRepo;

impl LensRepo {
    /// Register a lens for the user.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateLens,
    ) -> Result<Lens, sqlx::Error> {
        let query = format!(
            "INSERT INTO lenses (user_id, model_name, serial_number, purchase_date, purchase_price)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lens>(&query)
            .bind(user_id)
            .bind(&input.model_name)
            .bind(&input.serial_number)
            .bind(input.purchase_date)
            .bind(input.purchase_price)
            .fetch_one(pool)
            .await
    }

    /// Find a lens if it belongs to `user_id`.
    pub async fn find(pool: &PgPool, id: DbId, user_id: DbId) -> Result<Option<Lens>, sqlx::Error> {
        tenant::find_owned::<Lens>(pool, id, user_id).await
    }

    /// List the user's lenses, most recently registered first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Lens>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM lenses WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Lens>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a lens. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateLens,
    ) -> Result<Option<Lens>, sqlx::Error> {
        let query = format!(
            "UPDATE lenses SET
                model_name = COALESCE($3, model_name),
                serial_number = COALESCE($4, serial_number),
                purchase_date = COALESCE($5, purchase_date),
                purchase_price = COALESCE($6, purchase_price)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lens>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.model_name)
            .bind(&input.serial_number)
            .bind(input.purchase_date)
            .bind(input.purchase_price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lens if it belongs to `user_id`. Returns `true` if a
    /// row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        tenant::delete_owned::<Lens>(pool, id, user_id).await
    }
}
