//! Repository for the `cameras` table.

use sqlx::PgPool;

use shutterdesk_core::types::DbId;

use crate::models::camera::{Camera, CreateCamera, UpdateCamera};
use crate::tenant::{self, OwnedEntity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, model_name, serial_number, purchase_date, \
                       initial_shutter_count, current_shutter_count, purchase_price, \
                       max_shutter_life, created_at";

impl OwnedEntity for Camera {
    const TABLE: &'static str = "cameras";
    const COLUMNS: &'static str = COLUMNS;
    const ENTITY: &'static str = "Camera";
}

/// Provides CRUD plus shutter usage recording for camera bodies.
pub struct CameraRepo;

impl CameraRepo {
    /// Register a camera. The initial shutter count seeds the current
    /// count.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateCamera,
    ) -> Result<Camera, sqlx::Error> {
        let query = format!(
            "INSERT INTO cameras \
                (user_id, model_name, serial_number, purchase_date, \
                 initial_shutter_count, current_shutter_count, purchase_price, max_shutter_life)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($5, 0), \
                     COALESCE($6, 0), COALESCE($7, 150000))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camera>(&query)
            .bind(user_id)
            .bind(&input.model_name)
            .bind(&input.serial_number)
            .bind(input.purchase_date)
            .bind(input.initial_shutter_count)
            .bind(input.purchase_price)
            .bind(input.max_shutter_life)
            .fetch_one(pool)
            .await
    }

    /// Find a camera if it belongs to `user_id`.
    pub async fn find(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Camera>, sqlx::Error> {
        tenant::find_owned::<Camera>(pool, id, user_id).await
    }

    /// List the user's cameras, most recently registered first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Camera>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cameras WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Camera>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List the user's cameras ordered by model name, for the wear
    /// report.
    pub async fn list_by_model(pool: &PgPool, user_id: DbId) -> Result<Vec<Camera>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cameras WHERE user_id = $1 ORDER BY model_name");
        sqlx::query_as::<_, Camera>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a camera. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the camera does not exist or belongs to a
    /// different user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateCamera,
    ) -> Result<Option<Camera>, sqlx::Error> {
        let query = format!(
            "UPDATE cameras SET
                model_name = COALESCE($3, model_name),
                serial_number = COALESCE($4, serial_number),
                purchase_date = COALESCE($5, purchase_date),
                purchase_price = COALESCE($6, purchase_price),
                max_shutter_life = COALESCE($7, max_shutter_life)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camera>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.model_name)
            .bind(&input.serial_number)
            .bind(input.purchase_date)
            .bind(input.purchase_price)
            .bind(input.max_shutter_life)
            .fetch_optional(pool)
            .await
    }

    /// Delete a camera if it belongs to `user_id`. Returns `true` if a
    /// row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        tenant::delete_owned::<Camera>(pool, id, user_id).await
    }

    /// Record shutter usage against an event: advance the camera's
    /// shutter count by `shots` and insert the matching wear cost line,
    /// atomically.
    ///
    /// Returns the camera's new shutter count.
    pub async fn record_usage(
        pool: &PgPool,
        camera_id: DbId,
        event_id: DbId,
        shots: i64,
        cost: f64,
        description: &str,
    ) -> Result<i64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (new_count,): (i64,) = sqlx::query_as(
            "UPDATE cameras SET current_shutter_count = current_shutter_count + $2
             WHERE id = $1
             RETURNING current_shutter_count",
        )
        .bind(camera_id)
        .bind(shots)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO event_costs (event_id, cost_type, amount, description)
             VALUES ($1, 'Shutter Wear', $2, $3)",
        )
        .bind(event_id)
        .bind(cost)
        .bind(description)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(new_count)
    }
}
