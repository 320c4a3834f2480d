//! Repository for the `events` table.

use sqlx::PgPool;

use shutterdesk_core::types::DbId;

use crate::models::event::{CreateEvent, Event, UpdateEventBasePrice, UpdateEventStatus};
use crate::tenant::{self, OwnedEntity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, name, event_date, description, base_price, status, created_at";

impl OwnedEntity for Event {
    const TABLE: &'static str = "events";
    const COLUMNS: &'static str = COLUMNS;
    const ENTITY: &'static str = "Event";
}

/// Provides CRUD and targeted patches for events.
pub struct EventRepo;

impl EventRepo {
    /// Create an event. Status always starts as `planned`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateEvent,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (user_id, name, event_date, description, base_price, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), 'planned')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.event_date)
            .bind(&input.description)
            .bind(input.base_price)
            .fetch_one(pool)
            .await
    }

    /// Find an event if it belongs to `user_id`.
    pub async fn find(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Event>, sqlx::Error> {
        tenant::find_owned::<Event>(pool, id, user_id).await
    }

    /// Find an event with no tenant check, for the public event page.
    pub async fn find_public(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check that an event exists and belongs to `user_id`.
    pub async fn exists(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        tenant::exists_owned::<Event>(pool, id, user_id).await
    }

    /// List the user's events, upcoming dates first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Event>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM events WHERE user_id = $1 ORDER BY event_date DESC");
        sqlx::query_as::<_, Event>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Set the event's status.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateEventStatus,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET status = $3 WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Set the event's base price.
    pub async fn update_base_price(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateEventBasePrice,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET base_price = $3 WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.base_price)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event if it belongs to `user_id`. Cost lines cascade.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        tenant::delete_owned::<Event>(pool, id, user_id).await
    }
}
