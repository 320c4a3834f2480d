//! Repository for the `event_costs` table.
//!
//! Cost lines have no owner column of their own; ownership is derived
//! from the parent event, so update and delete join through `events`.

use sqlx::PgPool;

use shutterdesk_core::types::DbId;

use crate::models::event_cost::{CreateEventCost, EventCost, UpdateEventCost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, cost_type, amount, description, \
                       rate_type, unit_price, quantity, created_at";

/// Provides cost-line operations scoped through the parent event.
pub struct EventCostRepo;

impl EventCostRepo {
    /// Insert a cost line. `amount` is the effective charge already
    /// resolved from the rate type by the caller.
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        input: &CreateEventCost,
        amount: f64,
    ) -> Result<EventCost, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_costs \
                (event_id, cost_type, amount, description, rate_type, unit_price, quantity)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'flat'), COALESCE($6, 0), COALESCE($7, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventCost>(&query)
            .bind(event_id)
            .bind(&input.cost_type)
            .bind(amount)
            .bind(&input.description)
            .bind(&input.rate_type)
            .bind(input.unit_price)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// List cost lines for an event, newest first.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<EventCost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM event_costs WHERE event_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, EventCost>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Sum of all cost amounts for an event. Zero when there are none.
    pub async fn sum_for_event(pool: &PgPool, event_id: DbId) -> Result<f64, sqlx::Error> {
        let (total,): (f64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount), 0) FROM event_costs WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(pool)
        .await?;
        Ok(total)
    }

    /// Find a cost line if its parent event belongs to `user_id`.
    pub async fn find(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<EventCost>, sqlx::Error> {
        sqlx::query_as::<_, EventCost>(
            "SELECT c.id, c.event_id, c.cost_type, c.amount, c.description,
                    c.rate_type, c.unit_price, c.quantity, c.created_at
             FROM event_costs c
             JOIN events e ON c.event_id = e.id
             WHERE c.id = $1 AND e.user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Update a cost line if its parent event belongs to `user_id`.
    /// `amount` is the re-resolved effective charge.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateEventCost,
        amount: f64,
    ) -> Result<Option<EventCost>, sqlx::Error> {
        sqlx::query_as::<_, EventCost>(
            "UPDATE event_costs SET
                cost_type = COALESCE($3, cost_type),
                amount = $4,
                description = COALESCE($5, event_costs.description),
                rate_type = COALESCE($6, rate_type),
                unit_price = COALESCE($7, unit_price),
                quantity = COALESCE($8, quantity)
             FROM events e
             WHERE event_costs.id = $1 AND event_costs.event_id = e.id AND e.user_id = $2
             RETURNING event_costs.id, event_costs.event_id, event_costs.cost_type,
                       event_costs.amount, event_costs.description, event_costs.rate_type,
                       event_costs.unit_price, event_costs.quantity, event_costs.created_at",
        )
        .bind(id)
        .bind(user_id)
        .bind(&input.cost_type)
        .bind(amount)
        .bind(&input.description)
        .bind(&input.rate_type)
        .bind(input.unit_price)
        .bind(input.quantity)
        .fetch_optional(pool)
        .await
    }

    /// Delete a cost line if its parent event belongs to `user_id`.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM event_costs USING events e
             WHERE event_costs.id = $1 AND event_costs.event_id = e.id AND e.user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
