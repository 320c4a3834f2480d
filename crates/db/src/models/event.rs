//! Event entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shutterdesk_core::types::{BusinessDate, DbId, Timestamp};

/// Shoot/booking row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub event_date: BusinessDate,
    pub description: Option<String>,
    pub base_price: f64,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating an event. New events always start as `planned`.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub event_date: BusinessDate,
    pub description: Option<String>,
    pub base_price: Option<f64>,
}

/// DTO for the status-only patch.
#[derive(Debug, Deserialize)]
pub struct UpdateEventStatus {
    pub status: String,
}

/// DTO for the base-price-only patch.
#[derive(Debug, Deserialize)]
pub struct UpdateEventBasePrice {
    pub base_price: f64,
}
