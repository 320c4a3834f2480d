//! Event cost entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shutterdesk_core::types::{DbId, Timestamp};

/// Cost line attached to an event, from the `event_costs` table.
///
/// `amount` is always the effective charge. For per-unit costs it is
/// derived from `unit_price * quantity` at write time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventCost {
    pub id: DbId,
    pub event_id: DbId,
    pub cost_type: String,
    pub amount: f64,
    pub description: Option<String>,
    pub rate_type: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub created_at: Timestamp,
}

/// DTO for adding a cost line to an event.
#[derive(Debug, Deserialize)]
pub struct CreateEventCost {
    pub cost_type: String,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub rate_type: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
}

/// DTO for updating a cost line. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateEventCost {
    pub cost_type: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub rate_type: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
}
