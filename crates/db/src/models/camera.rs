//! Camera entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shutterdesk_core::types::{BusinessDate, DbId, Timestamp};

/// Camera body row from the `cameras` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Camera {
    pub id: DbId,
    pub user_id: DbId,
    pub model_name: String,
    pub serial_number: String,
    pub purchase_date: Option<BusinessDate>,
    pub initial_shutter_count: i64,
    pub current_shutter_count: i64,
    pub purchase_price: f64,
    pub max_shutter_life: i64,
    pub created_at: Timestamp,
}

/// DTO for registering a camera body.
#[derive(Debug, Deserialize)]
pub struct CreateCamera {
    pub model_name: String,
    pub serial_number: String,
    pub purchase_date: Option<BusinessDate>,
    pub initial_shutter_count: Option<i64>,
    pub purchase_price: Option<f64>,
    pub max_shutter_life: Option<i64>,
}

/// DTO for updating a camera. All fields are optional.
///
/// The shutter count is deliberately absent: it only moves forward, via
/// usage recording.
#[derive(Debug, Deserialize)]
pub struct UpdateCamera {
    pub model_name: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<BusinessDate>,
    pub purchase_price: Option<f64>,
    pub max_shutter_life: Option<i64>,
}
