//! Lens entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shutterdesk_core::types::{BusinessDate, DbId, Timestamp};

/// Lens row from the `lenses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lens {
    pub id: DbId,
    pub user_id: DbId,
    pub model_name: String,
    pub serial_number: Option<String>,
    pub purchase_date: Option<BusinessDate>,
    pub purchase_price: f64,
    pub created_at: Timestamp,
}

/// DTO for registering a lens.
#[derive(Debug, Deserialize)]
pub struct CreateLens {
    pub model_name: String,
    pub serial_number: Option<String>,
    pub purchase_date: Option<BusinessDate>,
    pub purchase_price: Option<f64>,
}

/// DTO for updating a lens. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateLens {
    pub model_name: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<BusinessDate>,
    pub purchase_price: Option<f64>,
}
