//! Album pricing tier model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shutterdesk_core::types::{DbId, Timestamp};

/// Bundle pricing tier row from the `album_pricing_tiers` table.
///
/// A tier says "any `quantity` photos from this album cost `price`".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PricingTier {
    pub id: DbId,
    pub album_id: DbId,
    pub quantity: i64,
    pub price: f64,
    pub created_at: Timestamp,
}

/// DTO for one tier in a replace-the-schedule request.
#[derive(Debug, Deserialize)]
pub struct SaveTier {
    pub quantity: i64,
    pub price: f64,
}
