//! Album entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shutterdesk_core::types::{DbId, Timestamp};

/// Album row from the `albums` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Album {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating an album.
#[derive(Debug, Deserialize)]
pub struct CreateAlbum {
    pub name: String,
    pub description: Option<String>,
}
