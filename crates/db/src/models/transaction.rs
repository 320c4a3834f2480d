//! Manual ledger transaction model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shutterdesk_core::types::{BusinessDate, DbId, Timestamp};

/// Manual ledger row from the `transactions` table.
///
/// `tx_type` maps to the `type` column: `Credit` for income, `Debit`
/// for spending.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub user_id: DbId,
    pub date: BusinessDate,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub tx_type: String,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating or replacing a manual transaction.
///
/// Updates are whole-row replacements, so the same DTO serves both.
#[derive(Debug, Deserialize)]
pub struct CreateTransaction {
    pub date: BusinessDate,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
}
