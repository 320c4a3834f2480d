//! Read models for the finance feed and dashboard aggregates.

use serde::Serialize;
use sqlx::FromRow;

use shutterdesk_core::types::{BusinessDate, DbId};

/// One line in the merged finance feed.
///
/// Rows come from three sources: events (as `Credit` income lines),
/// event costs (as `Debit` lines) and manual transactions.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LedgerEntry {
    pub id: DbId,
    pub date: BusinessDate,
    pub description: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub category: String,
    pub amount: f64,
    pub status: String,
    pub source: String,
}

/// Raw monthly sums behind the dashboard summary.
///
/// Revenue and expense figures are split by source so the caller can
/// combine them however the report needs.
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyTotals {
    pub revenue_events: f64,
    pub revenue_transactions: f64,
    pub expenses_event_costs: f64,
    pub expenses_transactions: f64,
    pub event_count: i64,
}
