//! Read-only queries behind the finance feed and dashboard.

use sqlx::PgPool;

use shutterdesk_core::types::{BusinessDate, DbId};

use crate::models::report::{LedgerEntry, MonthlyTotals};

/// Provides aggregate and merged-feed queries. Nothing here writes.
pub struct ReportRepo;

impl ReportRepo {
    /// Merged finance feed: events as income lines, event costs as
    /// expense lines, manual transactions as themselves. Newest first.
    pub async fn ledger(pool: &PgPool, user_id: DbId) -> Result<Vec<LedgerEntry>, sqlx::Error> {
        sqlx::query_as::<_, LedgerEntry>(
            "SELECT id, event_date AS date, 'Event: ' || name AS description,
                    'Credit' AS entry_type, 'Event Income' AS category,
                    base_price AS amount, status, 'event' AS source
             FROM events WHERE user_id = $1
             UNION ALL
             SELECT c.id, c.created_at::date AS date,
                    c.cost_type || ' - ' || e.name AS description,
                    'Debit' AS entry_type, 'Event Expense' AS category,
                    c.amount, 'completed' AS status, 'expense' AS source
             FROM event_costs c
             JOIN events e ON c.event_id = e.id
             WHERE e.user_id = $1
             UNION ALL
             SELECT id, date, COALESCE(description, '') AS description,
                    type AS entry_type, category, amount,
                    'completed' AS status, 'manual' AS source
             FROM transactions WHERE user_id = $1
             ORDER BY date DESC, id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Revenue, expense and event-count sums for one date window.
    ///
    /// Event costs are attributed to the month of their parent event's
    /// date, not the month the cost row was written.
    pub async fn monthly_totals(
        pool: &PgPool,
        user_id: DbId,
        start: BusinessDate,
        end: BusinessDate,
    ) -> Result<MonthlyTotals, sqlx::Error> {
        sqlx::query_as::<_, MonthlyTotals>(
            "SELECT
                COALESCE((SELECT SUM(base_price) FROM events
                          WHERE user_id = $1 AND event_date >= $2 AND event_date < $3),
                         0) AS revenue_events,
                COALESCE((SELECT SUM(amount) FROM transactions
                          WHERE user_id = $1 AND type = 'Credit'
                            AND date >= $2 AND date < $3),
                         0) AS revenue_transactions,
                COALESCE((SELECT SUM(c.amount) FROM event_costs c
                          JOIN events e ON c.event_id = e.id
                          WHERE e.user_id = $1 AND e.event_date >= $2 AND e.event_date < $3),
                         0) AS expenses_event_costs,
                COALESCE((SELECT SUM(amount) FROM transactions
                          WHERE user_id = $1 AND type = 'Debit'
                            AND date >= $2 AND date < $3),
                         0) AS expenses_transactions,
                (SELECT COUNT(*) FROM events
                 WHERE user_id = $1 AND event_date >= $2 AND event_date < $3) AS event_count",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_one(pool)
        .await
    }
}
