//! Repository for the `transactions` table (manual ledger entries).

use sqlx::PgPool;

use shutterdesk_core::types::DbId;

use crate::models::transaction::{CreateTransaction, Transaction};
use crate::tenant::{self, OwnedEntity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, date, type, category, amount, description, created_at";

impl OwnedEntity for Transaction {
    const TABLE: &'static str = "transactions";
    const COLUMNS: &'static str = COLUMNS;
    const ENTITY: &'static str = "Transaction";
}

/// Provides CRUD operations for manual ledger entries.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a manual transaction.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions (user_id, date, type, category, amount, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .bind(input.date)
            .bind(&input.tx_type)
            .bind(&input.category)
            .bind(input.amount)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List the user's manual transactions, newest date first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Transaction>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM transactions WHERE user_id = $1 ORDER BY date DESC");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a transaction's fields wholesale.
    ///
    /// Returns `None` if the row does not exist or belongs to a
    /// different user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &CreateTransaction,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!(
            "UPDATE transactions
             SET date = $3, type = $4, category = $5, amount = $6, description = $7
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.date)
            .bind(&input.tx_type)
            .bind(&input.category)
            .bind(input.amount)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a transaction if it belongs to `user_id`.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        tenant::delete_owned::<Transaction>(pool, id, user_id).await
    }
}
