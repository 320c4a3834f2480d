//! Ownership probes for tenant-scoped tables.
//!
//! Every table that carries a `user_id` column gets the same three
//! questions asked of it: "does this row exist for this user", "fetch it
//! if so", "delete it if so". Rather than repeat that SQL in each
//! repository, entities implement [`OwnedEntity`] and the free functions
//! here build the scoped query from the table metadata.
//!
//! A row belonging to another user is indistinguishable from a missing
//! row: all probes answer as if it does not exist.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use shutterdesk_core::types::DbId;

/// Metadata for entities stored in a table with a `user_id` owner column.
pub trait OwnedEntity: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Table name used to build scoped queries.
    const TABLE: &'static str;
    /// Column list returned by [`find_owned`].
    const COLUMNS: &'static str;
    /// Label used in not-found errors, e.g. `"Camera"`.
    const ENTITY: &'static str;
}

/// Fetch a row by id if it belongs to `user_id`.
pub async fn find_owned<E: OwnedEntity>(
    pool: &PgPool,
    id: DbId,
    user_id: DbId,
) -> Result<Option<E>, sqlx::Error> {
    let query = format!(
        "SELECT {} FROM {} WHERE id = $1 AND user_id = $2",
        E::COLUMNS,
        E::TABLE
    );
    sqlx::query_as::<_, E>(&query)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Check whether a row exists and belongs to `user_id`.
pub async fn exists_owned<E: OwnedEntity>(
    pool: &PgPool,
    id: DbId,
    user_id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1 AND user_id = $2)",
        E::TABLE
    );
    let exists: (bool,) = sqlx::query_as(&query)
        .bind(id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(exists.0)
}

/// Delete a row by id if it belongs to `user_id`.
///
/// Returns `true` if a row was deleted.
pub async fn delete_owned<E: OwnedEntity>(
    pool: &PgPool,
    id: DbId,
    user_id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!("DELETE FROM {} WHERE id = $1 AND user_id = $2", E::TABLE);
    let result = sqlx::query(&query)
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
