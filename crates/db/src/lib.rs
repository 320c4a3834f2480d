//! Database access layer: connection pool, migrations, models and
//! repositories.
//!
//! Repositories are zero-sized structs with async methods that take
//! `&PgPool` as their first argument. Tenant-owned tables are scoped by
//! `user_id` in every query that touches them; the [`tenant`] module
//! provides the shared ownership probes.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod tenant;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from the crate-local `migrations/` dir.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
