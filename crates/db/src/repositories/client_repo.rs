//! Repository for the `clients` table.

use sqlx::PgPool;

use shutterdesk_core::types::DbId;

use crate::models::client::{Client, CreateClient, UpdateClient};
use crate::tenant::{self, OwnedEntity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, email, phone, address, notes, created_at";

impl OwnedEntity for Client {
    const TABLE: &'static str = "clients";
    const COLUMNS: &'static str = COLUMNS;
    const ENTITY: &'static str = "Client";
}

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Create a client.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateClient,
    ) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (user_id, name, email, phone, address, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a client if it belongs to `user_id`.
    pub async fn find(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Client>, sqlx::Error> {
        tenant::find_owned::<Client>(pool, id, user_id).await
    }

    /// List the user's clients, most recently added first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Client>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM clients WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Client>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a client. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = COALESCE($3, name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                address = COALESCE($6, address),
                notes = COALESCE($7, notes)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client if it belongs to `user_id`.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        tenant::delete_owned::<Client>(pool, id, user_id).await
    }
}
