//! Repository for the `invoices` and `invoice_items` tables.

use sqlx::PgPool;

use shutterdesk_core::types::DbId;

use crate::models::invoice::{
    CreateInvoice, Invoice, InvoiceItem, InvoiceSummary, InvoiceWithClient, PublicInvoice,
    UpdateInvoice,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, client_id, event_id, invoice_number, status, \
                       issued_date, due_date, total_amount, notes, created_at";

/// Prefixed columns for queries joining `clients`.
const JOINED_COLUMNS: &str =
    "i.id, i.client_id, i.event_id, i.invoice_number, i.status, i.issued_date, \
     i.due_date, i.total_amount, i.notes, i.created_at";

/// Provides invoice operations, always writing items together with
/// their invoice.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Create an invoice and its line items in one transaction.
    ///
    /// Each item's effective amount is `quantity * unit_price`; the
    /// invoice total is the sum of those amounts. New invoices always
    /// start as `DRAFT`.
    pub async fn create_with_items(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateInvoice,
    ) -> Result<Invoice, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let amounts: Vec<f64> = input
            .items
            .iter()
            .map(|item| item.quantity.unwrap_or(1) as f64 * item.unit_price)
            .collect();
        let total_amount: f64 = amounts.iter().sum();

        let insert_invoice = format!(
            "INSERT INTO invoices \
                (user_id, client_id, event_id, invoice_number, status, \
                 issued_date, due_date, total_amount, notes)
             VALUES ($1, $2, $3, $4, 'DRAFT', $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let invoice = sqlx::query_as::<_, Invoice>(&insert_invoice)
            .bind(user_id)
            .bind(input.client_id)
            .bind(input.event_id)
            .bind(&input.invoice_number)
            .bind(input.issued_date)
            .bind(input.due_date)
            .bind(total_amount)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        for (item, amount) in input.items.iter().zip(amounts) {
            sqlx::query(
                "INSERT INTO invoice_items (invoice_id, description, quantity, unit_price, amount)
                 VALUES ($1, $2, COALESCE($3, 1), $4, $5)",
            )
            .bind(invoice.id)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(amount)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(invoice)
    }

    /// List the user's invoices with client names, newest first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<InvoiceSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}, c.name AS client_name
             FROM invoices i
             LEFT JOIN clients c ON i.client_id = c.id
             WHERE i.user_id = $1
             ORDER BY i.created_at DESC"
        );
        sqlx::query_as::<_, InvoiceSummary>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find an invoice with client contact fields, scoped to the owner.
    pub async fn find_with_client(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<InvoiceWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}, c.name AS client_name, c.email AS client_email, \
                    c.phone AS client_phone, c.address AS client_address
             FROM invoices i
             LEFT JOIN clients c ON i.client_id = c.id
             WHERE i.id = $1 AND i.user_id = $2"
        );
        sqlx::query_as::<_, InvoiceWithClient>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an invoice with client contact fields, with no tenant
    /// check. Backs the shareable PDF link.
    pub async fn find_with_client_public(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InvoiceWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}, c.name AS client_name, c.email AS client_email, \
                    c.phone AS client_phone, c.address AS client_address
             FROM invoices i
             LEFT JOIN clients c ON i.client_id = c.id
             WHERE i.id = $1"
        );
        sqlx::query_as::<_, InvoiceWithClient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an invoice's line items.
    pub async fn list_items(
        pool: &PgPool,
        invoice_id: DbId,
    ) -> Result<Vec<InvoiceItem>, sqlx::Error> {
        sqlx::query_as::<_, InvoiceItem>(
            "SELECT id, invoice_id, description, quantity, unit_price, amount
             FROM invoice_items WHERE invoice_id = $1",
        )
        .bind(invoice_id)
        .fetch_all(pool)
        .await
    }

    /// Patch an invoice. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices SET
                status = COALESCE($3, status),
                notes = COALESCE($4, notes),
                due_date = COALESCE($5, due_date)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.status)
            .bind(&input.notes)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Non-draft invoices attached to an event, for the public page.
    pub async fn non_draft_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<PublicInvoice>, sqlx::Error> {
        sqlx::query_as::<_, PublicInvoice>(
            "SELECT id, invoice_number, total_amount, status
             FROM invoices
             WHERE event_id = $1 AND status != 'DRAFT'",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }
}
