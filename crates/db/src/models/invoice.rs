//! Invoice and invoice item models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shutterdesk_core::types::{BusinessDate, DbId, Timestamp};

/// Invoice row from the `invoices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub user_id: DbId,
    pub client_id: DbId,
    pub event_id: Option<DbId>,
    pub invoice_number: String,
    pub status: String,
    pub issued_date: Option<BusinessDate>,
    pub due_date: Option<BusinessDate>,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// Line item row from the `invoice_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceItem {
    pub id: DbId,
    pub invoice_id: DbId,
    pub description: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub amount: f64,
}

/// Invoice list row, joined with the client's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceSummary {
    pub id: DbId,
    pub client_id: DbId,
    pub event_id: Option<DbId>,
    pub invoice_number: String,
    pub status: String,
    pub issued_date: Option<BusinessDate>,
    pub due_date: Option<BusinessDate>,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub client_name: Option<String>,
}

/// Invoice detail row, joined with the client's contact fields for
/// rendering.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceWithClient {
    pub id: DbId,
    pub client_id: DbId,
    pub event_id: Option<DbId>,
    pub invoice_number: String,
    pub status: String,
    pub issued_date: Option<BusinessDate>,
    pub due_date: Option<BusinessDate>,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub client_address: Option<String>,
}

/// Reduced invoice shape exposed on the public event page. Only
/// non-draft invoices ever surface there.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublicInvoice {
    pub id: DbId,
    pub invoice_number: String,
    pub total_amount: f64,
    pub status: String,
}

/// DTO for one line item at invoice creation. The effective `amount`
/// is computed as `quantity * unit_price` at write time.
#[derive(Debug, Deserialize)]
pub struct CreateInvoiceItem {
    pub description: String,
    pub quantity: Option<i64>,
    pub unit_price: f64,
}

/// DTO for creating an invoice with its items.
#[derive(Debug, Deserialize)]
pub struct CreateInvoice {
    pub client_id: DbId,
    pub event_id: Option<DbId>,
    pub invoice_number: String,
    pub issued_date: BusinessDate,
    pub due_date: BusinessDate,
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<CreateInvoiceItem>,
}

/// DTO for patching an invoice. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateInvoice {
    pub status: Option<String>,
    pub notes: Option<String>,
    pub due_date: Option<BusinessDate>,
}
