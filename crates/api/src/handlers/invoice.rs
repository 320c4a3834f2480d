//! Handlers for the `/invoices` resource, including the public PDF link.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use shutterdesk_core::error::CoreError;
use shutterdesk_core::types::DbId;
use shutterdesk_db::models::invoice::{
    CreateInvoice, Invoice, InvoiceItem, InvoiceSummary, InvoiceWithClient, UpdateInvoice,
};
use shutterdesk_db::repositories::InvoiceRepo;
use shutterdesk_media::{DocumentLine, InvoiceDocument};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Currency prefix printed on rendered invoices.
const INVOICE_CURRENCY: &str = "RM";

/// Response for `GET /invoices/{id}`: header row plus line items.
#[derive(Debug, Serialize)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceWithClient,
    pub items: Vec<InvoiceItem>,
}

/// POST /api/v1/invoices
///
/// Creates the invoice and its line items in one transaction. Line amounts
/// and the invoice total are computed server-side from quantity and unit
/// price; the status always starts at `DRAFT`.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateInvoice>,
) -> AppResult<(StatusCode, Json<Invoice>)> {
    let invoice = InvoiceRepo::create_with_items(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

/// GET /api/v1/invoices
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<InvoiceSummary>>> {
    let invoices = InvoiceRepo::list(&state.pool, user.user_id).await?;
    Ok(Json(invoices))
}

/// GET /api/v1/invoices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<InvoiceDetailResponse>> {
    let invoice = InvoiceRepo::find_with_client(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;

    let items = InvoiceRepo::list_items(&state.pool, id).await?;
    Ok(Json(InvoiceDetailResponse { invoice, items }))
}

/// PUT /api/v1/invoices/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInvoice>,
) -> AppResult<Json<Invoice>> {
    let invoice = InvoiceRepo::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    Ok(Json(invoice))
}

/// GET /api/v1/invoices/{id}/pdf
///
/// Unauthenticated so an issued invoice can be shared by link. The PDF is
/// produced by the document-renderer collaborator; rendering failures map
/// to a 500 with the cause logged.
pub async fn public_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let invoice = InvoiceRepo::find_with_client_public(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;

    let items = InvoiceRepo::list_items(&state.pool, id).await?;
    let document = build_document(&invoice, &items);
    let pdf = state.document_renderer.render_invoice(&document).await?;

    let headers = [
        (CONTENT_TYPE, "application/pdf".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=invoice_{}.pdf", invoice.invoice_number),
        ),
    ];
    Ok((headers, pdf))
}

fn build_document(invoice: &InvoiceWithClient, items: &[InvoiceItem]) -> InvoiceDocument {
    InvoiceDocument {
        invoice_number: invoice.invoice_number.clone(),
        status: invoice.status.clone(),
        issued_date: invoice.issued_date.map(|d| d.to_string()),
        due_date: invoice.due_date.map(|d| d.to_string()),
        client_name: invoice.client_name.clone().unwrap_or_default(),
        client_email: invoice.client_email.clone(),
        client_phone: invoice.client_phone.clone(),
        client_address: invoice.client_address.clone(),
        items: items
            .iter()
            .map(|item| DocumentLine {
                description: item.description.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                amount: item.amount,
            })
            .collect(),
        total_amount: invoice.total_amount,
        notes: invoice.notes.clone(),
        currency: INVOICE_CURRENCY.to_string(),
    }
}
