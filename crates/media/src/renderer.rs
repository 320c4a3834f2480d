//! Document-rendering sidecar client.
//!
//! The sidecar turns an [`InvoiceDocument`] into a PDF. It is the
//! same deployment shape as the image processor: an optional HTTP
//! service, with [`NullRenderer`] standing in when unconfigured.

use async_trait::async_trait;
use serde::Serialize;

/// One line item on a rendered invoice.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentLine {
    pub description: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub amount: f64,
}

/// Everything the renderer needs to lay out an invoice.
///
/// Dates arrive pre-formatted; the renderer prints them verbatim.
/// `currency` is the symbol printed before every amount.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDocument {
    pub invoice_number: String,
    pub status: String,
    pub issued_date: Option<String>,
    pub due_date: Option<String>,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub client_address: Option<String>,
    pub items: Vec<DocumentLine>,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub currency: String,
}

/// Errors from the document-rendering sidecar.
#[derive(Debug, thiserror::Error)]
pub enum DocumentRendererError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The sidecar returned a non-2xx status code.
    #[error("document renderer error ({status}): {body}")]
    Api { status: u16, body: String },

    /// No sidecar is configured.
    #[error("document renderer is not configured")]
    Disabled,
}

/// PDF generation for invoices.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render_invoice(
        &self,
        document: &InvoiceDocument,
    ) -> Result<Vec<u8>, DocumentRendererError>;
}

/// HTTP client for the document-rendering sidecar.
pub struct SidecarRenderer {
    client: reqwest::Client,
    base_url: String,
}

impl SidecarRenderer {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, DocumentRendererError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DocumentRendererError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl DocumentRenderer for SidecarRenderer {
    async fn render_invoice(
        &self,
        document: &InvoiceDocument,
    ) -> Result<Vec<u8>, DocumentRendererError> {
        tracing::debug!(invoice_number = %document.invoice_number, "rendering invoice PDF");
        let response = self
            .client
            .post(format!("{}/render/invoice", self.base_url))
            .json(document)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Renderer used when no sidecar is configured. Every call reports
/// [`DocumentRendererError::Disabled`].
pub struct NullRenderer;

#[async_trait]
impl DocumentRenderer for NullRenderer {
    async fn render_invoice(
        &self,
        _: &InvoiceDocument,
    ) -> Result<Vec<u8>, DocumentRendererError> {
        Err(DocumentRendererError::Disabled)
    }
}
