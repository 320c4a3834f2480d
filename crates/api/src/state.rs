use std::sync::Arc;

use shutterdesk_media::{DocumentRenderer, ImageProcessor, MediaStore};
use shutterdesk_payments::PaymentGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shutterdesk_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Upload storage for originals and watermarked copies.
    pub media_store: Arc<dyn MediaStore>,
    /// Watermarking and OCR collaborator.
    pub image_processor: Arc<dyn ImageProcessor>,
    /// Invoice PDF collaborator.
    pub document_renderer: Arc<dyn DocumentRenderer>,
    /// Checkout bill collaborator. Holds the only copy of the gateway
    /// credentials.
    pub payment_gateway: Arc<dyn PaymentGateway>,
}
