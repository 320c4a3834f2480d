//! Image-processing sidecar client: watermarking and OCR.
//!
//! The sidecar exposes two endpoints, both taking the image as a
//! multipart upload:
//!
//! - `POST /watermark` returns the watermarked image bytes
//! - `POST /ocr` returns a JSON array of recognized text lines
//!
//! [`NullProcessor`] stands in when no sidecar is configured; callers
//! treat its `Disabled` error as "skip this step".

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// One recognized text line with the recognizer's confidence in `0..=1`.
#[derive(Debug, Clone, Deserialize)]
pub struct OcrLine {
    pub text: String,
    pub confidence: f64,
}

/// Errors from the image-processing sidecar.
#[derive(Debug, thiserror::Error)]
pub enum ImageProcessorError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The sidecar returned a non-2xx status code.
    #[error("image processor error ({status}): {body}")]
    Api { status: u16, body: String },

    /// No sidecar is configured.
    #[error("image processor is not configured")]
    Disabled,
}

/// Watermarking and text recognition over raw image bytes.
#[async_trait]
pub trait ImageProcessor: Send + Sync {
    /// Produce a watermarked copy of `bytes`.
    async fn watermark(
        &self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<Vec<u8>, ImageProcessorError>;

    /// Recognize text lines in `bytes`.
    async fn read_text(
        &self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<Vec<OcrLine>, ImageProcessorError>;
}

/// HTTP client for the image-processing sidecar.
pub struct SidecarProcessor {
    client: reqwest::Client,
    base_url: String,
}

impl SidecarProcessor {
    /// Create a client for a sidecar at `base_url`, e.g.
    /// `http://localhost:7700`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn image_form(bytes: &[u8], filename: &str) -> Form {
        Form::new().part(
            "file",
            Part::bytes(bytes.to_vec()).file_name(filename.to_string()),
        )
    }

    /// Ensure the response has a success status code, or surface the
    /// status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ImageProcessorError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ImageProcessorError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ImageProcessor for SidecarProcessor {
    async fn watermark(
        &self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<Vec<u8>, ImageProcessorError> {
        tracing::debug!(filename, size = bytes.len(), "watermarking image");
        let response = self
            .client
            .post(format!("{}/watermark", self.base_url))
            .multipart(Self::image_form(bytes, filename))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn read_text(
        &self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<Vec<OcrLine>, ImageProcessorError> {
        tracing::debug!(filename, size = bytes.len(), "running OCR");
        let response = self
            .client
            .post(format!("{}/ocr", self.base_url))
            .multipart(Self::image_form(bytes, filename))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<Vec<OcrLine>>().await?)
    }
}

/// Processor used when no sidecar is configured. Every call reports
/// [`ImageProcessorError::Disabled`].
pub struct NullProcessor;

#[async_trait]
impl ImageProcessor for NullProcessor {
    async fn watermark(&self, _: &[u8], _: &str) -> Result<Vec<u8>, ImageProcessorError> {
        Err(ImageProcessorError::Disabled)
    }

    async fn read_text(&self, _: &[u8], _: &str) -> Result<Vec<OcrLine>, ImageProcessorError> {
        Err(ImageProcessorError::Disabled)
    }
}
