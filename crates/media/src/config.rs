use std::path::PathBuf;

/// Media configuration loaded from environment variables.
///
/// The sidecar URLs are optional: without an image processor, uploads
/// are stored without a watermarked copy and bib tagging is skipped;
/// without a renderer, invoice PDF requests fail with a server error.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Root directory for stored uploads (default: `uploads`).
    pub upload_root: PathBuf,
    /// Base URL of the image-processing sidecar, if any.
    pub image_processor_url: Option<String>,
    /// Base URL of the document renderer, if any.
    pub document_renderer_url: Option<String>,
}

impl MediaConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default    |
    /// |-------------------------|------------|
    /// | `UPLOAD_DIR`            | `uploads`  |
    /// | `IMAGE_PROCESSOR_URL`   | unset      |
    /// | `DOCUMENT_RENDERER_URL` | unset      |
    pub fn from_env() -> Self {
        let upload_root = std::env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "uploads".into())
            .into();

        let image_processor_url = std::env::var("IMAGE_PROCESSOR_URL")
            .ok()
            .filter(|v| !v.is_empty());

        let document_renderer_url = std::env::var("DOCUMENT_RENDERER_URL")
            .ok()
            .filter(|v| !v.is_empty());

        Self {
            upload_root,
            image_processor_url,
            document_renderer_url,
        }
    }
}
