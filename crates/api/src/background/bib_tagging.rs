//! Post-upload bib-number tagging.
//!
//! Runs OCR over the original photo, filters the detected text down to
//! bib-shaped tokens and stores them comma-separated on the photo row.
//! Spawned after the upload response has been sent; nothing here may block
//! or fail the upload itself.

use std::sync::Arc;

use shutterdesk_core::types::DbId;
use shutterdesk_db::repositories::PhotoRepo;
use shutterdesk_db::DbPool;
use shutterdesk_media::{filter_bib_tokens, ImageProcessor, ImageProcessorError, MediaStore};

/// Tag a single uploaded photo with detected bib numbers.
///
/// Loads the original image from the media store, sends it to the OCR
/// collaborator and persists the filtered tokens. Every failure path logs
/// and returns; the photo simply stays untagged.
pub async fn run(
    pool: DbPool,
    store: Arc<dyn MediaStore>,
    processor: Arc<dyn ImageProcessor>,
    photo_id: DbId,
    original_path: String,
    filename: String,
) {
    let bytes = match store.load(&original_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%photo_id, error = %e, "Bib tagging: could not load original");
            return;
        }
    };

    let lines = match processor.read_text(&bytes, &filename).await {
        Ok(lines) => lines,
        Err(ImageProcessorError::Disabled) => {
            tracing::debug!(%photo_id, "Bib tagging: image processor disabled, skipping");
            return;
        }
        Err(e) => {
            tracing::warn!(%photo_id, error = %e, "Bib tagging: OCR failed");
            return;
        }
    };

    let tokens = filter_bib_tokens(&lines);
    if tokens.is_empty() {
        tracing::debug!(%photo_id, "Bib tagging: no bib-shaped tokens detected");
        return;
    }

    let joined = tokens.join(",");
    match PhotoRepo::set_bib_numbers(&pool, photo_id, &joined).await {
        Ok(()) => {
            tracing::info!(%photo_id, bibs = %joined, "Bib tagging complete");
        }
        Err(e) => {
            tracing::warn!(%photo_id, error = %e, "Bib tagging: could not store result");
        }
    }
}
