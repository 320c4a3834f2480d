//! Media handling: upload storage, the image-processing sidecar
//! (watermarking and bib OCR), the document renderer, and small pure
//! helpers over image bytes.

pub mod bib;
pub mod config;
pub mod probe;
pub mod processor;
pub mod renderer;
pub mod store;

pub use bib::filter_bib_tokens;
pub use config::MediaConfig;
pub use probe::image_dimensions;
pub use processor::{ImageProcessor, ImageProcessorError, NullProcessor, OcrLine, SidecarProcessor};
pub use renderer::{
    DocumentLine, DocumentRenderer, DocumentRendererError, InvoiceDocument, NullRenderer,
    SidecarRenderer,
};
pub use store::{LocalMediaStore, MediaStore, MediaStoreError};
