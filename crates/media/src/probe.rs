//! Lightweight image inspection for uploads.

use std::io::Cursor;

use image::ImageReader;

/// Read the pixel dimensions of an encoded image.
///
/// The format is sniffed from the bytes, so this works for any of the
/// enabled codecs. Only the header is decoded. Returns `None` for
/// anything that is not a recognizable image.
pub fn image_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}
