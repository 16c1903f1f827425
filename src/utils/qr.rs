//! QR code rendering to PNG.

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Default square image size in pixels.
pub const DEFAULT_QR_SIZE: u32 = 200;

/// Default encoded text when none is given.
pub const DEFAULT_QR_TEXT: &str = "Hello World";

#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Renders `text` as a QR code PNG at least `size` pixels on each side.
///
/// The image is rounded up to a whole number of pixels per module, quiet zone
/// included, so it may be slightly larger than `size`.
///
/// # Errors
///
/// Fails when the text exceeds QR capacity or PNG encoding fails.
pub fn render_png(text: &str, size: u32) -> Result<Vec<u8>, QrError> {
    let code = QrCode::new(text.as_bytes())?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(size, size)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(png)
}
