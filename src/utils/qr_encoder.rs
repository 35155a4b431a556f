use std::io::Cursor;

use base64::{Engine, engine::general_purpose::STANDARD};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use qrcode::types::QrError;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("payload does not fit in a QR symbol: {0}")]
    Capacity(QrError),
    #[error("failed to render QR image: {0}")]
    Render(#[from] image::ImageError),
}

/// Turns a payload string into an image data URL.
pub trait QrEncoder: Send + Sync {
    fn encode(&self, payload: &str) -> Result<String, EncodeError>;
}

/// Renders a PNG with a quiet zone and returns it as a
/// `data:image/png;base64,` URL.
pub struct PngDataUrlEncoder {
    min_dimension: u32,
}

impl PngDataUrlEncoder {
    pub fn new(min_dimension: u32) -> Self {
        Self { min_dimension }
    }
}

impl QrEncoder for PngDataUrlEncoder {
    fn encode(&self, payload: &str) -> Result<String, EncodeError> {
        let code = QrCode::new(payload.as_bytes()).map_err(EncodeError::Capacity)?;

        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(self.min_dimension, self.min_dimension)
            .quiet_zone(true)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
    }
}
