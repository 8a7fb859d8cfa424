use chrono::{DateTime, Utc};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

/// One decoded camera frame.
///
/// Exists only for the duration of a single classification call; frames are
/// never retained or buffered across messages.
#[derive(Debug, Clone)]
pub struct Frame {
    pub pixels: RgbImage,
    pub width: u32,
    pub height: u32,
    pub received_at: DateTime<Utc>,
}

impl Frame {
    pub fn from_pixels(pixels: RgbImage, received_at: DateTime<Utc>) -> Self {
        let width = pixels.width();
        let height = pixels.height();
        Self {
            pixels,
            width,
            height,
            received_at,
        }
    }

    /// Re-encodes the pixel buffer as PNG, the format used to hand frames to
    /// the external analyzer process.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut cursor = Cursor::new(Vec::new());
        self.pixels.write_to(&mut cursor, ImageFormat::Png)?;
        Ok(cursor.into_inner())
    }
}
