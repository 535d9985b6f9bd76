//! Thumbnail generation for collection cards.

use crate::data_url::to_data_url;
use crate::detect::ImageFormat;
use crate::error::Result;
use image::ImageOutputFormat;
use image::imageops::FilterType;
use std::io::Cursor;

/// Options for thumbnail generation.
#[derive(Debug, Clone)]
pub struct ThumbnailOptions {
    /// Maximum width in pixels (height follows the aspect ratio)
    pub max_width: u32,
    /// JPEG quality (1-100)
    pub quality: u8,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            max_width: 400,
            quality: 80,
        }
    }
}

/// Downscale a photo to at most `max_width` and re-encode as JPEG.
///
/// Images already at or below the target width keep their dimensions
/// and are only re-encoded. Output is always JPEG regardless of the
/// input format; thumbnails exist to keep the collection file small.
pub fn make_thumbnail(data: &[u8], options: &ThumbnailOptions) -> Result<Vec<u8>> {
    let img = image::load_from_memory(data)?;

    let (width, height) = scaled_dimensions(img.width(), img.height(), options.max_width);
    let resized = if width == img.width() {
        img
    } else {
        img.resize(width, height, FilterType::Lanczos3)
    };

    let mut buffer = Cursor::new(Vec::new());
    resized.write_to(&mut buffer, ImageOutputFormat::Jpeg(options.quality))?;
    Ok(buffer.into_inner())
}

/// Thumbnail as a JPEG data URL, the form persisted on plant records.
pub fn thumbnail_data_url(data: &[u8], options: &ThumbnailOptions) -> Result<String> {
    let jpeg = make_thumbnail(data, options)?;
    Ok(to_data_url(ImageFormat::Jpeg, &jpeg))
}

/// Width-capped dimensions preserving the aspect ratio. Never upscales.
fn scaled_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if max_width == 0 || width <= max_width {
        return (width, height);
    }

    let ratio = f64::from(max_width) / f64::from(width);
    let new_height = (f64::from(height) * ratio).round() as u32;

    (max_width, new_height.max(1))
}
