//! Image helpers for scanned plant photos.
//!
//! This crate provides:
//! - Format detection from magic bytes
//! - Thumbnail generation (downscale plus JPEG re-encode)
//! - Base64 data-URL encoding, the form photos are stored and sent in

#![warn(missing_docs)]

mod data_url;
mod detect;
mod error;
mod thumbnail;

pub use data_url::to_data_url;
pub use detect::{ImageFormat, detect_format};
pub use error::{ImageError, Result};
pub use thumbnail::{ThumbnailOptions, make_thumbnail, thumbnail_data_url};
