//! Base64 data URLs.
//!
//! Photos travel to the identification service and into the collection
//! file as `data:` URLs, so one string carries both the bytes and their
//! MIME type.

use crate::detect::ImageFormat;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encode image bytes as a `data:` URL with the format's MIME type.
#[must_use]
pub fn to_data_url(format: ImageFormat, data: &[u8]) -> String {
    format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_prefix() {
        let url = to_data_url(ImageFormat::Jpeg, &[1, 2, 3]);
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_data_url_payload_decodes() {
        let payload = b"plant bytes";
        let url = to_data_url(ImageFormat::Png, payload);

        let encoded = url.strip_prefix("data:image/png;base64,").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(to_data_url(ImageFormat::Gif, &[]), "data:image/gif;base64,");
    }
}
