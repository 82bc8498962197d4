//! Photo uploads become inline `data:` URLs so a card stays self-contained.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const FALLBACK_MIME: &str = "application/octet-stream";

/// MIME type sniffed from the file's leading bytes.
pub fn mime_type(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

/// `data:<mime>;base64,<payload>` for the uploaded bytes. Empty files give `None`.
pub fn data_url(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    Some(format!("data:{};base64,{}", mime_type(bytes), STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_png_is_recognised() {
        assert_eq!(mime_type(&PNG_SIGNATURE), "image/png");
        let url = data_url(&PNG_SIGNATURE).unwrap();
        assert_eq!(url, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_unknown_bytes_fall_back() {
        assert_eq!(mime_type(b"plain text"), FALLBACK_MIME);
        assert!(data_url(b"plain text").unwrap().starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_empty_file_has_no_url() {
        assert_eq!(data_url(&[]), None);
    }
}
