//! QR symbols for card payloads, always at the low error-correction level.

use qrcode::{Color, EcLevel, QrCode};

use crate::error::CardError;

/// Module matrix of an encoded QR symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrSymbol {
    width: usize,
    dark: Vec<bool>,
}

impl QrSymbol {
    pub fn encode(payload: &str) -> Result<Self, CardError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)?;
        let dark = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        Ok(Self {
            width: code.width(),
            dark,
        })
    }

    /// Modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.dark[y * self.width + x]
    }

    /// Nested `<svg>` element drawing the symbol into a `size`-pixel square at (`x`, `y`).
    pub fn svg_element(&self, x: u32, y: u32, size: u32) -> String {
        format!(
            r##"<svg x="{x}" y="{y}" width="{size}" height="{size}" viewBox="0 0 {w} {w}" shape-rendering="crispEdges"><rect width="{w}" height="{w}" fill="#ffffff"/><path fill="#000000" d="{d}"/></svg>"##,
            w = self.width,
            d = self.path_data(),
        )
    }

    /// Standalone SVG document for embedding in HTML.
    pub fn to_svg(&self, size: u32) -> String {
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {w} {w}" shape-rendering="crispEdges"><rect width="{w}" height="{w}" fill="#ffffff"/><path fill="#000000" d="{d}"/></svg>"##,
            w = self.width,
            d = self.path_data(),
        )
    }

    fn path_data(&self) -> String {
        let mut d = String::new();
        for y in 0..self.width {
            for x in 0..self.width {
                if self.is_dark(x, y) {
                    d.push_str(&format!("M{x} {y}h1v1h-1z"));
                }
            }
        }
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_payload_fits_version_one() {
        let symbol = QrSymbol::encode("hello").unwrap();
        assert_eq!(symbol.width(), 21);
        // finder pattern corners are dark
        assert!(symbol.is_dark(0, 0));
        assert!(symbol.is_dark(20, 0));
        assert!(symbol.is_dark(0, 20));
    }

    #[test]
    fn test_svg_is_scaled_to_requested_size() {
        let symbol = QrSymbol::encode("hello").unwrap();
        let svg = symbol.to_svg(128);
        assert!(svg.starts_with("<svg xmlns="));
        assert!(svg.contains(r#"width="128" height="128""#));
        assert!(svg.contains(r#"viewBox="0 0 21 21""#));
        assert!(svg.contains("M0 0h1v1h-1z"));

        let nested = symbol.svg_element(10, 20, 64);
        assert!(nested.starts_with(r#"<svg x="10" y="20" width="64""#));
    }

    #[test]
    fn test_oversized_payload_is_an_error() {
        let payload = "x".repeat(8_000);
        assert!(matches!(QrSymbol::encode(&payload), Err(CardError::Qr(_))));
    }
}
