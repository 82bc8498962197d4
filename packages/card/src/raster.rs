//! # Native rasterization
//!
//! Converts [`CardSvg`] markup into PNG bytes without a browser: the markup is
//! parsed into a `usvg::Tree` (text resolved against the system font database),
//! drawn by `resvg` into a `tiny_skia` pixmap, and encoded with `image`.
//!
//! The font database is built once per process; loading system fonts is the
//! slow part of a first export.

use std::io::Cursor;
use std::sync::{Arc, OnceLock};

use resvg::tiny_skia::{Pixmap, Transform};

use crate::error::CardError;
use crate::svg::CardSvg;

static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();

fn system_fonts() -> Arc<usvg::fontdb::Database> {
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts for card export");
            Arc::new(db)
        })
        .clone()
}

/// Rasterize `card` at `scale` pixels per SVG unit and encode it as PNG.
pub fn render_png(card: &CardSvg, scale: f32) -> Result<Vec<u8>, CardError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(CardError::Raster(format!("invalid scale {scale}")));
    }

    let opts = usvg::Options {
        fontdb: system_fonts(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&card.markup, &opts)?;

    let width = (card.width as f32 * scale).ceil() as u32;
    let height = (card.height as f32 * scale).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| CardError::Raster(format!("cannot allocate {width}x{height} pixmap")))?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let c = pixel.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| CardError::Raster("pixel buffer does not match pixmap size".to_string()))?;

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(img).write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::render_card;
    use crate::view::{CardView, Template};
    use store::{CardDraft, CardId, TextField};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn card_svg() -> CardSvg {
        let mut draft = CardDraft::default();
        draft.set_text(TextField::Name, "Asha Rao".to_string());
        draft.set_text(TextField::RollNumber, "21".to_string());
        draft.set_text(TextField::RackNumber, "14".to_string());
        let view = CardView::derive(&draft.into_record(CardId(1)), Template::Classic).unwrap();
        render_card(&view)
    }

    #[test]
    fn test_renders_png_at_scale() {
        let svg = card_svg();
        let png = render_png(&svg, 2.0).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), svg.width * 2);
        assert_eq!(decoded.height(), svg.height * 2);
    }

    #[test]
    fn test_background_is_card_colour() {
        let png = render_png(&card_svg(), 1.0).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        // inside the border, below the accent band
        let pixel = decoded.get_pixel(20, 30);
        assert_eq!(pixel.0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_rejects_bad_scale() {
        assert!(matches!(render_png(&card_svg(), 0.0), Err(CardError::Raster(_))));
    }
}
