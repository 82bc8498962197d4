//! # Card markup
//!
//! [`render_card`] is the single drawing routine for exported cards. The live
//! preview download and every archived-card download call it with a
//! [`CardView`], so there is exactly one layout to keep in sync with the
//! on-screen preview.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────┐  ← accent band
//! │           [photo]            │  (only when present)
//! │ Name: …                      │
//! │ Roll Number: …               │
//! │ Class & Division: …          │
//! │ Rack Number: …               │
//! │ Bus Route: …                 │
//! │ Allergies: …                 │  (only when non-empty)
//! │           [ QR ]             │
//! └──────────────────────────────┘
//! ```
//!
//! The result is a self-contained SVG document: user text is XML-escaped and
//! the photo stays an inline `data:` URL, so the markup can be handed to a
//! browser `<img>` or to `usvg` unchanged.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::view::CardView;

pub const CARD_WIDTH: u32 = 340;
const PADDING: u32 = 24;
const BAND_HEIGHT: u32 = 10;
const PHOTO_SIZE: u32 = 96;
const LINE_HEIGHT: u32 = 26;
const FONT_SIZE: u32 = 15;
const QR_MARGIN: u32 = 8;

/// A rendered card: SVG markup plus its intrinsic size in CSS pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSvg {
    pub markup: String,
    pub width: u32,
    pub height: u32,
}

impl CardSvg {
    /// `data:image/svg+xml;base64,…` URL of the markup.
    pub fn to_data_url(&self) -> String {
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(self.markup.as_bytes()))
    }
}

pub fn render_card(view: &CardView) -> CardSvg {
    let palette = view.palette();
    let mut body = String::new();
    let mut y = BAND_HEIGHT + PADDING;

    if let Some(photo) = &view.photo {
        let x = (CARD_WIDTH - PHOTO_SIZE) / 2;
        body.push_str(&format!(
            r#"<image x="{x}" y="{y}" width="{PHOTO_SIZE}" height="{PHOTO_SIZE}" preserveAspectRatio="xMidYMid slice" href="{href}"/>"#,
            href = escape(photo),
        ));
        y += PHOTO_SIZE + PADDING / 2;
    }

    for line in &view.lines {
        let baseline = y + FONT_SIZE + (LINE_HEIGHT - FONT_SIZE) / 2;
        body.push_str(&format!(
            r#"<text x="{PADDING}" y="{baseline}" font-family="sans-serif" font-size="{FONT_SIZE}" fill="{fill}"><tspan font-weight="bold">{label}:</tspan> {value}</text>"#,
            fill = palette.text,
            label = escape(line.label),
            value = escape(&line.value),
        ));
        y += LINE_HEIGHT;
    }

    y += PADDING / 2;
    let qr_box = view.qr_size + 2 * QR_MARGIN;
    let qr_x = (CARD_WIDTH.saturating_sub(qr_box)) / 2;
    body.push_str(&format!(
        r##"<rect x="{qr_x}" y="{y}" width="{qr_box}" height="{qr_box}" rx="6" fill="#ffffff"/>"##
    ));
    body.push_str(&view.qr.svg_element(qr_x + QR_MARGIN, y + QR_MARGIN, view.qr_size));
    y += qr_box + PADDING;

    let width = CARD_WIDTH.max(qr_box + 2 * PADDING);
    let height = y;
    let markup = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><rect x="1" y="1" width="{inner_w}" height="{inner_h}" rx="12" fill="{background}" stroke="{border}" stroke-width="2"/><rect x="1" y="1" width="{inner_w}" height="{BAND_HEIGHT}" fill="{accent}"/>{body}</svg>"#,
        inner_w = width - 2,
        inner_h = height - 2,
        background = palette.background,
        border = palette.border,
        accent = palette.accent,
    );

    CardSvg {
        markup,
        width,
        height,
    }
}

/// Escape text for use in XML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
