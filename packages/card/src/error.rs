use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while deriving, rendering, or exporting a card.
#[derive(Debug, Error)]
pub enum CardError {
    /// The sanitized card could not be serialized into a QR payload.
    #[error("failed to build QR payload: {0}")]
    Payload(#[from] store::StoreError),

    /// The payload does not fit into a QR symbol.
    #[error("failed to encode QR symbol: {0}")]
    Qr(#[from] qrcode::types::QrError),

    /// The card markup could not be parsed for rasterization.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to parse card svg: {0}")]
    Svg(#[from] usvg::Error),

    /// Rasterization produced no usable pixels.
    #[error("failed to rasterize card: {0}")]
    Raster(String),

    /// The raster could not be encoded as PNG.
    #[error("failed to encode png: {0}")]
    Encode(#[from] image::ImageError),

    /// The exported file could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The browser refused part of the download flow.
    #[error("browser export failed: {0}")]
    Delivery(String),
}
