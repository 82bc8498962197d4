//! Card derivation and rendering shared by every platform.
//!
//! [`view`] turns a stored record into what gets drawn, [`svg`] draws it,
//! [`export`] names the downloads, and `raster` (native only) turns the drawing
//! into PNG bytes.

pub mod error;
pub mod export;
pub mod photo;
pub mod qr;
pub mod svg;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod raster;

pub use error::CardError;
pub use export::{archived_file_name, PREVIEW_FILE_NAME};
pub use qr::QrSymbol;
pub use svg::{render_card, CardSvg};
pub use view::{CardLine, CardView, Palette, Template};
