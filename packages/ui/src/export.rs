//! # Card export
//!
//! Every download, whether of the live preview or of an archived card, starts
//! from a [`CardView`] and goes through [`card::render_card`]. What happens to
//! the markup afterwards depends on the platform:
//!
//! - **Web**: the SVG is loaded into an `<img>`, painted onto an offscreen
//!   `<canvas>`, read back as a PNG data URL, and handed to a temporary
//!   `<a download>` that is clicked.
//! - **Desktop**: the SVG is rasterized in-process by [`card::raster`] and the
//!   PNG is written into the user's download directory.
//!
//! Failures are logged to `tracing` and the activity log. They never reach the
//! form, and nothing is retried.

use card::{CardError, CardSvg, CardView};
use dioxus::prelude::*;

use crate::activity_log::{log_activity, ActivityLog, LogLevel};

/// Export `view` as `file_name` in the background.
pub fn export_card(view: CardView, file_name: String, scale: f32, mut log: Signal<ActivityLog>) {
    spawn(async move {
        let svg = card::render_card(&view);
        match deliver(&svg, &file_name, scale).await {
            Ok(location) => {
                tracing::info!(file = %file_name, %location, "card exported");
                log_activity(&mut log, LogLevel::Success, &format!("Saved {file_name} to {location}"));
            }
            Err(e) => {
                tracing::error!(file = %file_name, "error exporting image: {e}");
                log_activity(&mut log, LogLevel::Error, &format!("Export of {file_name} failed: {e}"));
            }
        }
    });
}

#[cfg(target_arch = "wasm32")]
async fn deliver(svg: &CardSvg, file_name: &str, scale: f32) -> Result<String, CardError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    fn js_err(context: &str) -> impl Fn(wasm_bindgen::JsValue) -> CardError + '_ {
        move |e| CardError::Delivery(format!("{context}: {e:?}"))
    }

    let window = web_sys::window().ok_or_else(|| CardError::Delivery("no browser window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| CardError::Delivery("no document".to_string()))?;

    let img = web_sys::HtmlImageElement::new().map_err(js_err("create image"))?;
    img.set_src(&svg.to_data_url());
    JsFuture::from(img.decode()).await.map_err(js_err("decode card svg"))?;

    let width = (svg.width as f32 * scale).ceil();
    let height = (svg.height as f32 * scale).ceil();
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err("create canvas"))?
        .dyn_into()
        .map_err(|_| CardError::Delivery("canvas element has wrong type".to_string()))?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err("get 2d context"))?
        .ok_or_else(|| CardError::Delivery("2d context unavailable".to_string()))?
        .dyn_into()
        .map_err(|_| CardError::Delivery("2d context has wrong type".to_string()))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, width as f64, height as f64)
        .map_err(js_err("draw card"))?;

    let png_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(js_err("encode png"))?;

    let link: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err("create link"))?
        .dyn_into()
        .map_err(|_| CardError::Delivery("link element has wrong type".to_string()))?;
    link.set_download(file_name);
    link.set_href(&png_url);
    link.click();

    Ok("downloads".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
async fn deliver(svg: &CardSvg, file_name: &str, scale: f32) -> Result<String, CardError> {
    let png = card::raster::render_png(svg, scale)?;

    let dir = dirs::download_dir().unwrap_or_else(crate::storage::data_dir);
    std::fs::create_dir_all(&dir).map_err(|source| CardError::Io {
        path: dir.clone(),
        source,
    })?;
    let path = dir.join(card::export::sanitize_file_name(file_name));
    std::fs::write(&path, png).map_err(|source| CardError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path.display().to_string())
}
