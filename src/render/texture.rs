use crate::core::error::ViewerError;
use crate::core::projection::{fit_within, Panorama};
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch the image through the browser's loader. Cross-origin images must be
/// served with CORS headers, otherwise the pixel readback below is refused.
pub async fn load_image(url: &str) -> Result<web::HtmlImageElement, ViewerError> {
    let img = web::HtmlImageElement::new()
        .map_err(|e| ViewerError::ImageLoad(format!("{:?}", e)))?;
    img.set_cross_origin(Some("anonymous"));
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    let outcome = JsFuture::from(loaded).await;
    img.set_onload(None);
    img.set_onerror(None);
    outcome.map_err(|_| ViewerError::ImageLoad(url.to_string()))?;
    Ok(img)
}

/// Rasterize the loaded image once into RGBA, scaled down to `max_dim` if needed.
pub fn decode_panorama(
    document: &web::Document,
    img: &web::HtmlImageElement,
    max_dim: u32,
) -> Result<Panorama, ViewerError> {
    let (w, h) = fit_within(img.natural_width(), img.natural_height(), max_dim);
    if img.natural_width() == 0 || img.natural_height() == 0 {
        return Err(ViewerError::InvalidImage("image has no pixels".into()));
    }
    let invalid = |e: wasm_bindgen::JsValue| ViewerError::InvalidImage(format!("{:?}", e));
    let canvas: web::HtmlCanvasElement = dom::create_element(document, "canvas")
        .map_err(|e| ViewerError::InvalidImage(e.to_string()))?;
    canvas.set_width(w);
    canvas.set_height(h);
    let ctx = canvas
        .get_context("2d")
        .map_err(invalid)?
        .ok_or_else(|| ViewerError::InvalidImage("no 2d context for decode".into()))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| ViewerError::InvalidImage("unexpected 2d context type".into()))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w as f64, h as f64)
        .map_err(invalid)?;
    // Throws for a tainted canvas, i.e. a cross-origin image without CORS.
    let data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(|e| ViewerError::ImageLoad(format!("pixel readback refused: {:?}", e)))?;
    Panorama::from_rgba(w, h, data.data().0)
}
