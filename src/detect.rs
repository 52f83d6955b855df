use crate::constants::{
    DEBUG_RENDERER_EXTENSION, LOSE_CONTEXT_EXTENSION, UNMASKED_RENDERER_WEBGL,
};
use crate::core::capability::{
    detect_touch_form_factor, is_mac_user_agent, Capabilities, ContextInfo,
};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn user_agent() -> String {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

fn has_touch(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &"ontouchstart".into()).unwrap_or(false)
        || window.navigator().max_touch_points() > 0
}

fn unmasked_renderer(gl: &web::WebGlRenderingContext) -> Option<String> {
    gl.get_extension(DEBUG_RENDERER_EXTENSION).ok().flatten()?;
    gl.get_parameter(UNMASKED_RENDERER_WEBGL)
        .ok()
        .and_then(|v| v.as_string())
}

/// Browsers cap live GL contexts per page, so the test context gives its slot back
/// immediately instead of waiting for GC.
fn release(gl: &web::WebGlRenderingContext) {
    if let Ok(Some(ext)) = gl.get_extension(LOSE_CONTEXT_EXTENSION) {
        ext.unchecked_into::<web::WebglLoseContext>().lose_context();
    }
}

fn inspect_context(document: &web::Document) -> ContextInfo {
    let canvas: web::HtmlCanvasElement = match dom::create_element(document, "canvas") {
        Ok(c) => c,
        Err(_) => return ContextInfo::Unavailable,
    };
    let gl = ["webgl", "experimental-webgl"].iter().find_map(|kind| {
        canvas
            .get_context(kind)
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<web::WebGlRenderingContext>().ok())
    });
    let Some(gl) = gl else {
        return ContextInfo::Unavailable;
    };
    let info = ContextInfo::from_renderer(unmasked_renderer(&gl));
    release(&gl);
    info
}

/// Runs once per viewer. Never fails; anything missing reads as "not available".
pub fn capabilities() -> Capabilities {
    let Some(window) = web::window() else {
        return Capabilities::default();
    };
    let ua = user_agent();
    let is_mac_like = is_mac_user_agent(&ua);
    let inner_width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::MAX);
    let is_touch_device = detect_touch_form_factor(&ua, has_touch(&window), inner_width);
    let webgpu = dom::js_get(&window.navigator(), "gpu").is_some();
    let context = window
        .document()
        .map(|d| inspect_context(&d))
        .unwrap_or(ContextInfo::Unavailable);
    if let ContextInfo::Software(renderer) = &context {
        log::debug!("[detect] software renderer detected: {}", renderer);
    }
    let (accelerated_context, hardware_acceleration_available) = context.acceleration(webgpu);
    let caps = Capabilities {
        is_touch_device,
        is_mac_like,
        accelerated_context,
        hardware_acceleration_available,
    };
    log::debug!("[detect] {:?}", caps);
    caps
}
