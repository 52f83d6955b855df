use super::with_viewer;
use crate::core::fullscreen::CHANGE_EVENTS;
use crate::core::state::visibility_reached;
use crate::dom::{self, Subscriptions};
use crate::fullscreen::platform_is_fullscreen;
use crate::viewer::Viewer;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn wire_resize(subs: &mut Subscriptions, window: &web::Window, viewer: Weak<RefCell<Viewer>>) {
    subs.listen(window, "resize", move |_ev| {
        with_viewer(&viewer, |v| v.resize());
    });
}

/// Keeps this viewer's fullscreen session in step with the browser, across
/// the vendor-prefixed change events.
pub fn wire_fullscreen_change(
    subs: &mut Subscriptions,
    document: &web::Document,
    viewer: Weak<RefCell<Viewer>>,
) {
    for name in CHANGE_EVENTS {
        let v = viewer.clone();
        let doc = document.clone();
        subs.listen(document, name, move |_ev| {
            let platform = platform_is_fullscreen(&doc);
            with_viewer(&v, |viewer| viewer.on_platform_fullscreen(platform));
        });
    }
}

pub fn wire_context_loss(
    subs: &mut Subscriptions,
    canvas: &web::HtmlCanvasElement,
    viewer: Weak<RefCell<Viewer>>,
) {
    let v = viewer.clone();
    subs.listen(canvas, "webglcontextlost", move |ev| {
        // Default handling would make the context unrestorable.
        ev.prevent_default();
        with_viewer(&v, |viewer| viewer.on_context_lost());
    });
    subs.listen(canvas, "webglcontextrestored", move |_ev| {
        with_viewer(&viewer, |v| v.on_context_restored());
    });
}

pub type VisibilityCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Observe `container` and flip the viewer active/inactive around `threshold`.
pub fn wire_visibility(
    container: &web::HtmlElement,
    threshold: f64,
    viewer: Weak<RefCell<Viewer>>,
) -> anyhow::Result<(web::IntersectionObserver, VisibilityCallback)> {
    let callback: VisibilityCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            // Only the most recent entry reflects the current state.
            let Some(entry) = entries
                .iter()
                .last()
                .and_then(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
            else {
                return;
            };
            let visible =
                visibility_reached(entry.intersection_ratio(), entry.is_intersecting(), threshold);
            with_viewer(&viewer, |v| v.set_visible(visible));
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom::js_err)?;
    observer.observe(container);
    Ok((observer, callback))
}
