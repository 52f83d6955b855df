use super::with_viewer;
use crate::core::PointerKind;
use crate::dom::{self, Subscriptions};
use crate::viewer::Viewer;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page coordinates of the single active touch, if exactly one finger is down.
#[inline]
fn single_touch(ev: &web::TouchEvent) -> Option<(f64, f64)> {
    let touches = ev.touches();
    if touches.length() != 1 {
        return None;
    }
    touches.get(0).map(|t| (t.page_x() as f64, t.page_y() as f64))
}

pub fn wire_pointer_handlers(
    subs: &mut Subscriptions,
    container: &web::HtmlElement,
    viewer: Weak<RefCell<Viewer>>,
) {
    wire_mouse(subs, container, &viewer);
    wire_touch(subs, container, &viewer);
    wire_click_guard(subs, container);
}

fn wire_mouse(subs: &mut Subscriptions, container: &web::HtmlElement, viewer: &Weak<RefCell<Viewer>>) {
    let v = viewer.clone();
    subs.listen(container, "mousedown", move |ev| {
        let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if dom::is_control_target(ev.target()) {
            return;
        }
        ev.prevent_default();
        let (x, y) = (me.client_x() as f64, me.client_y() as f64);
        with_viewer(&v, |viewer| viewer.begin_drag(PointerKind::Mouse, x, y));
    });

    let v = viewer.clone();
    subs.listen(container, "mousemove", move |ev| {
        let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = (me.client_x() as f64, me.client_y() as f64);
        with_viewer(&v, |viewer| viewer.drag_to(x, y));
    });

    for name in ["mouseup", "mouseleave"] {
        let v = viewer.clone();
        subs.listen(container, name, move |_ev| {
            with_viewer(&v, |viewer| viewer.end_drag());
        });
    }
}

fn wire_touch(subs: &mut Subscriptions, container: &web::HtmlElement, viewer: &Weak<RefCell<Viewer>>) {
    let v = viewer.clone();
    subs.listen_active(container, "touchstart", move |ev| {
        if dom::is_control_target(ev.target()) {
            return;
        }
        let Some((x, y)) = ev.dyn_ref::<web::TouchEvent>().and_then(single_touch) else {
            return;
        };
        ev.prevent_default();
        with_viewer(&v, |viewer| viewer.begin_drag(PointerKind::Touch, x, y));
    });

    let v = viewer.clone();
    subs.listen_active(container, "touchmove", move |ev| {
        if dom::is_control_target(ev.target()) {
            return;
        }
        let Some((x, y)) = ev.dyn_ref::<web::TouchEvent>().and_then(single_touch) else {
            return;
        };
        with_viewer(&v, |viewer| {
            if viewer.is_dragging() {
                ev.prevent_default();
                viewer.drag_to(x, y);
            }
        });
    });

    let v = viewer.clone();
    subs.listen(container, "touchend", move |ev| {
        if dom::is_control_target(ev.target()) {
            return;
        }
        with_viewer(&v, |viewer| viewer.end_drag());
    });
}

/// Swallow clicks on the panorama itself so double-tap zoom and link
/// activation on the surrounding markup do not fire.
fn wire_click_guard(subs: &mut Subscriptions, container: &web::HtmlElement) {
    subs.listen(container, "click", |ev| {
        if !dom::is_control_target(ev.target()) {
            ev.prevent_default();
            ev.stop_propagation();
        }
    });
}
