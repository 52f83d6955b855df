use super::with_viewer;
use crate::constants::KEY_ESCAPE;
use crate::dom::Subscriptions;
use crate::viewer::Viewer;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_escape_key(
    subs: &mut Subscriptions,
    document: &web::Document,
    viewer: Weak<RefCell<Viewer>>,
) {
    subs.listen(document, "keydown", move |ev| {
        let Some(ke) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if ke.key() != KEY_ESCAPE {
            return;
        }
        with_viewer(&viewer, |v| {
            if v.is_fullscreen() {
                v.exit_fullscreen();
            }
        });
    });
}
