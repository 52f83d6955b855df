pub mod keyboard;
pub mod pointer;
pub mod viewport;

use crate::viewer::Viewer;
use std::cell::RefCell;
use std::rc::Weak;

pub use keyboard::wire_escape_key;
pub use pointer::wire_pointer_handlers;
pub use viewport::{wire_context_loss, wire_fullscreen_change, wire_resize, wire_visibility};

/// Runs `f` against a live, undisposed viewer; silently does nothing otherwise.
pub fn with_viewer(viewer: &Weak<RefCell<Viewer>>, f: impl FnOnce(&mut Viewer)) {
    let Some(rc) = viewer.upgrade() else {
        return;
    };
    let Ok(mut v) = rc.try_borrow_mut() else {
        return;
    };
    if !v.is_disposed() {
        f(&mut v);
    }
}
