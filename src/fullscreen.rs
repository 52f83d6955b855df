use crate::constants::{CLASS_OVERLAY, VIEWPORT_META_SELECTOR};
use crate::core::constants::PSEUDO_FULLSCREEN_SCROLL_DELAY_MS;
use crate::core::fullscreen::{
    exit_methods, request_methods, request_settled, sync_with_platform, PlatformSync,
    RequestSettled, StyleSnapshot, CONTAINER_STYLE, ELEMENT_PROPERTIES, OVERLAY_CSS,
    PSEUDO_VIEWPORT_CONTENT,
};
use crate::dom::{self, Subscriptions};
use crate::events::with_viewer;
use crate::viewer::Viewer;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Whether the browser currently reports any element as fullscreen.
pub fn platform_is_fullscreen(document: &web::Document) -> bool {
    ELEMENT_PROPERTIES
        .iter()
        .any(|p| dom::js_get(document, p).is_some())
}

/// Calls the first method in `names` that exists on `target` and does not throw.
fn call_first(target: &JsValue, names: &[&str]) -> Option<JsValue> {
    names.iter().find_map(|name| {
        let f = dom::js_get(target, name)?.dyn_into::<js_sys::Function>().ok()?;
        match f.call0(target) {
            Ok(ret) => {
                log::debug!("[fullscreen] {} accepted", name);
                Some(ret)
            }
            Err(e) => {
                log::debug!("[fullscreen] {} threw: {:?}", name, e);
                None
            }
        }
    })
}

/// Everything a fullscreen entry changed, kept so exit can undo it exactly.
pub struct FullscreenSession {
    document: web::Document,
    container: web::HtmlElement,
    overlay: web::HtmlElement,
    parent: Option<web::Node>,
    next_sibling: Option<web::Node>,
    style: StyleSnapshot,
    body_overflow: String,
    viewport_restore: Option<(web::Element, Option<String>)>,
    platform_engaged: bool,
    /// Shared with a pending platform request; cleared on exit.
    open: Rc<Cell<bool>>,
    is_mac: bool,
    subs: Subscriptions,
}

impl FullscreenSession {
    pub fn enter(
        document: &web::Document,
        container: &web::HtmlElement,
        is_mac: bool,
        viewer: Weak<RefCell<Viewer>>,
    ) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
        let css = container.style();
        let style = StyleSnapshot::capture(|p| css.get_property_value(p).unwrap_or_default());
        let parent = container.parent_node();
        let next_sibling = container.next_sibling();

        let overlay: web::HtmlElement = dom::create_element(document, "div")?;
        overlay.set_class_name(CLASS_OVERLAY);
        _ = overlay.set_attribute("style", OVERLAY_CSS);
        for (property, value) in CONTAINER_STYLE {
            dom::set_style(container, property, value);
        }
        overlay.append_child(container).map_err(dom::js_err)?;
        body.append_child(&overlay).map_err(dom::js_err)?;

        let mut session = Self {
            document: document.clone(),
            container: container.clone(),
            overlay,
            parent,
            next_sibling,
            style,
            body_overflow: body.style().get_property_value("overflow").unwrap_or_default(),
            viewport_restore: None,
            platform_engaged: false,
            open: Rc::new(Cell::new(true)),
            is_mac,
            subs: Subscriptions::default(),
        };
        session.request_platform(viewer);
        lock_landscape();
        dom::set_style(&body, "overflow", "hidden");
        session
            .subs
            .listen_active(document, "touchmove", |ev| ev.prevent_default());
        Ok(session)
    }

    fn request_platform(&mut self, viewer: Weak<RefCell<Viewer>>) {
        let Some(root) = self.document.document_element() else {
            self.apply_pseudo();
            return;
        };
        match call_first(&root, request_methods(self.is_mac)) {
            Some(ret) => {
                // Modern engines answer with a promise that rejects when the
                // request is refused (no user gesture, iframe policy...).
                if let Ok(promise) = ret.dyn_into::<js_sys::Promise>() {
                    let open = Rc::clone(&self.open);
                    let document = self.document.clone();
                    let is_mac = self.is_mac;
                    spawn_local(async move {
                        let result = JsFuture::from(promise).await;
                        if let Err(e) = &result {
                            log::warn!("[fullscreen] request rejected: {:?}", e);
                        }
                        match request_settled(result.is_ok(), open.get()) {
                            RequestSettled::ApplyPseudo => {
                                with_viewer(&viewer, |v| v.apply_pseudo_fullscreen());
                            }
                            RequestSettled::ExitPlatform => {
                                log::debug!("[fullscreen] request granted after exit");
                                exit_platform(&document, is_mac);
                            }
                            RequestSettled::Nothing => {}
                        }
                    });
                }
            }
            None => {
                log::warn!("[fullscreen] no platform fullscreen API, using pseudo-fullscreen");
                self.apply_pseudo();
            }
        }
    }

    /// Viewport-meta based fallback for browsers without a usable fullscreen API.
    pub fn apply_pseudo(&mut self) {
        if self.viewport_restore.is_none() {
            if let Ok(Some(meta)) = self.document.query_selector(VIEWPORT_META_SELECTOR) {
                let original = meta.get_attribute("content");
                _ = meta.set_attribute("content", PSEUDO_VIEWPORT_CONTENT);
                self.viewport_restore = Some((meta, original));
            }
        }
        if crate::core::capability::is_ios_user_agent(&crate::detect::user_agent()) {
            // hides the Safari address bar
            dom::defer(PSEUDO_FULLSCREEN_SCROLL_DELAY_MS, || {
                if let Some(w) = web::window() {
                    w.scroll_to_with_x_and_y(0.0, 1.0);
                }
            });
        }
    }

    pub fn sync(&mut self, platform_fullscreen: bool) -> PlatformSync {
        let sync = sync_with_platform(true, self.platform_engaged, platform_fullscreen);
        if sync == PlatformSync::Engaged {
            self.platform_engaged = true;
        }
        sync
    }

    /// Undo every step of `enter`, in reverse order.
    pub fn exit(mut self) {
        self.open.set(false);
        unlock_orientation();
        if let Some((meta, original)) = self.viewport_restore.take() {
            match original {
                Some(content) => {
                    _ = meta.set_attribute("content", &content);
                }
                None => {
                    _ = meta.remove_attribute("content");
                }
            }
        }
        self.subs.clear();
        if let Some(body) = self.document.body() {
            dom::set_style(&body, "overflow", &self.body_overflow);
        }

        let css = self.container.style();
        for (property, original) in self.style.restorations() {
            match original {
                Some(value) => {
                    _ = css.set_property(property, value);
                }
                None => {
                    _ = css.remove_property(property);
                }
            }
        }
        if let Some(parent) = &self.parent {
            let restored = match &self.next_sibling {
                Some(sibling) if sibling.parent_node().as_ref() == Some(parent) => {
                    parent.insert_before(&self.container, Some(sibling))
                }
                _ => parent.append_child(&self.container),
            };
            if let Err(e) = restored {
                log::warn!("[fullscreen] could not restore container: {:?}", e);
            }
        }
        self.overlay.remove();
        // A request still in flight is undone when it settles.
        exit_platform(&self.document, self.is_mac);
    }
}

fn exit_platform(document: &web::Document, is_mac: bool) {
    if !platform_is_fullscreen(document) {
        return;
    }
    let ret = call_first(document, exit_methods(is_mac));
    if let Some(promise) = ret.and_then(|r| r.dyn_into::<js_sys::Promise>().ok()) {
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[fullscreen] exit rejected: {:?}", e);
            }
        });
    }
}

fn lock_landscape() {
    let Some(screen) = web::window().and_then(|w| w.screen().ok()) else {
        return;
    };
    match screen.orientation().lock(web::OrientationLockType::Landscape) {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[fullscreen] orientation lock refused: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[fullscreen] orientation lock unavailable: {:?}", e),
    }
}

fn unlock_orientation() {
    if let Some(screen) = web::window().and_then(|w| w.screen().ok()) {
        _ = screen.orientation().unlock();
    }
}
