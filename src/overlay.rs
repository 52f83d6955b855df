use crate::constants::*;
use crate::dom::{self, Subscriptions};
use crate::events::with_viewer;
use crate::viewer::Viewer;
use std::cell::RefCell;
use std::rc::Weak;
use web_sys as web;

/// Zoom and fullscreen buttons of one viewer, plus the listeners bound to them.
pub struct Controls {
    root: web::HtmlElement,
    fullscreen: Option<web::HtmlElement>,
    subs: Subscriptions,
}

fn make_button(
    document: &web::Document,
    class: &str,
    glyph: &str,
    title: &str,
) -> anyhow::Result<web::HtmlElement> {
    let btn: web::HtmlElement = dom::create_element(document, "button")?;
    btn.set_class_name(class);
    btn.set_title(title);
    btn.set_text_content(Some(glyph));
    _ = btn.set_attribute("type", "button");
    _ = btn.set_attribute("aria-label", title);
    Ok(btn)
}

impl Controls {
    pub fn build(
        document: &web::Document,
        container: &web::HtmlElement,
        with_fullscreen: bool,
        viewer: Weak<RefCell<Viewer>>,
    ) -> anyhow::Result<Self> {
        let root: web::HtmlElement = dom::create_element(document, "div")?;
        root.set_class_name(CLASS_CONTROLS);
        let mut subs = Subscriptions::default();

        let fullscreen = if with_fullscreen {
            let btn = make_button(
                document,
                CLASS_FULLSCREEN_BUTTON,
                GLYPH_FULLSCREEN_ENTER,
                TITLE_FULLSCREEN_ENTER,
            )?;
            let v = viewer.clone();
            subs.listen(&btn, "click", move |ev| {
                ev.stop_propagation();
                with_viewer(&v, |viewer| viewer.toggle_fullscreen());
            });
            root.append_child(&btn).map_err(dom::js_err)?;
            Some(btn)
        } else {
            None
        };

        let zoom_in = make_button(document, CLASS_ZOOM_IN_BUTTON, GLYPH_ZOOM_IN, TITLE_ZOOM_IN)?;
        let zoom_out =
            make_button(document, CLASS_ZOOM_OUT_BUTTON, GLYPH_ZOOM_OUT, TITLE_ZOOM_OUT)?;
        for (btn, zoom_in) in [(&zoom_in, true), (&zoom_out, false)] {
            let v = viewer.clone();
            subs.listen(btn, "click", move |ev| {
                ev.stop_propagation();
                with_viewer(&v, |viewer| viewer.zoom(zoom_in));
            });
            // Touch taps on small screens would otherwise also pan or zoom the page.
            let v = viewer.clone();
            subs.listen_active(btn, "touchend", move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                with_viewer(&v, |viewer| viewer.zoom(zoom_in));
            });
            root.append_child(btn).map_err(dom::js_err)?;
        }

        container.append_child(&root).map_err(dom::js_err)?;
        Ok(Self {
            root,
            fullscreen,
            subs,
        })
    }

    pub fn set_fullscreen(&self, fullscreen: bool) {
        let Some(btn) = &self.fullscreen else {
            return;
        };
        let (glyph, title) = if fullscreen {
            (GLYPH_FULLSCREEN_EXIT, TITLE_FULLSCREEN_EXIT)
        } else {
            (GLYPH_FULLSCREEN_ENTER, TITLE_FULLSCREEN_ENTER)
        };
        btn.set_text_content(Some(glyph));
        btn.set_title(title);
        _ = btn.set_attribute("aria-label", title);
    }

    pub fn remove(mut self) {
        self.subs.clear();
        self.root.remove();
    }
}

/// Inline failure message; replaces any previous one in the same container.
pub fn show_notice(
    document: &web::Document,
    container: &web::HtmlElement,
    message: &str,
) -> Option<web::HtmlElement> {
    if let Ok(Some(old)) = container.query_selector(&format!(".{}", CLASS_ERROR)) {
        old.remove();
    }
    let el: web::HtmlElement = dom::create_element(document, "div").ok()?;
    el.set_class_name(CLASS_ERROR);
    _ = el.set_attribute("style", ERROR_CSS);
    _ = el.set_attribute("role", "alert");
    el.set_text_content(Some(message));
    container.append_child(&el).ok()?;
    Some(el)
}
