use crate::admission::{AdmissionController, SharedAdmission};
use crate::constants::{OPTION_DEBUG, OPTION_MAX_ACTIVE, PAGE_CONFIG_GLOBAL};
use crate::core::discovery::{image_source, CONTAINER_SELECTOR, IMAGE_ATTRIBUTE};
use crate::core::PageConfig;
use crate::dom::{self, Subscriptions};
use crate::viewer::{Viewer, ViewerHandle};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page-level registry of mounted viewers.
struct Page {
    admission: SharedAdmission,
    viewers: Vec<ViewerHandle>,
    _subs: Subscriptions,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Reads the optional `window.PSV360Config` object.
pub fn read_page_config() -> PageConfig {
    let Some(cfg) = web::window().and_then(|w| dom::js_get(&w, PAGE_CONFIG_GLOBAL)) else {
        return PageConfig::default();
    };
    PageConfig::new(
        dom::js_get(&cfg, OPTION_DEBUG).and_then(|v| v.as_bool()),
        dom::js_get(&cfg, OPTION_MAX_ACTIVE).and_then(|v| v.as_f64()),
    )
}

pub fn boot(config: &PageConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut subs = Subscriptions::default();
    subs.listen(&window, "beforeunload", |_ev| dispose_all());
    let loading = document.ready_state() == "loading";
    if loading {
        subs.listen(&document, "DOMContentLoaded", |_ev| {
            scan();
        });
    }
    let admission = AdmissionController::shared(config.max_active);
    log::info!(
        "[bootstrap] max active viewers: {}",
        admission.borrow().capacity()
    );
    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            admission,
            viewers: Vec::new(),
            _subs: subs,
        });
    });
    if !loading {
        scan();
    }
    Ok(())
}

/// Mount a viewer on every container not mounted yet. Returns how many were added.
pub fn scan() -> usize {
    let Some(document) = dom::window_document() else {
        return 0;
    };
    let Ok(nodes) = document.query_selector_all(CONTAINER_SELECTOR) else {
        return 0;
    };
    let Some((admission, mounted)) = PAGE.with(|p| {
        p.borrow().as_ref().map(|page| {
            let mounted: Vec<web::HtmlElement> = page
                .viewers
                .iter()
                .map(|v| v.borrow().container().clone())
                .collect();
            (page.admission.clone(), mounted)
        })
    }) else {
        return 0;
    };

    let mut added = Vec::new();
    for i in 0..nodes.length() {
        let Some(container) = nodes
            .get(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        if mounted.contains(&container) {
            continue;
        }
        let attr = container.get_attribute(IMAGE_ATTRIBUTE);
        let Some(url) = image_source(attr.as_deref()) else {
            log::debug!("[bootstrap] skipping container without image");
            continue;
        };
        let url = url.to_string();
        added.push(Viewer::mount(&document, container, url, admission.clone()));
    }
    let count = added.len();
    PAGE.with(|p| {
        if let Some(page) = p.borrow_mut().as_mut() {
            page.viewers.extend(added);
        }
    });
    if count > 0 {
        log::info!("[bootstrap] mounted {} viewer(s)", count);
    }
    count
}

/// Dispose the viewer mounted on `element`, if any.
pub fn dispose_element(element: &web::Element) -> bool {
    let found = PAGE.with(|p| {
        let mut page = p.borrow_mut();
        let page = page.as_mut()?;
        let idx = page
            .viewers
            .iter()
            .position(|v| v.borrow().container().unchecked_ref::<web::Element>() == element)?;
        Some(page.viewers.remove(idx))
    });
    match found {
        Some(viewer) => {
            viewer.borrow_mut().dispose();
            true
        }
        None => false,
    }
}

/// Tear down every mounted viewer exactly once.
pub fn dispose_all() {
    let viewers = PAGE.with(|p| {
        p.borrow_mut()
            .as_mut()
            .map(|page| std::mem::take(&mut page.viewers))
            .unwrap_or_default()
    });
    for v in &viewers {
        v.borrow_mut().dispose();
    }
    if !viewers.is_empty() {
        log::info!("[bootstrap] disposed {} viewer(s)", viewers.len());
    }
}
