#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod admission;
mod bootstrap;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod fullscreen;
mod overlay;
mod detect;
mod render;
mod viewer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = bootstrap::read_page_config();
    console_log::init_with_level(config.log_level()).ok();
    log::info!("pano-web starting");

    if let Err(e) = bootstrap::boot(&config) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Mount viewers on containers added to the page after load.
#[wasm_bindgen(js_name = scanPanoramas)]
pub fn scan_panoramas() -> u32 {
    bootstrap::scan() as u32
}

#[wasm_bindgen(js_name = disposePanorama)]
pub fn dispose_panorama(element: web::Element) -> bool {
    bootstrap::dispose_element(&element)
}

#[wasm_bindgen(js_name = disposeAllPanoramas)]
pub fn dispose_all_panoramas() {
    bootstrap::dispose_all();
}
