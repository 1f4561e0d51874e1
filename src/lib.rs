#![cfg(target_arch = "wasm32")]
use header_core::ScrollDetector;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod banner;
mod constants;
mod dom;
mod events;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hide-header starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already running; ignoring second start");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Header height must be measured after the banner has been parsed
    dom::dom_ready(&document).await;

    let config = banner::read_config(&document);
    log::info!(
        "[init] delta={}px navbar={}px policy={} poll={}ms",
        config.delta_px,
        config.navbar_height_px,
        config.policy,
        constants::POLL_INTERVAL_MS
    );

    banner::ensure_marker(&document);

    let detector = Rc::new(RefCell::new(ScrollDetector::new(config)));
    events::wire_scroll_listener(&window, detector.clone());
    events::start_poll(&window, document, detector)?;
    Ok(())
}
