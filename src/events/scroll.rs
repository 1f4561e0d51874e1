use crate::banner;
use crate::constants::POLL_INTERVAL_MS;
use crate::dom;
use header_core::ScrollDetector;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// The scroll handler only flags the detector; layout is read on the timer.
pub fn wire_scroll_listener(window: &web::Window, detector: Rc<RefCell<ScrollDetector>>) {
    let closure = Closure::wrap(Box::new(move || {
        detector.borrow_mut().mark_scrolled();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn start_poll(
    window: &web::Window,
    document: web::Document,
    detector: Rc<RefCell<ScrollDetector>>,
) -> anyhow::Result<()> {
    let wnd = window.clone();
    let tick = Closure::wrap(Box::new(move || {
        let transition = detector
            .borrow_mut()
            .tick(|| dom::scroll_sample(&wnd));
        if let Some(t) = transition {
            banner::apply(&document, &t);
        }
    }) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            POLL_INTERVAL_MS,
        )
        .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
    tick.forget();
    Ok(())
}
