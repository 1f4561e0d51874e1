use header_core::ScrollSample;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve once the document has been parsed. Returns immediately when the
/// script runs after `DOMContentLoaded`.
pub async fn dom_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_ready = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    });
    _ = JsFuture::from(promise).await;
}

/// Read the window's layout metrics. Missing values read as zero.
pub fn scroll_sample(window: &web::Window) -> ScrollSample {
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    ScrollSample::from_platform(scroll_top, viewport_height, document_height)
}

/// Move every element carrying `from` over to `to`. Returns how many elements
/// were touched.
pub fn swap_class(document: &web::Document, from: &str, to: &str) -> u32 {
    let Ok(nodes) = document.query_selector_all(&format!(".{from}")) else {
        return 0;
    };
    let mut swapped = 0;
    // querySelectorAll returns a static list, so edits below don't shift it
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            let cl = el.class_list();
            _ = cl.remove_1(from);
            _ = cl.add_1(to);
            swapped += 1;
        }
    }
    swapped
}
