use crate::constants::{
    initial_marker, marker_class, BANNER_SELECTOR, DELTA_ATTR, HIDDEN_CLASS, POLICY_ATTR,
    VISIBLE_CLASS,
};
use crate::dom;
use header_core::{DetectorConfig, Transition};
use wasm_bindgen::JsCast;
use web_sys as web;

fn banner(document: &web::Document) -> Option<web::Element> {
    document.query_selector(BANNER_SELECTOR).ok().flatten()
}

/// Rendered outer height of the banner container, 0 when it is absent.
pub fn measure_height(banner: Option<&web::Element>) -> u32 {
    match banner {
        Some(el) => el
            .dyn_ref::<web::HtmlElement>()
            .map(|h| h.offset_height().max(0) as u32)
            .unwrap_or(0),
        None => {
            log::debug!("[banner] no {} on page; height reads as 0", BANNER_SELECTOR);
            0
        }
    }
}

/// Detector configuration for this page: defaults, the measured header height,
/// and any valid overrides from the banner's data attributes.
pub fn read_config(document: &web::Document) -> DetectorConfig {
    let el = banner(document);
    let base = DetectorConfig::with_navbar_height(measure_height(el.as_ref()));
    let Some(el) = el else {
        return base;
    };
    let delta = el.get_attribute(DELTA_ATTR);
    let policy = el.get_attribute(POLICY_ATTR);
    let (config, errors) = base.with_overrides(delta.as_deref(), policy.as_deref());
    for e in errors {
        log::warn!("[banner] ignoring override: {}", e);
    }
    config
}

/// Mark the banner visible when the markup ships without either marker class,
/// so the first transition has something to swap.
pub fn ensure_marker(document: &web::Document) {
    let carries = |class: &str| {
        document
            .query_selector(&format!(".{class}"))
            .ok()
            .flatten()
            .is_some()
    };
    let Some(class) = initial_marker(carries(VISIBLE_CLASS), carries(HIDDEN_CLASS)) else {
        return;
    };
    match banner(document) {
        Some(el) => {
            _ = el.class_list().add_1(class);
            log::info!("[banner] no marker in markup; added .{}", class);
        }
        None => log::debug!("[banner] no marker and no {}; nothing to toggle", BANNER_SELECTOR),
    }
}

/// Swap the header's marker class to match `transition.to`.
pub fn apply(document: &web::Document, transition: &Transition) {
    let touched = dom::swap_class(
        document,
        marker_class(transition.from),
        marker_class(transition.to),
    );
    if touched == 0 {
        log::debug!("[banner] no header carries .{}", marker_class(transition.from));
    }
}
