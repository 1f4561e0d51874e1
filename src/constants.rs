use header_core::HeaderState;

// Page hooks and timing for the header auto-hide. Selectors and class names
// match the site's stylesheet; numeric detector defaults live in
// `header_core::constants`.

// Timer period for draining pending scrolls (4 evaluations per second max)
pub const POLL_INTERVAL_MS: i32 = 250;

// Element measured for the header height and carrying per-page overrides
pub const BANNER_SELECTOR: &str = ".banner-container";

// Marker classes toggled on the header
pub const VISIBLE_CLASS: &str = "nav-down";
pub const HIDDEN_CLASS: &str = "nav-up";

// Override attributes read from the banner container
pub const DELTA_ATTR: &str = "data-autohide-delta";
pub const POLICY_ATTR: &str = "data-autohide-policy";

#[inline]
pub fn marker_class(state: HeaderState) -> &'static str {
    match state {
        HeaderState::Visible => VISIBLE_CLASS,
        HeaderState::Hidden => HIDDEN_CLASS,
    }
}

// Class seeded at startup when no element carries either marker yet
#[inline]
pub fn initial_marker(has_visible: bool, has_hidden: bool) -> Option<&'static str> {
    (!has_visible && !has_hidden).then_some(marker_class(HeaderState::Visible))
}
