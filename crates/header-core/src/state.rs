//! Header presentation state and the layout snapshot it is derived from.
//!
//! These types never touch the DOM. The web frontend fills a [`ScrollSample`]
//! from the window on each timer tick and maps [`HeaderState`] back onto the
//! header's marker classes.

use std::fmt;

/// The two mutually exclusive presentations of the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeaderState {
    /// Shown at the top of the viewport.
    #[default]
    Visible,
    /// Shifted up and off-screen.
    Hidden,
}

impl HeaderState {
    #[inline]
    pub fn is_hidden(self) -> bool {
        matches!(self, HeaderState::Hidden)
    }
}

impl fmt::Display for HeaderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderState::Visible => f.write_str("visible"),
            HeaderState::Hidden => f.write_str("hidden"),
        }
    }
}

/// Layout reads taken together at tick time, all in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollSample {
    pub scroll_top: u32,
    pub viewport_height: u32,
    pub document_height: u32,
}

impl ScrollSample {
    /// Sample with only a scroll offset; viewport and document heights are 0.
    pub fn at(scroll_top: u32) -> Self {
        Self {
            scroll_top,
            ..Self::default()
        }
    }

    /// Convert raw platform readings into a sample.
    ///
    /// Elastic overscroll can report negative offsets and zoomed pages report
    /// fractional ones, so values are rounded and clamped to zero. Non-finite
    /// readings count as zero.
    pub fn from_platform(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top: px(scroll_top),
            viewport_height: px(viewport_height),
            document_height: px(document_height),
        }
    }
}

#[inline]
fn px(value: f64) -> u32 {
    if value.is_finite() {
        value.round().clamp(0.0, u32::MAX as f64) as u32
    } else {
        0
    }
}

/// A change of header state produced by one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: HeaderState,
    pub to: HeaderState,
    pub scroll_top: u32,
}
