use crate::config::DetectorConfig;
use crate::state::{HeaderState, ScrollSample, Transition};

/// Throttled scroll-direction detector.
///
/// Works as a two-stage pipeline: the scroll listener only calls
/// [`mark_scrolled`](Self::mark_scrolled), and a periodic timer calls
/// [`tick`](Self::tick), which drains the flag and performs at most one
/// evaluation however many scroll events arrived in between.
#[derive(Clone, Debug)]
pub struct ScrollDetector {
    config: DetectorConfig,
    state: HeaderState,
    last_scroll_top: u32,
    pending: bool,
}

impl ScrollDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            state: HeaderState::Visible,
            last_scroll_top: 0,
            pending: false,
        }
    }

    #[inline]
    pub fn mark_scrolled(&mut self) {
        self.pending = true;
    }

    /// Timer stage. `read` is only invoked when a scroll happened since the
    /// previous tick, keeping layout reads off idle ticks.
    pub fn tick(&mut self, read: impl FnOnce() -> ScrollSample) -> Option<Transition> {
        if !std::mem::take(&mut self.pending) {
            return None;
        }
        self.evaluate(read())
    }

    /// Decide the header state for `sample`. Returns a transition only when the
    /// state actually changes.
    pub fn evaluate(&mut self, sample: ScrollSample) -> Option<Transition> {
        let st = sample.scroll_top;
        if self.last_scroll_top.abs_diff(st) <= self.config.delta_px {
            return None;
        }

        let target = self
            .config
            .policy
            .decide(self.last_scroll_top, &sample, self.config.navbar_height_px);
        self.last_scroll_top = st;

        let to = target.filter(|t| *t != self.state)?;
        let transition = Transition {
            from: self.state,
            to,
            scroll_top: st,
        };
        self.state = to;
        log::debug!("[detector] {} -> {} at {}px", transition.from, to, st);
        Some(transition)
    }

    #[inline]
    pub fn state(&self) -> HeaderState {
        self.state
    }

    #[inline]
    pub fn last_scroll_top(&self) -> u32 {
        self.last_scroll_top
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[inline]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}
