use crate::state::{HeaderState, ScrollSample};
use std::fmt;
use std::str::FromStr;

/// How a scroll movement that passed the delta check maps to a header state.
///
/// The variants disagree on when the header comes back and are deliberately
/// kept apart; a page picks one through configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealPolicy {
    /// Hide when moving down past the header's height, show otherwise.
    #[default]
    PastHeader,
    /// Hide on any downward movement; show only once back above the header's
    /// height.
    NearTop,
    /// Like `PastHeader`, but never reveal while the viewport touches the end
    /// of the document (bottom bounce). Above the header's height the header
    /// always shows.
    NearBottom,
}

impl RevealPolicy {
    pub const ALL: [RevealPolicy; 3] = [
        RevealPolicy::PastHeader,
        RevealPolicy::NearTop,
        RevealPolicy::NearBottom,
    ];

    /// Target state for a move from `last` to `sample.scroll_top`.
    /// `None` keeps whatever state the header is already in.
    pub fn decide(
        self,
        last: u32,
        sample: &ScrollSample,
        navbar_height: u32,
    ) -> Option<HeaderState> {
        let st = sample.scroll_top;
        let down = st > last;
        match self {
            RevealPolicy::PastHeader => {
                if down && st > navbar_height {
                    Some(HeaderState::Hidden)
                } else {
                    Some(HeaderState::Visible)
                }
            }
            RevealPolicy::NearTop => {
                if down {
                    Some(HeaderState::Hidden)
                } else if st < navbar_height {
                    Some(HeaderState::Visible)
                } else {
                    None
                }
            }
            RevealPolicy::NearBottom => {
                if down && st > navbar_height {
                    Some(HeaderState::Hidden)
                } else if st < navbar_height {
                    Some(HeaderState::Visible)
                } else if st.saturating_add(sample.viewport_height) < sample.document_height {
                    Some(HeaderState::Visible)
                } else {
                    None
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RevealPolicy::PastHeader => "past-header",
            RevealPolicy::NearTop => "near-top",
            RevealPolicy::NearBottom => "near-bottom",
        }
    }
}

impl fmt::Display for RevealPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown reveal policy {0:?} (expected past-header, near-top or near-bottom)")]
pub struct UnknownPolicy(pub String);

impl FromStr for RevealPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RevealPolicy::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPolicy(wanted.to_string()))
    }
}
