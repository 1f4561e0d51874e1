//! Detector thresholds and per-page overrides.

use crate::constants::{DEFAULT_DELTA_PX, DEFAULT_POLICY};
use crate::policy::{RevealPolicy, UnknownPolicy};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid delta {value:?}: expected a non-negative pixel count")]
    InvalidDelta { value: String },
    #[error(transparent)]
    UnknownPolicy(#[from] UnknownPolicy),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectorConfig {
    pub delta_px: u32,
    pub navbar_height_px: u32,
    pub policy: RevealPolicy,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            delta_px: DEFAULT_DELTA_PX,
            navbar_height_px: 0,
            policy: DEFAULT_POLICY,
        }
    }
}

impl DetectorConfig {
    pub fn with_navbar_height(navbar_height_px: u32) -> Self {
        Self {
            navbar_height_px,
            ..Self::default()
        }
    }

    /// Apply raw attribute overrides. Each rejected value is returned as an
    /// error and leaves the corresponding field untouched, so callers can
    /// report it and keep the rest.
    pub fn with_overrides(
        mut self,
        delta: Option<&str>,
        policy: Option<&str>,
    ) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        if let Some(raw) = delta {
            match parse_delta(raw) {
                Ok(d) => self.delta_px = d,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = policy {
            match raw.parse::<RevealPolicy>() {
                Ok(p) => self.policy = p,
                Err(e) => errors.push(e.into()),
            }
        }
        (self, errors)
    }
}

pub fn parse_delta(raw: &str) -> Result<u32, ConfigError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    digits.parse::<u32>().map_err(|_| ConfigError::InvalidDelta {
        value: raw.to_string(),
    })
}
