use crate::policy::RevealPolicy;

// Detector defaults shared by the web frontend and host-side tests.

pub const DEFAULT_DELTA_PX: u32 = 100; // movement ignored as jitter
pub const DEFAULT_POLICY: RevealPolicy = RevealPolicy::PastHeader;
