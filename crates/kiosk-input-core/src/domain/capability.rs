//! OS capability levels and the feature floors the engine relies on.
//!
//! The host reports a single monotonically increasing capability level (the
//! platform API level).  Each optional OS service the engine uses became
//! available at some level; below that floor the corresponding strategy
//! reports "capability unavailable" and the dispatcher moves on.

use serde::{Deserialize, Serialize};

/// The platform API level reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityLevel(pub u32);

impl CapabilityLevel {
    /// Synthetic gesture playback.
    pub const GESTURES: CapabilityLevel = CapabilityLevel(24);
    /// The media play/pause global action.
    pub const MEDIA_GLOBAL_ACTION: CapabilityLevel = CapabilityLevel(31);
    /// The cooperative key/text input channel.
    pub const DIRECT_INPUT: CapabilityLevel = CapabilityLevel(33);

    /// Returns `true` if this level meets `floor`.
    pub fn supports(self, floor: CapabilityLevel) -> bool {
        self >= floor
    }
}

impl std::fmt::Display for CapabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API {}", self.0)
    }
}
