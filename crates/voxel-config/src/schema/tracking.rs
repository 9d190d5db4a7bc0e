//! Hand tracking configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub enabled: bool,
    /// Minimum time between detector calls (valid range: 10-1000).
    pub detect_interval_ms: u32,
    /// A finger counts as extended when its tip is this many times farther
    /// from the wrist than its base knuckle (valid range: 1.0-3.0).
    pub extension_ratio: f32,
    /// Bounding-box area mapped to distance 0.0.
    pub area_floor: f32,
    /// Area above the floor mapped to distance 1.0.
    pub area_span: f32,
    /// Mirror the x axis so the cloud follows the hand like a mirror.
    pub mirror_x: bool,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            detect_interval_ms: 50,
            extension_ratio: 1.5,
            area_floor: 0.05,
            area_span: 0.25,
            mirror_x: true,
        }
    }
}
