//! Camera dolly configuration.

use serde::{Deserialize, Serialize};

/// Distances are world units along +Z from the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view (valid range: 10-120).
    pub fov_degrees: f32,
    /// Distance with no hand and nothing lingering.
    pub rest_distance: f32,
    /// Distance reached at full explode with an open hand.
    pub open_distance: f32,
    /// Closest distance with a near fist.
    pub fist_distance: f32,
    /// Neutral-hand distance when the hand is far.
    pub neutral_far: f32,
    /// Neutral-hand distance when the hand is near.
    pub neutral_near: f32,
    /// Dolly rate while the hand is open.
    pub open_response: f32,
    /// Dolly rate otherwise.
    pub response: f32,
    /// Extra distance kept per unit of lingering explode after the hand leaves.
    pub linger: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 35.0,
            rest_distance: 16.0,
            open_distance: 120.0,
            fist_distance: 10.0,
            neutral_far: 20.0,
            neutral_near: 12.0,
            open_response: 4.0,
            response: 2.5,
            linger: 60.0,
        }
    }
}
