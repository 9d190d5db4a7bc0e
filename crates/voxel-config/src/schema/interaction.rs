//! Gesture-to-force mapping rates.
//!
//! Every `*_response` value is a per-second smoothing rate fed to the
//! damping helper as `dt * rate`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Explode/gather smoothing rate.
    pub force_response: f32,
    /// Hand-steered rotation smoothing rate.
    pub rotation_response: f32,
    /// Yaw swing across the full frame width, in multiples of pi.
    pub yaw_range: f32,
    /// Pitch swing across the full frame height, in multiples of pi.
    pub pitch_range: f32,
    /// Idle auto-rotation speed in radians per second.
    pub idle_yaw_speed: f32,
    /// Rate at which pitch relaxes back to level with no hand.
    pub pitch_relax: f32,
    /// Per-frame cursor follow factor (valid range: 0.0-1.0).
    pub cursor_follow: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            force_response: 3.0,
            rotation_response: 5.0,
            yaw_range: 1.5,
            pitch_range: 0.5,
            idle_yaw_speed: 0.2,
            pitch_relax: 2.0,
            cursor_follow: 0.1,
        }
    }
}
