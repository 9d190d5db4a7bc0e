//! Camera dolly along +Z driven by the hand.

use voxel_common::{Gesture, HandInteractionState};
use voxel_config::schema::CameraConfig;

use super::{damp, dynamics::gesture_intensity, lerp};

/// Tracks how far the camera sits from the origin.
///
/// An open hand pulls the camera far back, scaled by a separately smoothed
/// explode level. That level decays slowly after the hand leaves, keeping
/// the view wide for a moment before settling at rest.
#[derive(Debug, Clone)]
pub struct CameraRig {
    distance: f32,
    explode_smooth: f32,
    fov_degrees: f32,
    rest: f32,
    open: f32,
    fist: f32,
    neutral_far: f32,
    neutral_near: f32,
    open_response: f32,
    response: f32,
    linger: f32,
}

impl CameraRig {
    /// Explode level rate while the hand is open.
    pub const OPEN_EXPLODE_RATE: f32 = 4.0;
    /// Decay rates back to zero, fastest for a fist.
    pub const FIST_RELEASE_RATE: f32 = 3.0;
    pub const NEUTRAL_RELEASE_RATE: f32 = 2.0;
    pub const IDLE_RELEASE_RATE: f32 = 1.5;

    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            distance: config.rest_distance,
            explode_smooth: 0.0,
            fov_degrees: config.fov_degrees,
            rest: config.rest_distance,
            open: config.open_distance,
            fist: config.fist_distance,
            neutral_far: config.neutral_far,
            neutral_near: config.neutral_near,
            open_response: config.open_response,
            response: config.response,
            linger: config.linger,
        }
    }

    pub fn update(&mut self, hand: &HandInteractionState, dt: f32) {
        let d = hand.hand_distance;
        let (level, level_rate) = match (hand.is_active, hand.gesture) {
            (false, _) => (0.0, Self::IDLE_RELEASE_RATE),
            (true, Gesture::Open) => (gesture_intensity(d), Self::OPEN_EXPLODE_RATE),
            (true, Gesture::Fist) => (0.0, Self::FIST_RELEASE_RATE),
            (true, Gesture::None) => (0.0, Self::NEUTRAL_RELEASE_RATE),
        };
        self.explode_smooth = damp(self.explode_smooth, level, dt, level_rate);

        let desired = match (hand.is_active, hand.gesture) {
            (false, _) => self.rest + self.explode_smooth * self.linger,
            (true, Gesture::Open) => lerp(self.rest, self.open, self.explode_smooth),
            (true, Gesture::Fist) => lerp(self.rest, self.fist, d),
            (true, Gesture::None) => lerp(self.neutral_far, self.neutral_near, d),
        };

        // The last gesture picks the rate even when the hand is gone.
        let rate = if hand.gesture == Gesture::Open {
            self.open_response
        } else {
            self.response
        };
        self.distance = damp(self.distance, desired, dt, rate);
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn explode_smooth(&self) -> f32 {
        self.explode_smooth
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
