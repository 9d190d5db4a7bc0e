//! Explode/gather forces and model rotation.

use std::f32::consts::PI;

use voxel_common::{Gesture, HandInteractionState};
use voxel_config::schema::InteractionConfig;

use super::damp;

/// Smoothed explode and gather strengths plus the model's yaw and pitch.
///
/// An open hand pushes explode toward `0.5 + 0.5·distance`; a fist does the
/// same for gather. Hand position steers rotation; with no hand the model
/// spins slowly and levels out.
#[derive(Debug, Clone)]
pub struct InteractionDynamics {
    explode: f32,
    gather: f32,
    yaw: f32,
    pitch: f32,
    force_response: f32,
    rotation_response: f32,
    yaw_range: f32,
    pitch_range: f32,
    idle_yaw_speed: f32,
    pitch_relax: f32,
}

impl InteractionDynamics {
    pub fn from_config(config: &InteractionConfig) -> Self {
        Self {
            explode: 0.0,
            gather: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            force_response: config.force_response,
            rotation_response: config.rotation_response,
            yaw_range: config.yaw_range * PI,
            pitch_range: config.pitch_range * PI,
            idle_yaw_speed: config.idle_yaw_speed,
            pitch_relax: config.pitch_relax,
        }
    }

    pub fn update(&mut self, hand: &HandInteractionState, dt: f32) {
        let (desired_explode, desired_gather) = desired_forces(hand);
        self.explode = damp(self.explode, desired_explode, dt, self.force_response);
        self.gather = damp(self.gather, desired_gather, dt, self.force_response);

        if hand.is_active {
            let target_yaw = (hand.hand_position.x - 0.5) * self.yaw_range;
            let target_pitch = (hand.hand_position.y - 0.5) * self.pitch_range;
            self.yaw = damp(self.yaw, target_yaw, dt, self.rotation_response);
            self.pitch = damp(self.pitch, target_pitch, dt, self.rotation_response);
        } else {
            if dt.is_finite() && dt > 0.0 {
                self.yaw += dt * self.idle_yaw_speed;
            }
            self.pitch = damp(self.pitch, 0.0, dt, self.pitch_relax);
        }
    }

    pub fn explode(&self) -> f32 {
        self.explode
    }

    pub fn gather(&self) -> f32 {
        self.gather
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}

impl Default for InteractionDynamics {
    fn default() -> Self {
        Self::from_config(&InteractionConfig::default())
    }
}

/// Intensity an active hand drives its force toward.
pub fn gesture_intensity(hand_distance: f32) -> f32 {
    0.5 + 0.5 * hand_distance
}

/// Target (explode, gather) for the current hand reading.
pub fn desired_forces(hand: &HandInteractionState) -> (f32, f32) {
    if !hand.is_active {
        return (0.0, 0.0);
    }
    let intensity = gesture_intensity(hand.hand_distance);
    match hand.gesture {
        Gesture::Open => (intensity, 0.0),
        Gesture::Fist => (0.0, intensity),
        Gesture::None => (0.0, 0.0),
    }
}
