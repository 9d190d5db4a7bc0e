//! Continuous mapping from hand state to forces, rotation, camera distance,
//! and cursor position.
//!
//! Everything here is smoothed with [`damp`] once per render tick; there are
//! no timers. Only this module writes rotation and camera state.

mod camera;
mod cursor;
mod dynamics;

#[cfg(test)]
mod tests;

pub use camera::*;
pub use cursor::*;
pub use dynamics::*;

use glam::Vec2;
use voxel_common::HandInteractionState;
use voxel_config::VoxelConfig;

use crate::uniforms::FrameUniforms;

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Move `current` toward `target` by a fraction `dt * rate`, clamped to
/// `[0, 1]` so long frames land on the target instead of overshooting.
pub fn damp(current: f32, target: f32, dt: f32, rate: f32) -> f32 {
    let t = (dt * rate).clamp(0.0, 1.0);
    if t.is_nan() {
        return current;
    }
    lerp(current, target, t)
}

/// Force dynamics, camera dolly, and cursor follower advanced together.
#[derive(Debug, Clone)]
pub struct ForceMapper {
    pub dynamics: InteractionDynamics,
    pub camera: CameraRig,
    pub cursor: CursorTracker,
}

impl ForceMapper {
    pub fn from_config(config: &VoxelConfig) -> Self {
        Self {
            dynamics: InteractionDynamics::from_config(&config.interaction),
            camera: CameraRig::from_config(&config.camera),
            cursor: CursorTracker::from_config(config),
        }
    }

    /// Advance one render tick.
    ///
    /// `pointer` is the pointer in normalized device coordinates, if any.
    pub fn tick(
        &mut self,
        hand: &HandInteractionState,
        pointer: Option<Vec2>,
        aspect: f32,
        dt: f32,
    ) {
        self.dynamics.update(hand, dt);
        self.camera.update(hand, dt);
        if let Some(ndc) = pointer {
            self.cursor.follow(ndc, self.camera.distance(), aspect);
        }
    }

    pub fn write_uniforms(&self, uniforms: &mut FrameUniforms) {
        uniforms.explode = self.dynamics.explode();
        uniforms.gather = self.dynamics.gather();
        uniforms.rotation_yaw = self.dynamics.yaw();
        uniforms.rotation_pitch = self.dynamics.pitch();
        uniforms.camera_distance = self.camera.distance();
        uniforms.cursor = self.cursor.position().to_array();
    }
}
