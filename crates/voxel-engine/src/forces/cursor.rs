//! Pointer position projected into the scene.

use glam::{Vec2, Vec3};
use voxel_config::VoxelConfig;

/// Where the cursor starts: far enough that no particle is repelled.
pub const CURSOR_PARKED: Vec3 = Vec3::splat(1000.0);

/// World-space cursor on the z = 0 plane, eased toward the pointer.
#[derive(Debug, Clone)]
pub struct CursorTracker {
    position: Vec3,
    follow: f32,
    half_fov_tan: f32,
}

impl CursorTracker {
    pub fn new(fov_degrees: f32, follow: f32) -> Self {
        Self {
            position: CURSOR_PARKED,
            follow: follow.clamp(0.0, 1.0),
            half_fov_tan: (fov_degrees.to_radians() * 0.5).tan(),
        }
    }

    pub fn from_config(config: &VoxelConfig) -> Self {
        Self::new(config.camera.fov_degrees, config.interaction.cursor_follow)
    }

    /// Move a fixed fraction of the way toward the pointer's world position.
    pub fn follow(&mut self, ndc: Vec2, camera_distance: f32, aspect: f32) {
        let world = self.unproject(ndc, camera_distance, aspect);
        if world.is_finite() {
            self.position = self.position.lerp(world, self.follow);
        }
    }

    /// Intersect the view ray through `ndc` with the z = 0 plane, for a
    /// camera at `(0, 0, camera_distance)` looking down −Z.
    pub fn unproject(&self, ndc: Vec2, camera_distance: f32, aspect: f32) -> Vec3 {
        let half_height = self.half_fov_tan * camera_distance;
        Vec3::new(ndc.x * half_height * aspect, ndc.y * half_height, 0.0)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::from_config(&VoxelConfig::default())
    }
}
