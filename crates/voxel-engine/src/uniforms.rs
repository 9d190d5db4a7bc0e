//! Per-frame uniform block handed to the particle renderer.
//!
//! `FrameUniforms` mirrors the shader's uniform struct. It is refreshed from
//! the UI state, the morph controller, and the force mapper every frame.

use voxel_common::{Color, UiState};
use voxel_config::VoxelConfig;

/// GPU-side uniform buffer for the particle pass.
///
/// Layout: 24 × f32 = 96 bytes, 16-byte rows.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    /// Elapsed time in seconds (wraps at ~6 hours to avoid precision loss).
    pub time: f32,
    pub flow_speed: f32,
    pub interaction_radius: f32,
    /// Point size multiplier from the UI.
    pub size_multiplier: f32,

    pub model_scale: f32,
    /// Smoothed explode strength (0.0-1.0).
    pub explode: f32,
    /// Smoothed gather strength (0.0-1.0).
    pub gather: f32,
    /// Eased morph factor between start and target buffers.
    pub morph: f32,

    /// Smoothed cursor on the z = 0 plane.
    pub cursor: [f32; 3],
    pub camera_distance: f32,

    /// Gradient start color, linear RGB.
    pub color_a: [f32; 3],
    pub bloom_strength: f32,

    /// Gradient end color, linear RGB.
    pub color_b: [f32; 3],
    pub rotation_yaw: f32,

    pub rotation_pitch: f32,
    pub pixel_ratio: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f32,
    pub _padding: f32,
}

impl FrameUniforms {
    /// Uniforms for the configured starting scene. Runtime fields start at
    /// rest: no forces, morph complete, camera at its rest distance.
    pub fn from_config(config: &VoxelConfig) -> Self {
        let mut uniforms = Self {
            time: 0.0,
            flow_speed: 0.0,
            interaction_radius: 0.0,
            size_multiplier: 0.0,
            model_scale: 0.0,
            explode: 0.0,
            gather: 0.0,
            morph: 1.0,
            cursor: [1000.0; 3],
            camera_distance: config.camera.rest_distance,
            color_a: [0.0; 3],
            bloom_strength: 0.0,
            color_b: [0.0; 3],
            rotation_yaw: 0.0,
            rotation_pitch: 0.0,
            pixel_ratio: 1.0,
            aspect_ratio: 1.0,
            _padding: 0.0,
        };
        uniforms.apply_ui_state(&config.initial_ui_state());
        uniforms
    }

    /// Copy slider values and colors from the UI state.
    pub fn apply_ui_state(&mut self, state: &UiState) {
        self.flow_speed = state.flow_speed;
        self.interaction_radius = state.interaction_radius;
        self.size_multiplier = state.particle_size;
        self.model_scale = state.model_scale;
        self.bloom_strength = state.bloom_strength;
        self.color_a = linear_rgb(state.color_a);
        self.color_b = linear_rgb(state.color_b);
    }

    /// Update per-frame time. Wraps at ~6 hours to avoid f32 precision loss.
    pub fn update_time(&mut self, dt: f32) {
        self.time = (self.time + dt) % 21600.0;
    }

    /// Update viewport dimensions and recompute aspect ratio.
    pub fn update_viewport(&mut self, width: u32, height: u32, pixel_ratio: f32) {
        self.aspect_ratio = if height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        self.pixel_ratio = pixel_ratio.clamp(1.0, 2.0);
    }
}

/// sRGB color to linear RGB.
pub fn linear_rgb(color: Color) -> [f32; 3] {
    color.to_rgb_f32().map(|c| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    })
}

// =============================================================================
// Tests
// =============================================================================
