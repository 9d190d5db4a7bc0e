//! Particle cloud configuration: population, look, and starting form.

use serde::{Deserialize, Serialize};
use voxel_common::ShapeKind;

/// Particle population and per-particle appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Number of particles, fixed for the session (valid range: 1000-200000).
    pub count: u32,
    /// Point size multiplier (valid range: 0.1-3.0).
    pub size: f32,
    /// Noise flow turbulence (valid range: 0.0-5.0).
    pub flow_speed: f32,
    /// Cursor repulsion radius in world units (valid range: 0.0-10.0).
    pub interaction_radius: f32,
    /// Uniform model scale (valid range: 0.5-2.5).
    pub model_scale: f32,
    /// Gradient start color as hex string.
    pub color_a: String,
    /// Gradient end color as hex string.
    pub color_b: String,
    pub initial_shape: ShapeKind,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            count: 30_000,
            size: 1.5,
            flow_speed: 0.5,
            interaction_radius: 1.5,
            model_scale: 1.0,
            color_a: "#00ccff".into(),
            color_b: "#7700ff".into(),
            initial_shape: ShapeKind::Glyph,
        }
    }
}

/// Morph timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Progress per second; 1.5 completes a morph in about 0.67 s
    /// (valid range: 0.1-10.0).
    pub rate: f32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self { rate: 1.5 }
    }
}
