//! Configuration schema types for voxel-cloud.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the scene starts with.

mod camera;
mod effects;
mod interaction;
mod particles;
mod system;
mod tracking;

pub use camera::*;
pub use effects::*;
pub use interaction::*;
pub use particles::*;
pub use system::*;
pub use tracking::*;

use serde::{Deserialize, Serialize};
use voxel_common::{Color, UiState};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoxelConfig {
    pub particles: ParticlesConfig,
    pub effects: EffectsConfig,
    pub morph: MorphConfig,
    pub interaction: InteractionConfig,
    pub camera: CameraConfig,
    pub tracking: TrackingConfig,
    pub glyph: GlyphConfig,
    pub logging: LoggingConfig,
}

impl VoxelConfig {
    /// Build the starting [`UiState`] from this config.
    ///
    /// Colors that fail to parse keep the built-in palette; validation
    /// reports them separately.
    pub fn initial_ui_state(&self) -> UiState {
        let defaults = UiState::default();
        let p = &self.particles;
        UiState {
            particle_count: p.count as usize,
            particle_size: p.size,
            flow_speed: p.flow_speed,
            interaction_radius: p.interaction_radius,
            bloom_strength: self.effects.bloom_strength,
            color_a: Color::from_hex(&p.color_a).unwrap_or(defaults.color_a),
            color_b: Color::from_hex(&p.color_b).unwrap_or(defaults.color_b),
            model_scale: p.model_scale,
            current_shape: p.initial_shape,
            hand: defaults.hand,
        }
    }
}
