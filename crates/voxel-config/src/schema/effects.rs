//! Post-processing settings handed to the renderer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Bloom brightness (valid range: 0.0-5.0).
    pub bloom_strength: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            bloom_strength: 1.8,
        }
    }
}
