//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod scene;
mod tracking;

#[cfg(test)]
mod tests;

use crate::schema::VoxelConfig;
use voxel_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &VoxelConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    scene::validate_particles(&mut errors, config);
    scene::validate_effects(&mut errors, config);
    scene::validate_morph(&mut errors, config);
    scene::validate_interaction(&mut errors, config);
    scene::validate_camera(&mut errors, config);
    tracking::validate_tracking(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
