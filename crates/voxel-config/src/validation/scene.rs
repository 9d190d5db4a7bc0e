//! Validation for the particle, effects, morph, interaction, and camera
//! sections.

use crate::schema::VoxelConfig;

use super::helpers::{validate_hex_color, validate_positive, validate_range, validate_range_f32};

pub(crate) fn validate_particles(errors: &mut Vec<String>, config: &VoxelConfig) {
    let p = &config.particles;
    validate_range(errors, "particles.count", p.count, 1000, 200_000);
    validate_range_f32(errors, "particles.size", p.size, 0.1, 3.0);
    validate_range_f32(errors, "particles.flow_speed", p.flow_speed, 0.0, 5.0);
    validate_range_f32(
        errors,
        "particles.interaction_radius",
        p.interaction_radius,
        0.0,
        10.0,
    );
    validate_range_f32(errors, "particles.model_scale", p.model_scale, 0.5, 2.5);
    validate_hex_color(errors, "particles.color_a", &p.color_a);
    validate_hex_color(errors, "particles.color_b", &p.color_b);
}

pub(crate) fn validate_effects(errors: &mut Vec<String>, config: &VoxelConfig) {
    validate_range_f32(
        errors,
        "effects.bloom_strength",
        config.effects.bloom_strength,
        0.0,
        5.0,
    );
}

pub(crate) fn validate_morph(errors: &mut Vec<String>, config: &VoxelConfig) {
    validate_range_f32(errors, "morph.rate", config.morph.rate, 0.1, 10.0);
}

pub(crate) fn validate_interaction(errors: &mut Vec<String>, config: &VoxelConfig) {
    let i = &config.interaction;
    validate_positive(errors, "interaction.force_response", i.force_response);
    validate_positive(errors, "interaction.rotation_response", i.rotation_response);
    validate_positive(errors, "interaction.pitch_relax", i.pitch_relax);
    validate_range_f32(errors, "interaction.yaw_range", i.yaw_range, 0.0, 4.0);
    validate_range_f32(errors, "interaction.pitch_range", i.pitch_range, 0.0, 2.0);
    validate_range_f32(errors, "interaction.idle_yaw_speed", i.idle_yaw_speed, -5.0, 5.0);
    validate_range_f32(errors, "interaction.cursor_follow", i.cursor_follow, 0.0, 1.0);
}

/// Validate camera constraints.
pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &VoxelConfig) {
    let c = &config.camera;
    validate_range_f32(errors, "camera.fov_degrees", c.fov_degrees, 10.0, 120.0);
    validate_positive(errors, "camera.rest_distance", c.rest_distance);
    validate_positive(errors, "camera.open_distance", c.open_distance);
    validate_positive(errors, "camera.fist_distance", c.fist_distance);
    validate_positive(errors, "camera.neutral_far", c.neutral_far);
    validate_positive(errors, "camera.neutral_near", c.neutral_near);
    validate_positive(errors, "camera.open_response", c.open_response);
    validate_positive(errors, "camera.response", c.response);
    validate_range_f32(errors, "camera.linger", c.linger, 0.0, 500.0);
}
