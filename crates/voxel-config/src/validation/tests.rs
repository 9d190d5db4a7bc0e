//! Tests for the full validation pipeline.

use super::*;
use crate::schema::VoxelConfig;

#[test]
fn default_config_validates() {
    let config = VoxelConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_particle_count_too_small() {
    let mut config = VoxelConfig::default();
    config.particles.count = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("particles.count"));
}

#[test]
fn catches_particle_count_too_large() {
    let mut config = VoxelConfig::default();
    config.particles.count = 1_000_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("particles.count"));
}

#[test]
fn catches_model_scale_out_of_range() {
    let mut config = VoxelConfig::default();
    config.particles.model_scale = 3.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("particles.model_scale"));
}

#[test]
fn catches_nan_flow_speed() {
    let mut config = VoxelConfig::default();
    config.particles.flow_speed = f32::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("particles.flow_speed"));
}

#[test]
fn catches_bad_color() {
    let mut config = VoxelConfig::default();
    config.particles.color_b = "purple".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("particles.color_b"));
}

#[test]
fn catches_bloom_too_strong() {
    let mut config = VoxelConfig::default();
    config.effects.bloom_strength = 6.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("effects.bloom_strength"));
}

#[test]
fn catches_zero_morph_rate() {
    let mut config = VoxelConfig::default();
    config.morph.rate = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("morph.rate"));
}

#[test]
fn catches_negative_camera_response() {
    let mut config = VoxelConfig::default();
    config.camera.response = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.response"));
}

#[test]
fn catches_detect_interval_too_short() {
    let mut config = VoxelConfig::default();
    config.tracking.detect_interval_ms = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("tracking.detect_interval_ms"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = VoxelConfig::default();
    config.particles.size = 0.0;
    config.tracking.extension_ratio = 0.5;
    config.interaction.cursor_follow = 2.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("particles.size"));
    assert!(err.contains("tracking.extension_ratio"));
    assert!(err.contains("interaction.cursor_follow"));
}
