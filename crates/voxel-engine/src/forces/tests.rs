//! Tests for the force and camera mapping.

use super::*;
use glam::{Vec2, Vec3};
use voxel_common::{Gesture, HandInteractionState};

const DT: f32 = 1.0 / 60.0;

fn hand(gesture: Gesture, distance: f32, position: Vec2) -> HandInteractionState {
    HandInteractionState {
        is_active: true,
        gesture,
        hand_distance: distance,
        pinch_strength: 0.0,
        hand_position: position,
    }
}

fn idle() -> HandInteractionState {
    HandInteractionState::default()
}

// =============================================================================
// damp
// =============================================================================

#[test]
fn damp_moves_fraction_of_gap() {
    let v = damp(0.0, 10.0, 0.1, 3.0);
    assert!((v - 3.0).abs() < 1e-5);
}

#[test]
fn damp_clamps_long_frames_to_target() {
    assert_eq!(damp(0.0, 10.0, 2.0, 3.0), 10.0);
}

#[test]
fn damp_ignores_negative_and_nan_dt() {
    assert_eq!(damp(4.0, 10.0, -1.0, 3.0), 4.0);
    assert_eq!(damp(4.0, 10.0, f32::NAN, 3.0), 4.0);
}

// =============================================================================
// Explode / gather
// =============================================================================

#[test]
fn open_hand_drives_explode_only() {
    let mut dynamics = InteractionDynamics::default();
    let h = hand(Gesture::Open, 1.0, Vec2::splat(0.5));
    for _ in 0..600 {
        dynamics.update(&h, DT);
    }
    assert!((dynamics.explode() - 1.0).abs() < 1e-3);
    assert!(dynamics.gather().abs() < 1e-6);
}

#[test]
fn fist_drives_gather_by_distance() {
    let mut dynamics = InteractionDynamics::default();
    let h = hand(Gesture::Fist, 0.0, Vec2::splat(0.5));
    for _ in 0..600 {
        dynamics.update(&h, DT);
    }
    assert!((dynamics.gather() - 0.5).abs() < 1e-3);
    assert!(dynamics.explode().abs() < 1e-6);
}

#[test]
fn forces_need_an_active_hand() {
    let mut stale = hand(Gesture::Open, 1.0, Vec2::splat(0.5));
    stale.is_active = false;
    assert_eq!(desired_forces(&stale), (0.0, 0.0));
}

#[test]
fn neutral_gesture_releases_both_forces() {
    assert_eq!(
        desired_forces(&hand(Gesture::None, 1.0, Vec2::splat(0.5))),
        (0.0, 0.0)
    );
}

// =============================================================================
// Rotation
// =============================================================================

#[test]
fn inactive_ticks_spin_at_constant_rate_and_decay_forces() {
    let mut dynamics = InteractionDynamics::default();
    let open = hand(Gesture::Open, 1.0, Vec2::new(0.5, 0.9));
    for _ in 0..30 {
        dynamics.update(&open, DT);
    }
    let (mut explode, mut gather) = (dynamics.explode(), dynamics.gather());
    assert!(explode > 0.1);

    let mut yaw = dynamics.yaw();
    let step = DT * 0.2;
    for _ in 0..10 {
        dynamics.update(&idle(), DT);
        assert!((dynamics.yaw() - yaw - step).abs() < 1e-5);
        assert!(dynamics.explode() < explode);
        assert!(dynamics.gather() <= gather);
        yaw = dynamics.yaw();
        explode = dynamics.explode();
        gather = dynamics.gather();
    }
}

#[test]
fn idle_pitch_relaxes_toward_level() {
    let mut dynamics = InteractionDynamics::default();
    let h = hand(Gesture::None, 0.5, Vec2::new(0.5, 1.0));
    for _ in 0..120 {
        dynamics.update(&h, DT);
    }
    let tilted = dynamics.pitch();
    assert!(tilted > 0.5);
    for _ in 0..120 {
        dynamics.update(&idle(), DT);
    }
    assert!(dynamics.pitch().abs() < tilted * 0.1);
}

#[test]
fn hand_position_steers_rotation_targets() {
    let mut dynamics = InteractionDynamics::default();
    let h = hand(Gesture::None, 0.5, Vec2::new(1.0, 0.0));
    for _ in 0..600 {
        dynamics.update(&h, DT);
    }
    // Right edge: +0.75π yaw. Top edge: −0.25π pitch.
    assert!((dynamics.yaw() - 0.75 * std::f32::consts::PI).abs() < 1e-3);
    assert!((dynamics.pitch() + 0.25 * std::f32::consts::PI).abs() < 1e-3);
}

#[test]
fn idle_yaw_keeps_climbing_past_half_turn() {
    let mut dynamics = InteractionDynamics::default();
    let step = 0.1 * 0.2;
    let mut yaw = dynamics.yaw();
    for _ in 0..400 {
        dynamics.update(&idle(), 0.1);
        assert!((dynamics.yaw() - yaw - step).abs() < 1e-4);
        yaw = dynamics.yaw();
    }
    assert!(yaw > 2.0 * std::f32::consts::PI);
}

// =============================================================================
// Camera
// =============================================================================

#[test]
fn camera_rests_at_sixteen() {
    let mut camera = CameraRig::default();
    for _ in 0..100 {
        camera.update(&idle(), DT);
    }
    assert!((camera.distance() - 16.0).abs() < 1e-4);
}

#[test]
fn open_hand_pulls_camera_far_back() {
    let mut camera = CameraRig::default();
    let h = hand(Gesture::Open, 1.0, Vec2::splat(0.5));
    for _ in 0..1200 {
        camera.update(&h, DT);
    }
    assert!((camera.explode_smooth() - 1.0).abs() < 1e-3);
    assert!((camera.distance() - 120.0).abs() < 0.5);
}

#[test]
fn near_fist_pulls_camera_in() {
    let mut camera = CameraRig::default();
    let h = hand(Gesture::Fist, 1.0, Vec2::splat(0.5));
    for _ in 0..1200 {
        camera.update(&h, DT);
    }
    assert!((camera.distance() - 10.0).abs() < 1e-2);
}

#[test]
fn neutral_hand_maps_distance_between_far_and_near() {
    let mut camera = CameraRig::default();
    let h = hand(Gesture::None, 0.5, Vec2::splat(0.5));
    for _ in 0..1200 {
        camera.update(&h, DT);
    }
    assert!((camera.distance() - 16.0).abs() < 1e-2);
}

#[test]
fn explode_level_decays_fastest_for_a_fist() {
    let open = hand(Gesture::Open, 1.0, Vec2::splat(0.5));
    let mut charged = CameraRig::default();
    for _ in 0..600 {
        charged.update(&open, DT);
    }
    let level = charged.explode_smooth();

    let mut idle_hand = open;
    idle_hand.is_active = false;
    let cases = [
        (hand(Gesture::Fist, 0.5, Vec2::splat(0.5)), CameraRig::FIST_RELEASE_RATE),
        (hand(Gesture::None, 0.5, Vec2::splat(0.5)), CameraRig::NEUTRAL_RELEASE_RATE),
        (idle_hand, CameraRig::IDLE_RELEASE_RATE),
    ];
    let mut previous = 0.0;
    for (h, rate) in cases {
        let mut camera = charged.clone();
        camera.update(&h, DT);
        let expected = damp(level, 0.0, DT, rate);
        assert!((camera.explode_smooth() - expected).abs() < 1e-6);
        // Slower release keeps more of the level.
        assert!(camera.explode_smooth() > previous);
        previous = camera.explode_smooth();
    }
}

#[test]
fn camera_lingers_after_open_hand_leaves() {
    let mut camera = CameraRig::default();
    let open = hand(Gesture::Open, 1.0, Vec2::splat(0.5));
    for _ in 0..600 {
        camera.update(&open, DT);
    }
    let mut gone = open;
    gone.is_active = false;
    camera.update(&gone, DT);
    // Still well beyond rest on the first inactive frame.
    assert!(camera.distance() > 60.0);
    for _ in 0..3000 {
        camera.update(&gone, DT);
    }
    assert!((camera.distance() - 16.0).abs() < 0.1);
}

// =============================================================================
// Cursor
// =============================================================================

#[test]
fn cursor_starts_parked() {
    assert_eq!(CursorTracker::default().position(), CURSOR_PARKED);
}

#[test]
fn cursor_unprojects_center_to_origin() {
    let cursor = CursorTracker::new(35.0, 0.1);
    assert_eq!(cursor.unproject(Vec2::ZERO, 16.0, 1.5), Vec3::ZERO);
}

#[test]
fn cursor_unprojects_top_edge_to_half_frustum_height() {
    let cursor = CursorTracker::new(90.0, 0.1);
    let p = cursor.unproject(Vec2::new(0.0, 1.0), 10.0, 1.0);
    assert!((p.y - 10.0).abs() < 1e-4);
    let p = cursor.unproject(Vec2::new(1.0, 0.0), 10.0, 2.0);
    assert!((p.x - 20.0).abs() < 1e-3);
}

#[test]
fn cursor_eases_toward_pointer() {
    let mut cursor = CursorTracker::new(35.0, 0.1);
    cursor.follow(Vec2::ZERO, 16.0, 1.0);
    assert!((cursor.position() - CURSOR_PARKED * 0.9).length() < 1e-2);
    for _ in 0..500 {
        cursor.follow(Vec2::ZERO, 16.0, 1.0);
    }
    assert!(cursor.position().length() < 1e-3);
}

// =============================================================================
// Mapper
// =============================================================================

#[test]
fn mapper_writes_uniforms() {
    let config = voxel_config::VoxelConfig::default();
    let mut mapper = ForceMapper::from_config(&config);
    let h = hand(Gesture::Open, 1.0, Vec2::splat(0.5));
    for _ in 0..10 {
        mapper.tick(&h, Some(Vec2::ZERO), 16.0 / 9.0, DT);
    }
    let mut uniforms = FrameUniforms::from_config(&config);
    mapper.write_uniforms(&mut uniforms);
    assert!(uniforms.explode > 0.0);
    assert_eq!(uniforms.gather, 0.0);
    assert!((uniforms.camera_distance - mapper.camera.distance()).abs() < f32::EPSILON);
    assert_eq!(uniforms.cursor, mapper.cursor.position().to_array());
}
