//! CPU reference for the per-particle displacement the renderer applies.
//!
//! Given the frame uniforms and one particle's buffers this reproduces the
//! vertex stage: morph blend, model scale, noise flow, explosion, gather
//! pull, cursor repulsion, and point-size attenuation. Headless previews and
//! CPU fallbacks draw from here.

mod noise;

pub use noise::simplex3;

use glam::{Quat, Vec2, Vec3};

use crate::morph::smoothstep;
use crate::particles::ParticleSet;
use crate::uniforms::FrameUniforms;

/// Distance explosion pushes a particle at full strength, before speed
/// scaling.
pub const EXPLOSION_REACH: f32 = 200.0;
/// Smallest point size in pixels.
pub const MIN_POINT_SIZE: f32 = 2.0;

/// One particle as the renderer would draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPoint {
    /// Model-space position after all forces.
    pub position: Vec3,
    /// Point size in pixels.
    pub size: f32,
    /// Linear RGB before bloom.
    pub color: [f32; 3],
}

/// Noise clock: flow speed makes time run faster.
pub fn flow_time(u: &FrameUniforms) -> f32 {
    u.time * (0.2 + u.flow_speed * 0.8)
}

/// Model orientation for the current yaw and pitch (X applied after Y).
pub fn model_rotation(u: &FrameUniforms) -> Quat {
    Quat::from_rotation_x(u.rotation_pitch) * Quat::from_rotation_y(u.rotation_yaw)
}

/// Morph blend and model scale, before any forces.
pub fn rest_position(u: &FrameUniforms, start: Vec3, target: Vec3) -> Vec3 {
    start.lerp(target, u.morph) * u.model_scale
}

/// Final model-space position of one particle.
pub fn displace(u: &FrameUniforms, start: Vec3, target: Vec3, random: Vec3) -> Vec3 {
    let origin = rest_position(u, start, target);
    let mut pos = origin;

    // Flow, damped while gathering.
    let noise_amp = 1.0 - u.gather * 0.95;
    let time = flow_time(u);
    let turbulence = 0.15 * (0.5 + u.flow_speed * 0.5);
    let n1 = simplex3(Vec3::new(pos.x * 0.3, pos.y * 0.3, time * 0.15));
    let n2 = simplex3(Vec3::new(
        pos.x * 0.8 + 10.0,
        pos.y * 0.8 + time * 0.1,
        time * 0.2,
    ));
    pos.x += n1 * turbulence * noise_amp;
    pos.y += n2 * turbulence * noise_amp;
    pos.z += simplex3(Vec3::new(pos.x * 0.5, pos.y * 0.5, time * 0.1)) * 0.1 * noise_amp;

    pos += explosion_offset(u.explode, origin, random) * (1.0 - u.gather).clamp(0.0, 1.0);
    pos = pos.lerp(origin, u.gather * 0.9);

    pos + cursor_push(u, pos)
}

/// Outward burst for an explode strength; zero below 0.01.
///
/// Each particle flies along a blend of its twisted rest direction and its
/// own random direction, faster the farther it started from the center.
pub fn explosion_offset(explode: f32, origin: Vec3, random: Vec3) -> Vec3 {
    if explode <= 0.01 {
        return Vec3::ZERO;
    }
    let random_dir = (random - Vec3::splat(0.5)).normalize_or_zero();

    // Clockwise about Z, more for particles far from the axis.
    let twist = origin.truncate().length() * explode * 2.0;
    let twisted = Quat::from_rotation_z(-twist) * origin;
    let dir = (twisted + random_dir * 2.0).normalize_or_zero();

    let speed = (1.0 + random.x * 0.5) * (0.8 + origin.length() * 0.3);
    dir * explode * explode * EXPLOSION_REACH * speed + random_dir * explode * 30.0
}

/// Repulsion away from the cursor inside the interaction radius. Disabled
/// while the cloud is gathering.
pub fn cursor_push(u: &FrameUniforms, pos: Vec3) -> Vec3 {
    let cursor = Vec3::from_array(u.cursor);
    let dist = pos.distance(cursor);
    if dist >= u.interaction_radius || u.gather >= 0.1 {
        return Vec3::ZERO;
    }
    let falloff = (u.interaction_radius - dist) / u.interaction_radius;
    (pos - cursor).normalize_or_zero() * falloff * falloff * 3.0
}

/// Point size in pixels for a particle `view_depth` units in front of the
/// camera.
pub fn point_size(u: &FrameUniforms, size: f32, random: Vec3, view_depth: f32) -> f32 {
    let breath = 1.0 + (flow_time(u) * 2.0 + random.x * 10.0).sin() * 0.2;
    let explode_scale = 1.0 + u.explode * 4.0;
    let base = size * breath * explode_scale * u.pixel_ratio * u.size_multiplier;
    (base * 50.0 / view_depth.max(1e-3)).max(MIN_POINT_SIZE)
}

/// Gradient color by distance from the Z axis, warmed and brightened while
/// exploding.
pub fn particle_color(u: &FrameUniforms, axis_distance: f32) -> [f32; 3] {
    let warm = u.explode * 0.8;
    let a = Vec3::from_array(u.color_a).lerp(Vec3::new(1.0, 0.95, 0.7), warm);
    let b = Vec3::from_array(u.color_b).lerp(Vec3::new(1.0, 0.6, 0.2), warm);
    let mix = smoothstep(1.0, 6.0, axis_distance);
    (a.lerp(b, mix) * (1.0 + u.explode * 1.5)).to_array()
}

/// Distance from the camera plane for a model-space position.
pub fn view_depth(u: &FrameUniforms, position: Vec3) -> f32 {
    u.camera_distance - (model_rotation(u) * position).z
}

/// Evaluate every particle.
pub fn evaluate(particles: &ParticleSet, u: &FrameUniforms) -> Vec<FieldPoint> {
    let starts = particles.positions();
    let targets = particles.targets();
    let randoms = particles.random();
    let sizes = particles.sizes();

    (0..particles.len())
        .map(|i| {
            let origin = rest_position(u, starts[i], targets[i]);
            let position = displace(u, starts[i], targets[i], randoms[i]);
            FieldPoint {
                position,
                size: point_size(u, sizes[i], randoms[i], view_depth(u, position)),
                color: particle_color(u, origin.truncate().length()),
            }
        })
        .collect()
}

/// Radius of the smallest origin-centered sphere holding every point.
pub fn extent(points: &[FieldPoint]) -> f32 {
    points
        .iter()
        .map(|p| p.position.length())
        .fold(0.0, f32::max)
}

/// Mean screen-plane offset, a quick read on where the cloud sits.
pub fn centroid_xy(points: &[FieldPoint]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    let sum: Vec2 = points.iter().map(|p| p.position.truncate()).sum();
    sum / points.len() as f32
}
