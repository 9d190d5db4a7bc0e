//! Ringed planet: a shell-heavy sphere plus a thin tilted annulus.

use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec3};
use rand::Rng;

pub const SPHERE_RADIUS: f32 = 3.5;
pub const RING_INNER: f32 = 5.0;
pub const RING_OUTER: f32 = 7.5;
/// Full thickness of the ring along its own normal.
pub const RING_THICKNESS: f32 = 0.1;
pub const RING_TILT_DEGREES: f32 = 25.0;

/// Number of points that go to the sphere; the ring takes the rest.
pub fn sphere_share(count: usize) -> usize {
    count * 6 / 10
}

pub(crate) fn planet<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let sphere_count = sphere_share(count);
    let tilt = Quat::from_rotation_x(RING_TILT_DEGREES.to_radians());

    let mut points = Vec::with_capacity(count);
    points.extend((0..sphere_count).map(|_| shell_point(rng)));
    points.extend((sphere_count..count).map(|_| tilt * ring_point(rng)));
    points
}

/// Uniform direction, radius biased toward the outer 15% of the volume.
fn shell_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = TAU * rng.gen::<f32>();
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let r = SPHERE_RADIUS * (0.85 + 0.15 * rng.gen::<f32>()).cbrt();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Point on the flat ring in the XZ plane, before tilting.
fn ring_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let angle = rng.gen::<f32>() * PI * 2.0;
    let radius = RING_INNER + rng.gen::<f32>() * (RING_OUTER - RING_INNER);
    let y = (rng.gen::<f32>() - 0.5) * RING_THICKNESS;
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}
