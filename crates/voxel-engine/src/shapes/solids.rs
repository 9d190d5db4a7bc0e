//! Closed solids sampled over their surface: the square pyramid and the cube.
//!
//! Both are centered on the origin. Sampled points get an extra random depth
//! spread along Z so the flat faces read as a volume from the front.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::sampler::{SurfaceSampler, Triangle};
use super::ShapeError;

pub const PYRAMID_RADIUS: f32 = 5.0;
pub const PYRAMID_HEIGHT: f32 = 7.0;
pub const CUBE_SIZE: f32 = 6.0;
/// Total width of the uniform Z jitter added to solid surface samples.
pub const SOLID_DEPTH_SPREAD: f32 = 2.0;

/// Triangles of a closed cone with `segments` sides, apex up, base capped.
///
/// Base corners sit at `(r·sinθ, −h/2, r·cosθ)` for evenly spaced θ starting
/// at zero, so four segments give a square pyramid with corners on the axes.
pub fn cone_mesh(radius: f32, height: f32, segments: u32) -> Vec<Triangle> {
    let segments = segments.max(3);
    let half = height * 0.5;
    let apex = Vec3::new(0.0, half, 0.0);
    let base_center = Vec3::new(0.0, -half, 0.0);

    let corner = |i: u32| {
        let theta = TAU * i as f32 / segments as f32;
        Vec3::new(radius * theta.sin(), -half, radius * theta.cos())
    };

    let mut triangles = Vec::with_capacity(segments as usize * 2);
    for i in 0..segments {
        let (p0, p1) = (corner(i), corner(i + 1));
        triangles.push(Triangle::new(apex, p0, p1));
        triangles.push(Triangle::new(base_center, p1, p0));
    }
    triangles
}

/// Twelve triangles of an axis-aligned box centered on the origin.
pub fn box_mesh(size: Vec3) -> Vec<Triangle> {
    let h = size * 0.5;
    let v = |x: f32, y: f32, z: f32| Vec3::new(x * h.x, y * h.y, z * h.z);

    // Each face as four corners in winding order.
    let faces = [
        [v(1., -1., -1.), v(1., 1., -1.), v(1., 1., 1.), v(1., -1., 1.)],
        [v(-1., -1., 1.), v(-1., 1., 1.), v(-1., 1., -1.), v(-1., -1., -1.)],
        [v(-1., 1., -1.), v(-1., 1., 1.), v(1., 1., 1.), v(1., 1., -1.)],
        [v(-1., -1., 1.), v(-1., -1., -1.), v(1., -1., -1.), v(1., -1., 1.)],
        [v(-1., -1., 1.), v(1., -1., 1.), v(1., 1., 1.), v(-1., 1., 1.)],
        [v(1., -1., -1.), v(-1., -1., -1.), v(-1., 1., -1.), v(1., 1., -1.)],
    ];

    faces
        .iter()
        .flat_map(|[a, b, c, d]| [Triangle::new(*a, *b, *c), Triangle::new(*a, *c, *d)])
        .collect()
}

pub(crate) fn pyramid<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<Vec3>, ShapeError> {
    let sampler = SurfaceSampler::new(cone_mesh(PYRAMID_RADIUS, PYRAMID_HEIGHT, 4))?;
    Ok(sample_with_depth(&sampler, count, rng))
}

pub(crate) fn cube<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<Vec3>, ShapeError> {
    let sampler = SurfaceSampler::new(box_mesh(Vec3::splat(CUBE_SIZE)))?;
    Ok(sample_with_depth(&sampler, count, rng))
}

fn sample_with_depth<R: Rng + ?Sized>(
    sampler: &SurfaceSampler,
    count: usize,
    rng: &mut R,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let mut p = sampler.sample(rng);
            p.z += (rng.gen::<f32>() - 0.5) * SOLID_DEPTH_SPREAD;
            p
        })
        .collect()
}
