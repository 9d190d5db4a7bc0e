//! Parametric forms: the heart surface and the (2,3) torus knot.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

pub const HEART_SCALE: f32 = 0.35;
pub const KNOT_P: f32 = 2.0;
pub const KNOT_Q: f32 = 3.0;
pub const KNOT_TUBE_RADIUS: f32 = 0.5;
pub const KNOT_SCALE: f32 = 3.0;

/// Classic heart curve swept around its vertical axis, flattened in depth.
///
/// A random radial factor in `[0.7, 1.0]` fills the interior as well as the
/// surface.
pub(crate) fn heart<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let u = rng.gen::<f32>() * TAU;
            let v = rng.gen::<f32>() * PI;
            let fill = 0.7 + rng.gen::<f32>() * 0.3;
            heart_point(u, v) * HEART_SCALE * fill
        })
        .collect()
}

pub fn heart_point(u: f32, v: f32) -> Vec3 {
    let sin3 = u.sin().powi(3);
    Vec3::new(
        16.0 * sin3 * v.sin(),
        13.0 * u.cos() - 5.0 * (2.0 * u).cos() - 2.0 * (3.0 * u).cos() - (4.0 * u).cos(),
        16.0 * sin3 * v.cos() * 0.5,
    )
}

/// Points in a tube around the (p, q) torus knot.
pub(crate) fn torus_knot<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let u = rng.gen::<f32>() * TAU;
            let v = rng.gen::<f32>() * TAU;
            let tube = KNOT_TUBE_RADIUS * (0.6 + rng.gen::<f32>() * 0.4);
            (knot_center(u) + knot_normal(u, v) * tube) * KNOT_SCALE
        })
        .collect()
}

/// Centerline of the knot at parameter `u`.
pub fn knot_center(u: f32) -> Vec3 {
    let (pu, qu) = (KNOT_P * u, KNOT_Q * u);
    let r = 2.0 + qu.cos();
    Vec3::new(r * pu.cos(), r * pu.sin(), -qu.sin())
}

/// Offset direction around the centerline at tube angle `v`.
pub fn knot_normal(u: f32, v: f32) -> Vec3 {
    let (pu, qu) = (KNOT_P * u, KNOT_Q * u);
    Vec3::new(
        v.cos() * pu.cos() - qu.sin() * v.sin() * pu.sin(),
        v.cos() * pu.sin() + qu.sin() * v.sin() * pu.cos(),
        v.sin() * qu.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn heart_tip_and_lobes() {
        // u = π is the bottom tip, u = 0 the notch between the lobes.
        let tip = heart_point(PI, 0.0);
        assert!(tip.x.abs() < 1e-4);
        assert!((tip.y - (-13.0 - 5.0 + 2.0 - 1.0)).abs() < 1e-4);
        let notch = heart_point(0.0, 0.0);
        assert!((notch.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn heart_points_fit_the_scaled_curve() {
        let mut rng = StdRng::seed_from_u64(1);
        for p in heart(500, &mut rng) {
            assert!(p.x.abs() <= 16.0 * HEART_SCALE + 1e-4);
            assert!(p.y >= -17.0 * HEART_SCALE - 1e-4 && p.y <= 13.0 * HEART_SCALE);
            assert!(p.z.abs() <= 8.0 * HEART_SCALE + 1e-4);
        }
    }

    #[test]
    fn knot_points_stay_within_tube() {
        let mut rng = StdRng::seed_from_u64(2);
        // |center| ≤ √(3² + 1) and the tube adds at most 0.5·√2.
        let limit = (10f32.sqrt() + KNOT_TUBE_RADIUS * 2f32.sqrt()) * KNOT_SCALE;
        for p in torus_knot(500, &mut rng) {
            assert!(p.length() <= limit + 1e-3);
        }
    }

    #[test]
    fn knot_closes_after_one_turn() {
        let a = knot_center(0.0);
        let b = knot_center(TAU);
        assert!((a - b).length() < 1e-4);
    }
}
