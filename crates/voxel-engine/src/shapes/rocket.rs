//! Rocket: hull, nose cone, four fins, and an exhaust plume.
//!
//! Sub-populations are emitted in a fixed order (body, nose, fins, flame).
//! The flame takes whatever the floored shares leave over, so the total is
//! always exactly the requested count.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
use rand::Rng;

pub const BODY_RADIUS: f32 = 1.0;
pub const BODY_HEIGHT: f32 = 5.0;
pub const FIN_COUNT: usize = 4;

/// Point counts for each part of the rocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RocketSplit {
    pub body: usize,
    pub nose: usize,
    /// Per fin; the last fin also takes `fins_total % FIN_COUNT`.
    pub fins: [usize; FIN_COUNT],
    pub flame: usize,
}

impl RocketSplit {
    pub fn for_count(count: usize) -> Self {
        let body = count * 45 / 100;
        let nose = count * 15 / 100;
        let fins_total = count * 18 / 100;
        let per_fin = fins_total / FIN_COUNT;
        let mut fins = [per_fin; FIN_COUNT];
        fins[FIN_COUNT - 1] += fins_total - per_fin * FIN_COUNT;
        Self {
            body,
            nose,
            fins,
            flame: count - body - nose - fins_total,
        }
    }

    pub fn total(&self) -> usize {
        self.body + self.nose + self.fins.iter().sum::<usize>() + self.flame
    }
}

pub(crate) fn rocket<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let split = RocketSplit::for_count(count);
    let mut points = Vec::with_capacity(count);

    points.extend((0..split.body).map(|_| body_point(rng)));
    points.extend((0..split.nose).map(|_| nose_point(rng)));
    for (fin, &n) in split.fins.iter().enumerate() {
        let angle = fin as f32 / FIN_COUNT as f32 * TAU;
        points.extend((0..n).map(|_| fin_point(angle, rng)));
    }
    points.extend((0..split.flame).map(|_| flame_point(rng)));

    points
}

/// Cylinder hull, mostly near the skin.
fn body_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let angle = rng.gen::<f32>() * TAU;
    let r = BODY_RADIUS * (0.8 + rng.gen::<f32>() * 0.2).sqrt();
    let h = (rng.gen::<f32>() - 0.5) * BODY_HEIGHT;
    Vec3::new(angle.cos() * r, h, angle.sin() * r)
}

/// Cone from the top of the hull (y = 2.5) up to the tip (y = 5.5).
fn nose_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let t = rng.gen::<f32>();
    let angle = rng.gen::<f32>() * TAU;
    let r = t * BODY_RADIUS;
    let h = 2.5 + (1.0 - t) * 3.0;
    Vec3::new(
        angle.cos() * r * (0.9 + rng.gen::<f32>() * 0.1),
        h,
        angle.sin() * r * (0.9 + rng.gen::<f32>() * 0.1),
    )
}

/// Thin triangular fin pointing outward along `angle`.
fn fin_point<R: Rng + ?Sized>(angle: f32, rng: &mut R) -> Vec3 {
    let t = rng.gen::<f32>();
    let s = rng.gen::<f32>();
    let reach = (1.0 - t) * 0.2 + t * 1.8;
    let y = -2.5 + s * 2.0 * (1.0 - t * 0.7);
    let thickness = (rng.gen::<f32>() - 0.5) * 0.15;
    let side = angle + FRAC_PI_2;
    Vec3::new(
        angle.cos() * reach + side.cos() * thickness,
        y,
        angle.sin() * reach + side.sin() * thickness,
    )
}

/// Tapering plume below the hull, jittered radially.
fn flame_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let t = rng.gen::<f32>();
    let angle = rng.gen::<f32>() * TAU;
    let r = (1.0 - t * 0.7) * 0.9 + (rng.gen::<f32>() - 0.5) * 0.4;
    let y = -2.5 - t * 4.5;
    Vec3::new(angle.cos() * r, y, angle.sin() * r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn split_sums_to_count() {
        for count in [0, 1, 7, 99, 1001, 30_000, 30_003] {
            assert_eq!(RocketSplit::for_count(count).total(), count, "count {count}");
        }
    }

    #[test]
    fn fin_remainder_goes_to_last_fin() {
        // 18% of 1000 = 180 → 45 each; of 1010 = 181 → 45, 45, 45, 46.
        assert_eq!(RocketSplit::for_count(1000).fins, [45; 4]);
        assert_eq!(RocketSplit::for_count(1010).fins, [45, 45, 45, 46]);
    }

    #[test]
    fn parts_occupy_their_height_bands() {
        let count = 2000;
        let split = RocketSplit::for_count(count);
        let mut rng = StdRng::seed_from_u64(4);
        let points = rocket(count, &mut rng);
        assert_eq!(points.len(), count);

        let (body, rest) = points.split_at(split.body);
        let (nose, rest) = rest.split_at(split.nose);
        let fins_total: usize = split.fins.iter().sum();
        let (fins, flame) = rest.split_at(fins_total);

        assert!(body.iter().all(|p| p.y.abs() <= 2.5 + 1e-4));
        assert!(nose.iter().all(|p| p.y >= 2.5 - 1e-4 && p.y <= 5.5 + 1e-4));
        assert!(fins.iter().all(|p| p.y >= -2.5 - 1e-4 && p.y <= -0.5 + 1e-4));
        assert!(flame.iter().all(|p| p.y <= -2.5 + 1e-4 && p.y >= -7.0 - 1e-4));
    }
}
