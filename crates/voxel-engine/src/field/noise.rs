//! 3D simplex noise (the Ashima Arts / Stefan Gustavson formulation).
//!
//! Uses the mod-289 permutation polynomial instead of a lookup table, so the
//! CPU result matches the GPU shader bit-for-bit up to float rounding.

use glam::{Vec3, Vec4};

fn mod289_3(x: Vec3) -> Vec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

fn mod289_4(x: Vec4) -> Vec4 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

fn permute(x: Vec4) -> Vec4 {
    mod289_4((x * 34.0 + Vec4::ONE) * x)
}

fn taylor_inv_sqrt(r: Vec4) -> Vec4 {
    Vec4::splat(1.792_842_9) - r * 0.853_734_7
}

/// GLSL `step(edge, x)`.
fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Simplex noise in roughly `[-1, 1]`.
pub fn simplex3(v: Vec3) -> f32 {
    const C_X: f32 = 1.0 / 6.0;
    const C_Y: f32 = 1.0 / 3.0;

    // Skew into the simplex grid and find the first corner.
    let i = (v + Vec3::splat(v.element_sum() * C_Y)).floor();
    let x0 = v - i + Vec3::splat(i.element_sum() * C_X);

    // Rank the offsets to pick the other two corners.
    let g = Vec3::new(step(x0.y, x0.x), step(x0.z, x0.y), step(x0.x, x0.z));
    let l = Vec3::ONE - g;
    let l_zxy = Vec3::new(l.z, l.x, l.y);
    let i1 = g.min(l_zxy);
    let i2 = g.max(l_zxy);

    let x1 = x0 - i1 + Vec3::splat(C_X);
    let x2 = x0 - i2 + Vec3::splat(C_Y);
    let x3 = x0 - Vec3::splat(0.5);

    let i = mod289_3(i);
    let p = permute(
        permute(
            permute(Vec4::splat(i.z) + Vec4::new(0.0, i1.z, i2.z, 1.0))
                + Vec4::splat(i.y)
                + Vec4::new(0.0, i1.y, i2.y, 1.0),
        ) + Vec4::splat(i.x)
            + Vec4::new(0.0, i1.x, i2.x, 1.0),
    );

    // Gradients on a 7x7 grid mapped onto an octahedron.
    let n = 1.0 / 7.0;
    let ns = Vec3::new(2.0 * n, 0.5 * n - 1.0, n);

    let j = p - (p * ns.z * ns.z).floor() * 49.0;
    let x_ = (j * ns.z).floor();
    let y_ = (j - x_ * 7.0).floor();

    let x = x_ * ns.x + Vec4::splat(ns.y);
    let y = y_ * ns.x + Vec4::splat(ns.y);
    let h = Vec4::ONE - x.abs() - y.abs();

    let b0 = Vec4::new(x.x, x.y, y.x, y.y);
    let b1 = Vec4::new(x.z, x.w, y.z, y.w);
    let s0 = b0.floor() * 2.0 + Vec4::ONE;
    let s1 = b1.floor() * 2.0 + Vec4::ONE;
    let sh = -Vec4::new(step(h.x, 0.0), step(h.y, 0.0), step(h.z, 0.0), step(h.w, 0.0));

    let a0 = Vec4::new(b0.x, b0.z, b0.y, b0.w)
        + Vec4::new(s0.x, s0.z, s0.y, s0.w) * Vec4::new(sh.x, sh.x, sh.y, sh.y);
    let a1 = Vec4::new(b1.x, b1.z, b1.y, b1.w)
        + Vec4::new(s1.x, s1.z, s1.y, s1.w) * Vec4::new(sh.z, sh.z, sh.w, sh.w);

    let p0 = Vec3::new(a0.x, a0.y, h.x);
    let p1 = Vec3::new(a0.z, a0.w, h.y);
    let p2 = Vec3::new(a1.x, a1.y, h.z);
    let p3 = Vec3::new(a1.z, a1.w, h.w);

    let norm = taylor_inv_sqrt(Vec4::new(
        p0.length_squared(),
        p1.length_squared(),
        p2.length_squared(),
        p3.length_squared(),
    ));
    let (p0, p1, p2, p3) = (p0 * norm.x, p1 * norm.y, p2 * norm.z, p3 * norm.w);

    // Radial falloff per corner.
    let m = (Vec4::splat(0.6)
        - Vec4::new(
            x0.length_squared(),
            x1.length_squared(),
            x2.length_squared(),
            x3.length_squared(),
        ))
    .max(Vec4::ZERO);
    let m = m * m;

    42.0 * (m * m).dot(Vec4::new(p0.dot(x0), p1.dot(x1), p2.dot(x2), p3.dot(x3)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn stays_roughly_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..10_000 {
            let v = Vec3::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
            );
            let n = simplex3(v);
            assert!(n.is_finite());
            assert!(n.abs() <= 1.1, "noise({v:?}) = {n}");
        }
    }

    #[test]
    fn is_deterministic() {
        let v = Vec3::new(1.3, -2.7, 0.45);
        assert_eq!(simplex3(v), simplex3(v));
    }

    #[test]
    fn is_continuous() {
        let v = Vec3::new(3.1, 0.2, -1.7);
        let d = Vec3::splat(1e-3);
        assert!((simplex3(v) - simplex3(v + d)).abs() < 0.05);
    }

    #[test]
    fn is_not_constant() {
        let samples: Vec<f32> = (0..32)
            .map(|i| simplex3(Vec3::new(i as f32 * 0.37, 0.5, 0.25)))
            .collect();
        let spread = samples.iter().cloned().fold(f32::MIN, f32::max)
            - samples.iter().cloned().fold(f32::MAX, f32::min);
        assert!(spread > 0.3);
    }
}
