//! Area-weighted surface sampling over triangle lists.

use glam::Vec3;
use rand::Rng;

use super::ShapeError;

/// One surface triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    pub fn area(&self) -> f32 {
        0.5 * (self.b - self.a).cross(self.c - self.a).length()
    }

    /// Uniform point inside the triangle.
    ///
    /// Draws two barycentric weights and folds the pair back into the
    /// triangle when it lands in the mirrored half of the parallelogram.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let mut u: f32 = rng.gen();
        let mut v: f32 = rng.gen();
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }
        self.a + (self.b - self.a) * u + (self.c - self.a) * v
    }
}

/// Picks triangles with probability proportional to their area, then a
/// uniform point inside the chosen one.
#[derive(Debug, Clone)]
pub struct SurfaceSampler {
    triangles: Vec<Triangle>,
    /// Running sum of areas; `cumulative[i]` covers triangles `0..=i`.
    cumulative: Vec<f32>,
}

impl SurfaceSampler {
    /// Build a sampler, dropping degenerate triangles.
    ///
    /// Fails with [`ShapeError::EmptyOutline`] when no triangle has area.
    pub fn new(triangles: impl IntoIterator<Item = Triangle>) -> Result<Self, ShapeError> {
        let triangles: Vec<Triangle> = triangles
            .into_iter()
            .filter(|t| t.area() > f32::EPSILON)
            .collect();
        if triangles.is_empty() {
            return Err(ShapeError::EmptyOutline);
        }

        let mut running = 0.0;
        let cumulative = triangles
            .iter()
            .map(|t| {
                running += t.area();
                running
            })
            .collect();

        Ok(Self {
            triangles,
            cumulative,
        })
    }

    pub fn total_area(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let pick = rng.gen::<f32>() * self.total_area();
        let idx = self
            .cumulative
            .partition_point(|&c| c <= pick)
            .min(self.triangles.len() - 1);
        self.triangles[idx].sample(rng)
    }
}
