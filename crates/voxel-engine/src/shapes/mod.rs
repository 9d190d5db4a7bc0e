//! Target point distributions for every [`ShapeKind`].
//!
//! Generation is pure: the caller supplies the RNG, so a seeded RNG gives
//! reproducible output. Every shape returns exactly the requested number of
//! points; shapes built from sub-populations give the remainder of the
//! floored shares to the last one.

mod glyph;
mod organic;
mod planet;
mod rocket;
mod sampler;
mod solids;


use std::path::PathBuf;
use std::sync::Arc;

use glam::Vec3;
use rand::Rng;
use voxel_common::ShapeKind;

pub use glyph::{triangulate, GlyphOutline, GLYPH_DEPTH_SPREAD};
pub use organic::{heart_point, knot_center, knot_normal};
pub use planet::{sphere_share, RING_INNER, RING_OUTER, RING_TILT_DEGREES, SPHERE_RADIUS};
pub use rocket::RocketSplit;
pub use sampler::{SurfaceSampler, Triangle};
pub use solids::{box_mesh, cone_mesh};

/// Errors raised while preparing or generating a shape.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("failed to read glyph asset {path}: {source}")]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse glyph asset: {0}")]
    Parse(String),

    #[error("outline has no fillable area")]
    EmptyOutline,

    #[error("{shape} produced {actual} points, expected {expected}")]
    CountMismatch {
        shape: ShapeKind,
        expected: usize,
        actual: usize,
    },
}

/// Shape generator with the glyph outline triangulated up front.
///
/// Cheap to clone; the prepared sampler is shared, so a clone can be moved
/// onto a worker thread.
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    glyph: Arc<SurfaceSampler>,
}

impl ShapeGenerator {
    pub fn new(outline: &GlyphOutline) -> Result<Self, ShapeError> {
        Ok(Self {
            glyph: Arc::new(outline.sampler()?),
        })
    }

    /// Generator using the built-in "36" outline.
    pub fn builtin() -> Result<Self, ShapeError> {
        Self::new(&GlyphOutline::builtin())
    }

    /// Exactly `count` points forming `shape`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        shape: ShapeKind,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec3>, ShapeError> {
        let points = match shape {
            ShapeKind::Glyph => glyph::glyph(&self.glyph, count, rng),
            ShapeKind::Pyramid => solids::pyramid(count, rng)?,
            ShapeKind::Cube => solids::cube(count, rng)?,
            ShapeKind::Planet => planet::planet(count, rng),
            ShapeKind::Rocket => rocket::rocket(count, rng),
            ShapeKind::Mobius => organic::torus_knot(count, rng),
            ShapeKind::Heart => organic::heart(count, rng),
        };

        if points.len() != count {
            return Err(ShapeError::CountMismatch {
                shape,
                expected: count,
                actual: points.len(),
            });
        }
        Ok(points)
    }
}

/// One-shot generation with the built-in glyph.
pub fn generate<R: Rng + ?Sized>(
    shape: ShapeKind,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Vec3>, ShapeError> {
    ShapeGenerator::builtin()?.generate(shape, count, rng)
}
