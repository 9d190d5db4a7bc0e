//! Morphing a fixed particle set between shapes.
//!
//! Shape requests are numbered; only the most recently issued request may
//! install a new target, so a slow generation for an old shape can never
//! overwrite a newer one.

mod controller;


pub use controller::*;

/// Hermite smoothstep of `x` between `edge0` and `edge1`, clamped to `[0, 1]`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
