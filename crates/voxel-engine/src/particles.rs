//! Fixed-size particle buffers.
//!
//! The set owns the start (`positions`) and destination (`targets`) buffers
//! the morph interpolates between, plus per-particle constants assigned
//! once at creation. Index identity is stable for the whole session.

use glam::Vec3;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct ParticleSet {
    positions: Vec<Vec3>,
    targets: Vec<Vec3>,
    random: Vec<Vec3>,
    sizes: Vec<f32>,
}

impl ParticleSet {
    /// `count` particles at the origin with fresh random attributes.
    ///
    /// Each particle gets three independent uniform values in `[0, 1)` and a
    /// size in `[0.5, 2.5)`.
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let random = (0..count)
            .map(|_| Vec3::new(rng.gen(), rng.gen(), rng.gen()))
            .collect();
        let sizes = (0..count).map(|_| rng.gen::<f32>() * 2.0 + 0.5).collect();
        Self {
            positions: vec![Vec3::ZERO; count],
            targets: vec![Vec3::ZERO; count],
            random,
            sizes,
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    pub fn random(&self) -> &[Vec3] {
        &self.random
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Start buffer as a flat `xyz` float slice for upload.
    pub fn position_floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.positions.as_slice())
    }

    pub fn target_floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.targets.as_slice())
    }

    pub fn random_floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.random.as_slice())
    }

    /// Where particle `i` is drawn for an eased morph factor `t`.
    pub fn blended(&self, i: usize, t: f32) -> Vec3 {
        self.positions[i].lerp(self.targets[i], t)
    }

    /// Replace the start buffer with the positions visible at eased factor
    /// `t`, then install `next` as the new destination.
    ///
    /// `next` must have exactly [`len`](Self::len) points; the morph
    /// controller checks this before calling.
    pub(crate) fn retarget(&mut self, t: f32, next: Vec<Vec3>) {
        debug_assert_eq!(next.len(), self.len());
        for (start, target) in self.positions.iter_mut().zip(&self.targets) {
            *start = start.lerp(*target, t);
        }
        self.targets = next;
    }
}
