//! Morph state machine and last-request-wins bookkeeping.

use glam::Vec3;
use tracing::{debug, warn};
use voxel_common::ShapeKind;
use voxel_config::VoxelConfig;

use super::smoothstep;
use crate::particles::ParticleSet;
use crate::shapes::ShapeError;

/// Handle for one shape generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeTicket {
    pub seq: u64,
    pub shape: ShapeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MorphPhase {
    #[default]
    Idle,
    Morphing,
}

/// What happened to a completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOutcome {
    /// New target installed, morph restarted from the visible positions.
    Applied,
    /// A newer request was issued after this one; the points were dropped.
    Stale,
    /// Generation failed or returned the wrong count; the previous target
    /// stays in place.
    Failed,
}

/// Owns the particle buffers and the morph progress.
#[derive(Debug)]
pub struct MorphController {
    particles: ParticleSet,
    progress: f32,
    phase: MorphPhase,
    rate: f32,
    last_seq: u64,
    pending: Option<ShapeTicket>,
    requested: Option<ShapeKind>,
    applied: Option<ShapeKind>,
}

impl MorphController {
    pub const DEFAULT_RATE: f32 = 1.5;

    /// Wrap a particle set. Progress starts complete so nothing moves until
    /// the first target lands.
    pub fn new(particles: ParticleSet, rate: f32) -> Self {
        let rate = if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            Self::DEFAULT_RATE
        };
        Self {
            particles,
            progress: 1.0,
            phase: MorphPhase::Idle,
            rate,
            last_seq: 0,
            pending: None,
            requested: None,
            applied: None,
        }
    }

    pub fn from_config(config: &VoxelConfig, particles: ParticleSet) -> Self {
        Self::new(particles, config.morph.rate)
    }

    /// Issue a ticket if `shape` differs from the last requested shape.
    pub fn sync_shape(&mut self, shape: ShapeKind) -> Option<ShapeTicket> {
        if self.requested == Some(shape) {
            return None;
        }
        Some(self.request(shape))
    }

    /// Issue a ticket for `shape` unconditionally, superseding any pending one.
    pub fn request(&mut self, shape: ShapeKind) -> ShapeTicket {
        self.last_seq += 1;
        let ticket = ShapeTicket {
            seq: self.last_seq,
            shape,
        };
        if let Some(old) = self.pending.replace(ticket) {
            debug!(superseded = old.seq, shape = %old.shape, "shape request superseded");
        }
        self.requested = Some(shape);
        debug!(seq = ticket.seq, shape = %shape, "shape requested");
        ticket
    }

    /// Resolve a ticket with its generation result.
    pub fn complete(
        &mut self,
        ticket: ShapeTicket,
        result: Result<Vec<Vec3>, ShapeError>,
    ) -> MorphOutcome {
        if self.pending != Some(ticket) {
            debug!(seq = ticket.seq, shape = %ticket.shape, "discarding stale shape result");
            return MorphOutcome::Stale;
        }
        self.pending = None;

        let points = match result {
            Ok(points) => points,
            Err(e) => {
                warn!(shape = %ticket.shape, "shape generation failed: {e}");
                self.rollback_request();
                return MorphOutcome::Failed;
            }
        };
        if points.len() != self.particles.len() {
            warn!(
                shape = %ticket.shape,
                expected = self.particles.len(),
                actual = points.len(),
                "shape generation returned the wrong number of points"
            );
            self.rollback_request();
            return MorphOutcome::Failed;
        }

        self.particles.retarget(self.eased_progress(), points);
        self.progress = 0.0;
        self.phase = MorphPhase::Morphing;
        self.applied = Some(ticket.shape);
        debug!(seq = ticket.seq, shape = %ticket.shape, "morph started");
        MorphOutcome::Applied
    }

    /// Forget a failed request so the requested shape is the one on screen
    /// again. Asking for the failed shape later issues a fresh ticket.
    fn rollback_request(&mut self) {
        self.requested = self.applied;
    }

    /// Advance progress by `dt` seconds. Non-finite or negative steps are
    /// ignored.
    pub fn advance(&mut self, dt: f32) {
        if self.phase != MorphPhase::Morphing || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.progress += dt * self.rate;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.phase = MorphPhase::Idle;
        }
    }

    /// Raw progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress after smoothstep easing; the factor renderers interpolate by.
    pub fn eased_progress(&self) -> f32 {
        smoothstep(0.0, 1.0, self.progress)
    }

    pub fn phase(&self) -> MorphPhase {
        self.phase
    }

    pub fn is_morphing(&self) -> bool {
        self.phase == MorphPhase::Morphing
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    /// Ticket still waiting for its result, if any.
    pub fn pending(&self) -> Option<ShapeTicket> {
        self.pending
    }

    /// Shape of the last request that has not failed.
    pub fn requested_shape(&self) -> Option<ShapeKind> {
        self.requested
    }

    /// Shape of the most recently installed target.
    pub fn applied_shape(&self) -> Option<ShapeKind> {
        self.applied
    }

    /// Positions as currently drawn, before scale and forces.
    pub fn visible_positions(&self) -> Vec<Vec3> {
        let t = self.eased_progress();
        (0..self.particles.len())
            .map(|i| self.particles.blended(i, t))
            .collect()
    }
}
