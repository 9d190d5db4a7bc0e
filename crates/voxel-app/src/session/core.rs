//! Session struct, construction, and action dispatch.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use voxel_common::{Action, UiState};
use voxel_config::VoxelConfig;
use voxel_engine::{
    ForceMapper, FrameTimer, FrameUniforms, MorphController, MorphOutcome, ParticleSet,
};
use voxel_vision::{HandDetector, ReleaseWatcher};

use super::tracking::Tracker;
use crate::worker::{ShapeResult, ShapeWorker};

// =============================================================================
// SESSION
// =============================================================================

pub struct Session {
    pub(super) state: UiState,
    pub(super) morph: MorphController,
    pub(super) forces: ForceMapper,
    pub(super) uniforms: FrameUniforms,
    pub(super) worker: ShapeWorker,
    pub(super) tracker: Tracker,
    pub(super) release: ReleaseWatcher,
    pub(super) rng: StdRng,
    pub(super) timer: FrameTimer,
    pub(super) last_hud_ms: Option<u64>,
    pub(super) shutting_down: bool,
}

impl Session {
    /// Build a session and request the configured starting shape.
    pub fn new(
        config: &VoxelConfig,
        detector: Option<Box<dyn HandDetector>>,
        worker: ShapeWorker,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = config.initial_ui_state();
        let particles = ParticleSet::new(state.particle_count, &mut rng);
        info!(
            particles = state.particle_count,
            shape = %state.current_shape,
            seed,
            "Session created"
        );

        let mut session = Self {
            morph: MorphController::from_config(config, particles),
            forces: ForceMapper::from_config(config),
            uniforms: FrameUniforms::from_config(config),
            tracker: Tracker::new(&config.tracking, detector),
            release: ReleaseWatcher::new(),
            timer: FrameTimer::new(),
            last_hud_ms: None,
            shutting_down: false,
            state,
            worker,
            rng,
        };
        session.sync_shape();
        session
    }

    /// Apply one action, then react to what changed.
    ///
    /// A hand update may complete a fist release, which dispatches a new
    /// shape; a shape change issues a generation request.
    pub fn dispatch(&mut self, action: Action) {
        if self.shutting_down {
            return;
        }
        debug!(action = action.label(), "dispatch");
        self.state.apply(action);
        match action {
            Action::UpdateHand(_) => self.check_release(),
            Action::SetShape(_) => self.sync_shape(),
            _ => {}
        }
    }

    fn check_release(&mut self) {
        let next = self.release.next_shape(
            self.state.hand.gesture,
            self.state.current_shape,
            &mut self.rng,
        );
        if let Some(shape) = next {
            self.dispatch(Action::SetShape(shape));
        }
    }

    fn sync_shape(&mut self) {
        if let Some(ticket) = self.morph.sync_shape(self.state.current_shape) {
            self.worker.submit(ticket);
        }
    }

    /// Hand a finished generation to the morph controller.
    ///
    /// On failure the UI state goes back to the shape still on screen.
    pub fn apply_shape(&mut self, (ticket, result): ShapeResult) -> Option<MorphOutcome> {
        if self.shutting_down {
            return None;
        }
        let outcome = self.morph.complete(ticket, result);
        match outcome {
            MorphOutcome::Applied => info!(shape = %ticket.shape, "Morphing"),
            MorphOutcome::Failed => {
                if let Some(shown) = self.morph.applied_shape() {
                    info!(failed = %ticket.shape, kept = %shown, "Keeping current shape");
                    // Controller already rolled back, so no new request.
                    self.state.apply(Action::SetShape(shown));
                }
            }
            MorphOutcome::Stale => {}
        }
        Some(outcome)
    }

    /// Wait for the next generation to finish and apply it.
    ///
    /// Returns `None` once the worker is closed.
    pub async fn settle(&mut self) -> Option<MorphOutcome> {
        if self.shutting_down {
            return None;
        }
        let result = self.worker.next().await?;
        self.apply_shape(result)
    }

    // -------------------------------------------------------------------------
    // Accessors for the rendering collaborator
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn uniforms(&self) -> &FrameUniforms {
        &self.uniforms
    }

    pub fn morph(&self) -> &MorphController {
        &self.morph
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}
