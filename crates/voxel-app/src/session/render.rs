//! Render cadence: shape results, morph progress, forces, uniforms.

use std::time::Duration;

use glam::Vec2;
use voxel_engine::field::{self, FieldPoint};

use super::core::Session;

/// Longest step a single wall-clock frame may take.
const MAX_FRAME: Duration = Duration::from_millis(100);

impl Session {
    /// Advance one frame timed against the wall clock, feeding the FPS
    /// readout. Long stalls (startup, a suspended window) count as one
    /// [`MAX_FRAME`] step.
    ///
    /// `pointer` is the pointer in normalized device coordinates, if the
    /// host has one.
    pub fn frame(&mut self, pointer: Option<Vec2>) {
        if self.shutting_down {
            return;
        }
        let dt = self.timer.begin_frame().min(MAX_FRAME);
        self.render_tick(dt, pointer);
    }

    /// Advance one frame of length `dt`. Fixed-step hosts drive the session
    /// through this directly; it does not touch the FPS readout.
    pub fn render_tick(&mut self, dt: Duration, pointer: Option<Vec2>) {
        if self.shutting_down {
            return;
        }
        let dt = dt.as_secs_f32();

        while let Some(result) = self.worker.try_next() {
            self.apply_shape(result);
        }
        self.morph.advance(dt);

        self.forces
            .tick(&self.state.hand, pointer, self.uniforms.aspect_ratio, dt);

        self.uniforms.apply_ui_state(&self.state);
        self.uniforms.update_time(dt);
        self.uniforms.morph = self.morph.eased_progress();
        self.forces.write_uniforms(&mut self.uniforms);
    }

    /// Forward a window resize to the uniforms.
    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) {
        self.uniforms.update_viewport(width, height, pixel_ratio);
    }

    /// Every particle as it would be drawn this frame.
    pub fn preview(&self) -> Vec<FieldPoint> {
        field::evaluate(self.morph.particles(), &self.uniforms)
    }
}
