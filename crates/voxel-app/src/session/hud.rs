//! Once-per-second status line.

use tracing::{debug, enabled, info, Level};
use voxel_engine::field;

use super::core::Session;

const HUD_INTERVAL_MS: u64 = 1000;

impl Session {
    /// The overlay text: particle count, then gesture details while a hand
    /// is tracked or the auto-rotation notice otherwise.
    pub fn hud_line(&self) -> String {
        let hand = &self.state.hand;
        let mode = if hand.is_active {
            format!(
                "GESTURE: {} | DEPTH: {:.0}% | SHAPE: {}",
                hand.gesture.label(),
                hand.hand_distance * 100.0,
                self.state.current_shape
            )
        } else {
            "AUTO-ROTATION: ACTIVE".to_string()
        };
        format!(
            "{} particles | {} | {:.0} FPS",
            self.state.particle_count,
            mode,
            self.timer.fps()
        )
    }

    /// Log the HUD line if a second has passed since the last one.
    pub fn hud_tick(&mut self, now_ms: u64) {
        if self.shutting_down {
            return;
        }
        let due = self
            .last_hud_ms
            .map_or(true, |last| now_ms.saturating_sub(last) >= HUD_INTERVAL_MS);
        if !due {
            return;
        }
        self.last_hud_ms = Some(now_ms);

        info!("{}", self.hud_line());
        debug!(
            tracker = self.tracker.status().label(),
            stats = %self.tracker.stats().summary(),
            camera_device = self.tracker.camera().map_or("-", |c| c.label.as_str()),
            bones = self.tracker.skeleton().len(),
            morph = self.morph.progress(),
            camera = self.uniforms.camera_distance,
            "frame state"
        );
        if enabled!(Level::TRACE) {
            let points = self.preview();
            tracing::trace!(
                extent = field::extent(&points),
                centroid = ?field::centroid_xy(&points),
                "field preview"
            );
        }
    }
}
