//! Teardown: stop both cadences, close the detector, drop late results.

use super::core::Session;

impl Session {
    /// Shut down the session. Idempotent.
    ///
    /// Order:
    /// 1. Mark the session as stopping so no tick or dispatch does work
    /// 2. Close the hand detector
    /// 3. Close the shape worker, discarding results that already arrived
    pub fn shutdown(&mut self) {
        if self.shutting_down {
            return;
        }
        tracing::info!("Initiating graceful shutdown");
        self.shutting_down = true;
        self.tracker.close();
        self.worker.close();
        tracing::info!("Graceful shutdown complete");
    }
}
