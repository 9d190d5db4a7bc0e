//! Rate limit for detector calls.
//!
//! Opportunities that arrive inside the interval are dropped, never queued.

use voxel_config::schema::TrackingConfig;

#[derive(Debug, Clone, Copy)]
pub struct DetectionThrottle {
    interval_ms: u64,
    last_fired_ms: Option<u64>,
}

impl DetectionThrottle {
    pub const DEFAULT_INTERVAL_MS: u64 = 50;

    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fired_ms: None,
        }
    }

    pub fn from_config(config: &TrackingConfig) -> Self {
        Self::new(u64::from(config.detect_interval_ms))
    }

    /// Returns `true` and records `now_ms` when a detection may run.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        let due = match self.last_fired_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        };
        if due {
            self.last_fired_ms = Some(now_ms);
        }
        due
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn last_fired_ms(&self) -> Option<u64> {
        self.last_fired_ms
    }

    pub fn reset(&mut self) {
        self.last_fired_ms = None;
    }
}

impl Default for DetectionThrottle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS)
    }
}
