//! Detection cadence: throttle, detector, classifier.

use glam::Vec2;
use tracing::{info, warn};
use voxel_common::{Action, HandPatch};
use voxel_config::schema::TrackingConfig;
use voxel_vision::{
    CameraDevice, Classifier, DetectionStats, DetectionThrottle, DeviceSelector, HandDetector,
    HandLandmarks, Landmark, TrackerStatus, VisionError,
};

use super::core::Session;

/// Owns the detector and everything needed to turn its output into a
/// [`HandPatch`].
pub struct Tracker {
    detector: Option<Box<dyn HandDetector>>,
    cameras: Option<DeviceSelector>,
    classifier: Classifier,
    throttle: DetectionThrottle,
    status: TrackerStatus,
    stats: DetectionStats,
    skeleton: Vec<(Vec2, Vec2)>,
}

impl Tracker {
    pub fn new(config: &TrackingConfig, detector: Option<Box<dyn HandDetector>>) -> Self {
        let mut tracker = Self {
            detector: None,
            cameras: None,
            classifier: Classifier::from_config(config),
            throttle: DetectionThrottle::from_config(config),
            status: TrackerStatus::Initializing,
            stats: DetectionStats::default(),
            skeleton: Vec::new(),
        };
        match detector {
            Some(d) if config.enabled => {
                tracker.detector = Some(d);
                if let Err(e) = tracker.open_camera() {
                    warn!("Hand tracking unavailable: {e}");
                    tracker.disable(e.to_string());
                }
            }
            Some(_) => tracker.status = TrackerStatus::Unavailable("tracking disabled".into()),
            None => tracker.status = TrackerStatus::Unavailable("no hand detector".into()),
        }
        match &tracker.status {
            TrackerStatus::Ready => info!(
                interval_ms = config.detect_interval_ms,
                "Hand tracker ready"
            ),
            other => info!(reason = other.label(), "Hand tracking off, auto-rotating"),
        }
        tracker
    }

    /// Pick a camera from whatever the detector enumerates and start it.
    /// Detectors without a camera list are ready as they are.
    fn open_camera(&mut self) -> Result<(), VisionError> {
        let Some(detector) = self.detector.as_mut() else {
            return Ok(());
        };
        let devices = detector.devices();
        if !devices.is_empty() {
            let cameras = DeviceSelector::new(devices)?;
            detector.open(cameras.current())?;
            self.cameras = Some(cameras);
        }
        self.status = TrackerStatus::Ready;
        Ok(())
    }

    /// Move to the next enumerated camera. A no-op without a choice.
    fn switch_camera(&mut self) -> Result<(), VisionError> {
        let (Some(detector), Some(cameras)) = (self.detector.as_mut(), self.cameras.as_mut())
        else {
            return Ok(());
        };
        if !cameras.can_switch() {
            return Ok(());
        }
        detector.open(cameras.switch_next())?;
        self.throttle.reset();
        self.skeleton.clear();
        Ok(())
    }

    pub fn status(&self) -> &TrackerStatus {
        &self.status
    }

    pub fn stats(&self) -> &DetectionStats {
        &self.stats
    }

    /// Camera in use, when the detector offers a choice.
    pub fn camera(&self) -> Option<&CameraDevice> {
        self.cameras.as_ref().map(DeviceSelector::current)
    }

    /// Bones of the first tracked hand for the landmark overlay, in detector
    /// image coordinates. Empty when no hand is in view.
    pub fn skeleton(&self) -> &[(Vec2, Vec2)] {
        &self.skeleton
    }

    /// Run one detection if the throttle allows it.
    ///
    /// `Ok(None)` means nothing ran. Errors are already counted; the caller
    /// decides whether to keep going.
    fn poll(&mut self, now_ms: u64) -> Result<Option<HandPatch>, VisionError> {
        let Some(detector) = self.detector.as_mut() else {
            return Ok(None);
        };
        if !self.throttle.ready(now_ms) {
            return Ok(None);
        }
        let result = detector
            .detect(now_ms)
            .and_then(|hands| {
                let patch = self.classifier.interpret_detection(&hands)?;
                Ok((hands, patch))
            });
        match result {
            Ok((hands, patch)) => {
                self.stats.record_success(hands.len(), now_ms);
                self.skeleton = skeleton_of(&hands);
                Ok(Some(patch))
            }
            Err(e) => {
                self.stats.record_failure();
                Err(e)
            }
        }
    }

    /// Give up on the detector for the rest of the session.
    fn disable(&mut self, reason: String) {
        if let Some(mut detector) = self.detector.take() {
            detector.close();
        }
        self.skeleton.clear();
        self.status = TrackerStatus::Unavailable(reason);
    }

    pub(super) fn close(&mut self) {
        if let Some(mut detector) = self.detector.take() {
            detector.close();
            info!("Hand detector closed");
        }
    }
}

fn skeleton_of(hands: &[Vec<Landmark>]) -> Vec<(Vec2, Vec2)> {
    hands
        .first()
        .and_then(|hand| HandLandmarks::from_slice(hand).ok())
        .map(|hand| hand.bones().collect())
        .unwrap_or_default()
}

impl Session {
    /// Detection cadence. Safe to call every frame.
    pub fn detection_tick(&mut self, now_ms: u64) {
        if self.shutting_down {
            return;
        }
        match self.tracker.poll(now_ms) {
            Ok(Some(patch)) => self.dispatch(Action::UpdateHand(patch)),
            Ok(None) => {}
            Err(e) if e.is_transient() => {
                warn!("Hand detection skipped: {e}");
            }
            Err(e) => self.lose_tracking(e),
        }
    }

    /// The switch-camera button: restart detection on the next camera.
    pub fn switch_camera(&mut self) {
        if self.shutting_down {
            return;
        }
        match self.tracker.switch_camera() {
            Ok(()) => {
                if let Some(camera) = self.tracker.camera() {
                    info!(camera = %camera.label, "Tracking from camera");
                }
            }
            Err(e) => self.lose_tracking(e),
        }
    }

    fn lose_tracking(&mut self, e: VisionError) {
        warn!("Hand tracking unavailable: {e}");
        self.tracker.disable(e.to_string());
        self.dispatch(Action::UpdateHand(HandPatch::inactive()));
    }
}
