//! The seam between the control loop and whatever produces landmarks.

use crate::devices::CameraDevice;
use crate::landmarks::Landmark;

#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("camera unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("hand detector failed to initialize: {0}")]
    DetectorInit(String),

    #[error("hand inference failed: {0}")]
    Inference(String),

    #[error("malformed hand: expected 21 landmarks, got {0}")]
    MalformedHand(usize),
}

impl VisionError {
    /// Whether the tracker should skip this cycle and keep going.
    ///
    /// Device and init failures disable tracking for the session.
    pub fn is_transient(&self) -> bool {
        matches!(self, VisionError::Inference(_) | VisionError::MalformedHand(_))
    }
}

impl From<VisionError> for voxel_common::VoxelError {
    fn from(err: VisionError) -> Self {
        voxel_common::VoxelError::Vision(err.to_string())
    }
}

/// A source of hand landmarks, polled with the current video timestamp.
pub trait HandDetector: Send {
    /// Run one detection on the frame at `timestamp_ms`.
    ///
    /// Returns zero or more hands; each hand should hold 21 landmarks.
    fn detect(&mut self, timestamp_ms: u64) -> Result<Vec<Vec<Landmark>>, VisionError>;

    /// Cameras this detector can read from. Empty for a fixed source.
    fn devices(&self) -> Vec<CameraDevice> {
        Vec::new()
    }

    /// Switch the video stream to `device`, releasing the previous one.
    fn open(&mut self, _device: &CameraDevice) -> Result<(), VisionError> {
        Ok(())
    }

    /// Release the camera and model. Called once at teardown.
    fn close(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrackerStatus {
    #[default]
    Initializing,
    Ready,
    Unavailable(String),
}

impl TrackerStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, TrackerStatus::Ready)
    }

    pub fn label(&self) -> &str {
        match self {
            TrackerStatus::Initializing => "initializing",
            TrackerStatus::Ready => "ready",
            TrackerStatus::Unavailable(reason) => reason,
        }
    }
}

/// Running counters for the debug overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectionStats {
    /// Hands in the most recent successful detection.
    pub hands: usize,
    pub last_timestamp_ms: Option<u64>,
    pub detections: u64,
    pub failures: u64,
}

impl DetectionStats {
    pub fn record_success(&mut self, hands: usize, timestamp_ms: u64) {
        self.hands = hands;
        self.last_timestamp_ms = Some(timestamp_ms);
        self.detections += 1;
    }

    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    pub fn summary(&self) -> String {
        match self.last_timestamp_ms {
            Some(ts) => format!("Hands: {} | Time: {ts}", self.hands),
            None => "Hands: 0 | Time: -".to_string(),
        }
    }
}
