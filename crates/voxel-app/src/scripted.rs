//! A stand-in hand detector that plays back a fixed choreography.
//!
//! Used when the binary runs headless: the session sees the same landmark
//! stream a camera would produce, so classification, the release trigger,
//! and the force mapper all run for real.
//!
//! It offers two cameras. The hand only shows up on the physical one; the
//! virtual camera sees an empty desk.

use voxel_vision::landmarks::{FINGERS, LANDMARK_COUNT, WRIST};
use voxel_vision::{CameraDevice, HandDetector, Landmark, VisionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Open,
    Fist,
    /// Index and middle extended; classifies as no gesture.
    Neutral,
    /// No hand in frame.
    Absent,
}

#[derive(Debug, Clone, Copy)]
pub struct ScriptStep {
    pub pose: Pose,
    pub duration_ms: u64,
}

const fn step(pose: Pose, duration_ms: u64) -> ScriptStep {
    ScriptStep { pose, duration_ms }
}

/// Show an open hand, crush it, release twice, then leave.
pub const DEFAULT_SCRIPT: [ScriptStep; 7] = [
    step(Pose::Absent, 1000),
    step(Pose::Open, 1500),
    step(Pose::Fist, 1500),
    step(Pose::Open, 1000),
    step(Pose::Fist, 1200),
    step(Pose::Neutral, 800),
    step(Pose::Absent, 1000),
];

pub struct ScriptedDetector {
    script: Vec<ScriptStep>,
    cycle_ms: u64,
    fail_every: Option<u64>,
    calls: u64,
    closed: bool,
    cameras: Vec<CameraDevice>,
    active_camera: Option<CameraDevice>,
}

impl ScriptedDetector {
    pub fn new(script: Vec<ScriptStep>) -> Self {
        let cycle_ms = script.iter().map(|s| s.duration_ms).sum();
        Self {
            script,
            cycle_ms,
            fail_every: None,
            calls: 0,
            closed: false,
            cameras: vec![
                CameraDevice::new("scripted-virtual", "OBS Virtual Camera"),
                CameraDevice::new("scripted-hand", "Scripted Hand Camera"),
            ],
            active_camera: None,
        }
    }

    /// Make every `n`th call fail with an inference error.
    #[cfg(test)]
    pub fn failing_every(mut self, n: u64) -> Self {
        self.fail_every = (n > 0).then_some(n);
        self
    }

    /// Pose at `timestamp_ms` and how far into its step we are (0..1).
    pub fn pose_at(&self, timestamp_ms: u64) -> (Pose, f32) {
        if self.cycle_ms == 0 {
            return (Pose::Absent, 0.0);
        }
        let mut t = timestamp_ms % self.cycle_ms;
        for s in &self.script {
            if t < s.duration_ms {
                return (s.pose, t as f32 / s.duration_ms as f32);
            }
            t -= s.duration_ms;
        }
        (Pose::Absent, 0.0)
    }
}

impl Default for ScriptedDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT.to_vec())
    }
}

impl HandDetector for ScriptedDetector {
    fn detect(&mut self, timestamp_ms: u64) -> Result<Vec<Vec<Landmark>>, VisionError> {
        if self.closed {
            return Err(VisionError::DeviceUnavailable("detector closed".into()));
        }
        self.calls += 1;
        if let Some(n) = self.fail_every {
            if self.calls % n == 0 {
                return Err(VisionError::Inference("scripted failure".into()));
            }
        }
        if self.active_camera.as_ref().is_some_and(CameraDevice::is_virtual) {
            return Ok(Vec::new());
        }
        let (pose, progress) = self.pose_at(timestamp_ms);
        Ok(match pose {
            Pose::Absent => Vec::new(),
            pose => vec![pose_landmarks(pose, progress)],
        })
    }

    fn devices(&self) -> Vec<CameraDevice> {
        self.cameras.clone()
    }

    fn open(&mut self, device: &CameraDevice) -> Result<(), VisionError> {
        if !self.cameras.contains(device) {
            return Err(VisionError::DeviceUnavailable(device.label.clone()));
        }
        self.active_camera = Some(device.clone());
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
        self.active_camera = None;
    }
}

/// Synthesize a hand. The hand drifts left to right and grows (moves
/// closer) over the course of a step.
pub fn pose_landmarks(pose: Pose, progress: f32) -> Vec<Landmark> {
    let extended = match pose {
        Pose::Open => [true; 4],
        Pose::Neutral => [true, true, false, false],
        Pose::Fist | Pose::Absent => [false; 4],
    };
    let progress = progress.clamp(0.0, 1.0);
    let cx = 0.3 + 0.4 * progress;
    let cy = 0.5;
    let s = 0.35 + 0.2 * progress;

    let mut points = vec![Landmark::new(cx, cy, 0.0); LANDMARK_COUNT];
    points[WRIST] = Landmark::new(cx, cy + 0.4 * s, 0.0);

    // Thumb fans out to the side of the palm.
    for j in 1..=4 {
        let f = j as f32 / 4.0;
        points[j] = Landmark::new(cx - 0.3 * s * f, cy + 0.4 * s - 0.2 * s * f, 0.0);
    }

    for (i, &(tip, base)) in FINGERS.iter().enumerate() {
        let x = cx + (i as f32 - 1.5) * 0.15 * s;
        let tip_y = if extended[i] { cy - 0.6 * s } else { cy + 0.05 * s };
        points[base] = Landmark::new(x, cy, 0.0);
        points[base + 1] = Landmark::new(x, cy + (tip_y - cy) / 3.0, 0.0);
        points[base + 2] = Landmark::new(x, cy + (tip_y - cy) * 2.0 / 3.0, 0.0);
        points[tip] = Landmark::new(x, tip_y, 0.0);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxel_common::Gesture;
    use voxel_vision::{Classifier, HandLandmarks};

    fn classify(pose: Pose, progress: f32) -> Gesture {
        let hand = HandLandmarks::from_slice(&pose_landmarks(pose, progress)).unwrap();
        Classifier::default().classify(&hand)
    }

    #[test]
    fn poses_classify_as_intended() {
        for progress in [0.0, 0.5, 1.0] {
            assert_eq!(classify(Pose::Open, progress), Gesture::Open);
            assert_eq!(classify(Pose::Fist, progress), Gesture::Fist);
            assert_eq!(classify(Pose::Neutral, progress), Gesture::None);
        }
    }

    #[test]
    fn hand_gets_closer_over_a_step() {
        let c = Classifier::default();
        let near = HandLandmarks::from_slice(&pose_landmarks(Pose::Open, 1.0)).unwrap();
        let far = HandLandmarks::from_slice(&pose_landmarks(Pose::Open, 0.0)).unwrap();
        assert!(c.hand_distance(&near) > c.hand_distance(&far));
    }

    #[test]
    fn follows_the_script() {
        let d = ScriptedDetector::default();
        assert_eq!(d.pose_at(0).0, Pose::Absent);
        assert_eq!(d.pose_at(1000).0, Pose::Open);
        assert_eq!(d.pose_at(2600).0, Pose::Fist);
        assert_eq!(d.pose_at(4100).0, Pose::Open);
        // Wraps after one full cycle of 8000 ms.
        assert_eq!(d.pose_at(9000).0, Pose::Open);
    }

    #[test]
    fn absent_step_reports_no_hands() {
        let mut d = ScriptedDetector::default();
        assert!(d.detect(10).unwrap().is_empty());
        assert_eq!(d.detect(1200).unwrap().len(), 1);
    }

    #[test]
    fn injected_failures() {
        let mut d = ScriptedDetector::default().failing_every(2);
        assert!(d.detect(0).is_ok());
        assert!(matches!(d.detect(0), Err(VisionError::Inference(_))));
        assert!(d.detect(0).is_ok());
    }

    #[test]
    fn virtual_camera_sees_no_hand() {
        let mut d = ScriptedDetector::default();
        let cameras = d.devices();
        assert_eq!(cameras.len(), 2);
        d.open(&cameras[0]).unwrap();
        assert!(d.detect(1200).unwrap().is_empty());
        d.open(&cameras[1]).unwrap();
        assert_eq!(d.detect(1200).unwrap().len(), 1);
        assert!(d.open(&CameraDevice::new("x", "Elsewhere")).is_err());
    }

    #[test]
    fn closed_detector_errors() {
        let mut d = ScriptedDetector::default();
        d.close();
        assert!(d.closed);
        assert!(matches!(d.detect(0), Err(VisionError::DeviceUnavailable(_))));
    }
}
