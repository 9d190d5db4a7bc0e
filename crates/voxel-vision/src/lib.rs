//! Hand tracking: landmark geometry, gesture classification, the release
//! trigger that picks the next shape, and the detector seam.

pub mod classifier;
pub mod detector;
pub mod devices;
pub mod landmarks;
pub mod release;
pub mod throttle;

pub use classifier::Classifier;
pub use detector::{DetectionStats, HandDetector, TrackerStatus, VisionError};
pub use devices::{CameraDevice, DeviceSelector};
pub use landmarks::{HandLandmarks, Landmark, HAND_CONNECTIONS, LANDMARK_COUNT};
pub use release::{pick_next_shape, ReleaseWatcher};
pub use throttle::DetectionThrottle;
