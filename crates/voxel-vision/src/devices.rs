//! Camera choice: prefer a physical webcam over virtual capture devices.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::detector::VisionError;

/// Name fragments that mark a virtual or screen-capture camera.
const VIRTUAL_KEYWORDS: [&str; 7] = [
    "virtual", "obs", "webcast", "screen", "capture", "manycam", "snap",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraDevice {
    pub id: String,
    pub label: String,
}

impl CameraDevice {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn is_virtual(&self) -> bool {
        let label = self.label.to_lowercase();
        VIRTUAL_KEYWORDS.iter().any(|k| label.contains(k))
    }
}

/// The enumerated cameras and which one is in use.
#[derive(Debug, Clone)]
pub struct DeviceSelector {
    devices: Vec<CameraDevice>,
    current: usize,
}

impl DeviceSelector {
    /// Pick the first physical camera, or the first camera of any kind.
    pub fn new(devices: Vec<CameraDevice>) -> Result<Self, VisionError> {
        if devices.is_empty() {
            return Err(VisionError::DeviceUnavailable("no camera found".into()));
        }
        let current = devices.iter().position(|d| !d.is_virtual()).unwrap_or(0);
        info!(camera = %devices[current].label, count = devices.len(), "Camera selected");
        Ok(Self { devices, current })
    }

    pub fn current(&self) -> &CameraDevice {
        &self.devices[self.current]
    }

    pub fn devices(&self) -> &[CameraDevice] {
        &self.devices
    }

    pub fn can_switch(&self) -> bool {
        self.devices.len() > 1
    }

    /// Advance to the next camera, wrapping. A no-op with a single camera.
    pub fn switch_next(&mut self) -> &CameraDevice {
        if self.can_switch() {
            self.current = (self.current + 1) % self.devices.len();
            info!(camera = %self.devices[self.current].label, "Camera switched");
        }
        self.current()
    }
}
