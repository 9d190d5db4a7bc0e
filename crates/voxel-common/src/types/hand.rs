use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Coarse hand pose recognized from landmark geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gesture {
    #[default]
    None,
    Fist,
    Open,
}

impl Gesture {
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::None => "NONE",
            Gesture::Fist => "FIST",
            Gesture::Open => "OPEN",
        }
    }
}

/// The latest hand reading, overwritten every detection cycle.
///
/// Consumers must check `is_active` before trusting the other fields: when
/// no hand is found only `is_active` is cleared and the rest goes stale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandInteractionState {
    pub is_active: bool,
    pub gesture: Gesture,
    /// 0.0 (far) to 1.0 (near).
    pub hand_distance: f32,
    /// Reserved; never populated by the classifier.
    pub pinch_strength: f32,
    /// Mirrored screen-space centroid, each axis 0.0..=1.0.
    pub hand_position: Vec2,
}

impl Default for HandInteractionState {
    fn default() -> Self {
        Self {
            is_active: false,
            gesture: Gesture::None,
            hand_distance: 0.0,
            pinch_strength: 0.0,
            hand_position: Vec2::new(0.5, 0.5),
        }
    }
}

/// Partial update merged into [`HandInteractionState`]; `None` fields are
/// left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandPatch {
    pub is_active: Option<bool>,
    pub gesture: Option<Gesture>,
    pub hand_distance: Option<f32>,
    pub pinch_strength: Option<f32>,
    pub hand_position: Option<Vec2>,
}

impl HandPatch {
    /// Patch emitted when a detection cycle finds no hand.
    pub fn inactive() -> Self {
        Self {
            is_active: Some(false),
            ..Self::default()
        }
    }

    /// Patch emitted for a classified hand.
    pub fn active(gesture: Gesture, hand_distance: f32, hand_position: Vec2) -> Self {
        Self {
            is_active: Some(true),
            gesture: Some(gesture),
            hand_distance: Some(hand_distance),
            pinch_strength: None,
            hand_position: Some(hand_position),
        }
    }
}

impl HandInteractionState {
    pub fn merge(&mut self, patch: HandPatch) {
        if let Some(active) = patch.is_active {
            self.is_active = active;
        }
        if let Some(gesture) = patch.gesture {
            self.gesture = gesture;
        }
        if let Some(d) = patch.hand_distance.filter(|d| d.is_finite()) {
            self.hand_distance = d.clamp(0.0, 1.0);
        }
        if let Some(p) = patch.pinch_strength.filter(|p| p.is_finite()) {
            self.pinch_strength = p.clamp(0.0, 1.0);
        }
        if let Some(pos) = patch.hand_position.filter(|p| p.is_finite()) {
            self.hand_position = pos.clamp(Vec2::ZERO, Vec2::ONE);
        }
    }
}
