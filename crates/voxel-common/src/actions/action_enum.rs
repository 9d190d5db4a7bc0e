use serde::{Deserialize, Serialize};

use crate::types::{Color, HandPatch, ShapeKind};

/// Every transition the shared [`UiState`](crate::state::UiState) accepts.
///
/// Sliders, the gesture pipeline, and the release watcher all resolve to an
/// `Action`; nothing mutates the state any other way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    // -- Appearance --
    SetFlowSpeed(f32),
    SetInteractionRadius(f32),
    SetBloomStrength(f32),
    SetParticleSize(f32),
    SetModelScale(f32),
    SetColors { a: Color, b: Color },

    // -- Form --
    SetShape(ShapeKind),

    // -- Vision --
    #[serde(rename = "UPDATE_HAND_STATE")]
    UpdateHand(HandPatch),
}
