//! The single mutable root shared by the control loop and every consumer.
//!
//! [`UiState`] changes only through [`UiState::apply`]. Each transition is
//! total: out-of-range slider values are clamped to the control-panel range
//! and non-finite values are ignored, so any `Action` leaves a valid state.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::types::{Color, HandInteractionState, ShapeKind};

pub const FLOW_SPEED_RANGE: RangeInclusive<f32> = 0.0..=5.0;
pub const INTERACTION_RADIUS_RANGE: RangeInclusive<f32> = 0.0..=10.0;
pub const BLOOM_STRENGTH_RANGE: RangeInclusive<f32> = 0.0..=5.0;
pub const PARTICLE_SIZE_RANGE: RangeInclusive<f32> = 0.1..=3.0;
pub const MODEL_SCALE_RANGE: RangeInclusive<f32> = 0.5..=2.5;

/// UI and render configuration plus the latest hand reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    /// Fixed for the session; not settable through actions.
    pub particle_count: usize,
    pub particle_size: f32,
    pub flow_speed: f32,
    pub interaction_radius: f32,
    pub bloom_strength: f32,
    pub color_a: Color,
    pub color_b: Color,
    pub model_scale: f32,
    pub current_shape: ShapeKind,
    pub hand: HandInteractionState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            particle_count: 30_000,
            particle_size: 1.5,
            flow_speed: 0.5,
            interaction_radius: 1.5,
            bloom_strength: 1.8,
            color_a: Color::from_rgb(0x00, 0xcc, 0xff),
            color_b: Color::from_rgb(0x77, 0x00, 0xff),
            model_scale: 1.0,
            current_shape: ShapeKind::Glyph,
            hand: HandInteractionState::default(),
        }
    }
}

impl UiState {
    /// Apply one named transition.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetFlowSpeed(v) => set_clamped(&mut self.flow_speed, v, FLOW_SPEED_RANGE),
            Action::SetInteractionRadius(v) => {
                set_clamped(&mut self.interaction_radius, v, INTERACTION_RADIUS_RANGE)
            }
            Action::SetBloomStrength(v) => {
                set_clamped(&mut self.bloom_strength, v, BLOOM_STRENGTH_RANGE)
            }
            Action::SetParticleSize(v) => {
                set_clamped(&mut self.particle_size, v, PARTICLE_SIZE_RANGE)
            }
            Action::SetModelScale(v) => set_clamped(&mut self.model_scale, v, MODEL_SCALE_RANGE),
            Action::SetColors { a, b } => {
                self.color_a = a;
                self.color_b = b;
            }
            Action::SetShape(shape) => self.current_shape = shape,
            Action::UpdateHand(patch) => self.hand.merge(patch),
        }
    }

    /// Consuming variant of [`apply`](Self::apply), handy in folds and tests.
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }
}

fn set_clamped(field: &mut f32, value: f32, range: RangeInclusive<f32>) {
    if value.is_finite() {
        *field = value.clamp(*range.start(), *range.end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Gesture, HandPatch};
    use glam::Vec2;

    #[test]
    fn defaults_match_initial_scene() {
        let state = UiState::default();
        assert_eq!(state.particle_count, 30_000);
        assert!((state.particle_size - 1.5).abs() < f32::EPSILON);
        assert!((state.flow_speed - 0.5).abs() < f32::EPSILON);
        assert!((state.bloom_strength - 1.8).abs() < f32::EPSILON);
        assert_eq!(state.color_a.to_hex(), "#00ccff");
        assert_eq!(state.color_b.to_hex(), "#7700ff");
        assert_eq!(state.current_shape, ShapeKind::Glyph);
        assert!(!state.hand.is_active);
    }

    #[test]
    fn slider_actions_update_their_field_only() {
        let before = UiState::default();
        let after = before.clone().reduce(Action::SetFlowSpeed(2.0));
        assert!((after.flow_speed - 2.0).abs() < f32::EPSILON);
        assert_eq!(after.model_scale, before.model_scale);
        assert_eq!(after.particle_size, before.particle_size);
        assert_eq!(after.hand, before.hand);
    }

    #[test]
    fn slider_values_are_clamped_to_panel_ranges() {
        let state = UiState::default()
            .reduce(Action::SetModelScale(9.0))
            .reduce(Action::SetParticleSize(0.0))
            .reduce(Action::SetBloomStrength(-1.0));
        assert!((state.model_scale - 2.5).abs() < f32::EPSILON);
        assert!((state.particle_size - 0.1).abs() < f32::EPSILON);
        assert_eq!(state.bloom_strength, 0.0);
    }

    #[test]
    fn non_finite_slider_values_are_ignored() {
        let state = UiState::default().reduce(Action::SetInteractionRadius(f32::NAN));
        assert!((state.interaction_radius - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn set_colors_replaces_both() {
        let a = Color::from_rgb(1, 2, 3);
        let b = Color::from_rgb(4, 5, 6);
        let state = UiState::default().reduce(Action::SetColors { a, b });
        assert_eq!(state.color_a, a);
        assert_eq!(state.color_b, b);
    }

    #[test]
    fn set_shape_changes_current_shape() {
        let state = UiState::default().reduce(Action::SetShape(ShapeKind::Planet));
        assert_eq!(state.current_shape, ShapeKind::Planet);
    }

    #[test]
    fn hand_update_is_a_partial_merge() {
        let state = UiState::default()
            .reduce(Action::UpdateHand(HandPatch::active(
                Gesture::Fist,
                0.4,
                Vec2::new(0.3, 0.6),
            )))
            .reduce(Action::UpdateHand(HandPatch {
                hand_distance: Some(0.9),
                ..HandPatch::default()
            }));
        assert!(state.hand.is_active);
        assert_eq!(state.hand.gesture, Gesture::Fist);
        assert!((state.hand.hand_distance - 0.9).abs() < f32::EPSILON);
        assert_eq!(state.hand.hand_position, Vec2::new(0.3, 0.6));
    }

    #[test]
    fn particle_count_is_not_touched_by_any_action() {
        let state = UiState::default()
            .reduce(Action::SetShape(ShapeKind::Heart))
            .reduce(Action::SetParticleSize(2.0))
            .reduce(Action::UpdateHand(HandPatch::inactive()));
        assert_eq!(state.particle_count, 30_000);
    }
}
