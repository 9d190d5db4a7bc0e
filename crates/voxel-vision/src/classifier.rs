//! Landmark geometry to gesture, depth, and screen position.

use glam::Vec2;
use tracing::debug;
use voxel_common::{Gesture, HandPatch};
use voxel_config::schema::TrackingConfig;

use crate::detector::VisionError;
use crate::landmarks::{HandLandmarks, Landmark, FINGERS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classifier {
    pub extension_ratio: f32,
    pub area_floor: f32,
    pub area_span: f32,
    pub mirror_x: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&TrackingConfig::default())
    }
}

impl Classifier {
    pub fn from_config(config: &TrackingConfig) -> Self {
        Self {
            extension_ratio: config.extension_ratio,
            area_floor: config.area_floor,
            area_span: config.area_span,
            mirror_x: config.mirror_x,
        }
    }

    /// Number of non-thumb fingers whose tip reaches well past its knuckle.
    pub fn count_extended(&self, hand: &HandLandmarks) -> usize {
        let wrist = hand.wrist();
        FINGERS
            .iter()
            .filter(|&&(tip, base)| {
                let d_tip = wrist.distance(hand.get(tip));
                let d_base = wrist.distance(hand.get(base));
                d_tip > d_base * self.extension_ratio
            })
            .count()
    }

    pub fn classify(&self, hand: &HandLandmarks) -> Gesture {
        match self.count_extended(hand) {
            0 | 1 => Gesture::Fist,
            2 => Gesture::None,
            _ => Gesture::Open,
        }
    }

    /// Proximity from the bounding-box area: 0.0 far, 1.0 near.
    pub fn hand_distance(&self, hand: &HandLandmarks) -> f32 {
        let (min, max) = bounds(hand.points());
        let area = (max.x - min.x) * (max.y - min.y);
        if self.area_span <= 0.0 {
            return if area > self.area_floor { 1.0 } else { 0.0 };
        }
        ((area - self.area_floor) / self.area_span).clamp(0.0, 1.0)
    }

    /// Landmark centroid, mirrored horizontally when configured.
    pub fn hand_position(&self, hand: &HandLandmarks) -> Vec2 {
        let sum: Vec2 = hand.points().iter().map(|p| p.xy()).sum();
        let avg = sum / hand.points().len() as f32;
        let x = if self.mirror_x { 1.0 - avg.x } else { avg.x };
        Vec2::new(x, avg.y)
    }

    pub fn interpret(&self, hand: &HandLandmarks) -> HandPatch {
        HandPatch::active(
            self.classify(hand),
            self.hand_distance(hand),
            self.hand_position(hand),
        )
    }

    /// Turn one detector result into a state patch.
    ///
    /// Only the first hand is used. No hands yields [`HandPatch::inactive`],
    /// which leaves every other field as it was.
    pub fn interpret_detection(&self, hands: &[Vec<Landmark>]) -> Result<HandPatch, VisionError> {
        let Some(first) = hands.first() else {
            return Ok(HandPatch::inactive());
        };
        let hand = HandLandmarks::from_slice(first)?;
        let patch = self.interpret(&hand);
        debug!(
            gesture = ?patch.gesture,
            distance = ?patch.hand_distance,
            hands = hands.len(),
            "Hand classified"
        );
        Ok(patch)
    }
}

fn bounds(points: &[Landmark]) -> (Vec2, Vec2) {
    points.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), p| (min.min(p.xy()), max.max(p.xy())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{LANDMARK_COUNT, WRIST};

    /// A hand with the wrist at `(0.5, 0.8)`, knuckles 0.1 above it, and
    /// each finger tip either 0.3 above (extended) or 0.12 above (curled).
    fn hand_with(extended: [bool; 4]) -> HandLandmarks {
        let mut points = [Landmark::new(0.5, 0.8, 0.0); LANDMARK_COUNT];
        for (i, &(tip, base)) in FINGERS.iter().enumerate() {
            let x = 0.44 + 0.04 * i as f32;
            points[base] = Landmark::new(x, 0.7, 0.0);
            points[base + 1] = Landmark::new(x, 0.68, 0.0);
            points[base + 2] = Landmark::new(x, 0.66, 0.0);
            let reach = if extended[i] { 0.3 } else { 0.12 };
            points[tip] = Landmark::new(x, 0.8 - reach, 0.0);
        }
        points[WRIST] = Landmark::new(0.5, 0.8, 0.0);
        HandLandmarks::new(points)
    }

    /// Points spread over a `w × h` box anchored at `(x0, y0)`.
    fn hand_in_box(x0: f32, y0: f32, w: f32, h: f32) -> HandLandmarks {
        let mut points = [Landmark::new(x0, y0, 0.0); LANDMARK_COUNT];
        points[1] = Landmark::new(x0 + w, y0, 0.0);
        points[2] = Landmark::new(x0, y0 + h, 0.0);
        points[3] = Landmark::new(x0 + w, y0 + h, 0.0);
        HandLandmarks::new(points)
    }

    // =========================================================================
    // Gesture
    // =========================================================================

    #[test]
    fn four_extended_is_open() {
        let c = Classifier::default();
        let hand = hand_with([true; 4]);
        assert_eq!(c.count_extended(&hand), 4);
        assert_eq!(c.classify(&hand), Gesture::Open);
    }

    #[test]
    fn three_extended_is_open() {
        let c = Classifier::default();
        assert_eq!(c.classify(&hand_with([true, true, true, false])), Gesture::Open);
    }

    #[test]
    fn none_extended_is_fist() {
        let c = Classifier::default();
        let hand = hand_with([false; 4]);
        assert_eq!(c.count_extended(&hand), 0);
        assert_eq!(c.classify(&hand), Gesture::Fist);
    }

    #[test]
    fn one_extended_is_fist() {
        let c = Classifier::default();
        assert_eq!(c.classify(&hand_with([true, false, false, false])), Gesture::Fist);
    }

    #[test]
    fn two_extended_is_neutral() {
        let c = Classifier::default();
        assert_eq!(c.classify(&hand_with([true, true, false, false])), Gesture::None);
        assert_eq!(c.classify(&hand_with([false, true, false, true])), Gesture::None);
    }

    #[test]
    fn extension_uses_depth() {
        let c = Classifier::default();
        let mut points = *hand_with([false; 4]).points();
        // Curled in the image plane but reaching toward the camera.
        points[FINGERS[0].0].z = -0.5;
        points[FINGERS[1].0].z = -0.5;
        points[FINGERS[2].0].z = -0.5;
        assert_eq!(c.classify(&HandLandmarks::new(points)), Gesture::Open);
    }

    // =========================================================================
    // Distance
    // =========================================================================

    #[test]
    fn large_box_is_near() {
        let c = Classifier::default();
        // 0.6 × 0.5 = 0.30
        let d = c.hand_distance(&hand_in_box(0.2, 0.2, 0.6, 0.5));
        assert!((d - 1.0).abs() < 1e-5);
    }

    #[test]
    fn small_box_is_far() {
        let c = Classifier::default();
        assert!(c.hand_distance(&hand_in_box(0.4, 0.4, 0.1, 0.5)) < 1e-5);
        assert_eq!(c.hand_distance(&hand_in_box(0.4, 0.4, 0.1, 0.1)), 0.0);
    }

    #[test]
    fn mid_box_interpolates() {
        let c = Classifier::default();
        // 0.5 × 0.35 = 0.175 → (0.175 - 0.05) / 0.25 = 0.5
        let d = c.hand_distance(&hand_in_box(0.1, 0.1, 0.5, 0.35));
        assert!((d - 0.5).abs() < 1e-5);
    }

    #[test]
    fn huge_box_clamps_to_one() {
        let c = Classifier::default();
        assert_eq!(c.hand_distance(&hand_in_box(0.0, 0.0, 1.0, 1.0)), 1.0);
    }

    // =========================================================================
    // Position
    // =========================================================================

    #[test]
    fn position_is_mirrored_centroid() {
        let c = Classifier::default();
        let hand = HandLandmarks::new([Landmark::new(0.2, 0.7, 0.0); LANDMARK_COUNT]);
        let pos = c.hand_position(&hand);
        assert!((pos.x - 0.8).abs() < 1e-5);
        assert!((pos.y - 0.7).abs() < 1e-5);
    }

    #[test]
    fn position_without_mirror() {
        let c = Classifier {
            mirror_x: false,
            ..Classifier::default()
        };
        let hand = HandLandmarks::new([Landmark::new(0.2, 0.7, 0.0); LANDMARK_COUNT]);
        assert!((c.hand_position(&hand).x - 0.2).abs() < 1e-5);
    }

    // =========================================================================
    // Detection results
    // =========================================================================

    #[test]
    fn no_hands_is_inactive_patch() {
        let c = Classifier::default();
        let patch = c.interpret_detection(&[]).unwrap();
        assert_eq!(patch, HandPatch::inactive());
        assert!(patch.gesture.is_none());
    }

    #[test]
    fn only_first_hand_counts() {
        let c = Classifier::default();
        let open = hand_with([true; 4]).points().to_vec();
        let fist = hand_with([false; 4]).points().to_vec();
        let patch = c.interpret_detection(&[open, fist]).unwrap();
        assert_eq!(patch.is_active, Some(true));
        assert_eq!(patch.gesture, Some(Gesture::Open));
    }

    #[test]
    fn short_hand_is_malformed() {
        let c = Classifier::default();
        let hands = vec![vec![Landmark::default(); 5]];
        assert!(matches!(
            c.interpret_detection(&hands),
            Err(VisionError::MalformedHand(5))
        ));
    }

    #[test]
    fn patch_never_sets_pinch() {
        let c = Classifier::default();
        let patch = c.interpret(&hand_with([true; 4]));
        assert!(patch.pinch_strength.is_none());
    }
}
