//! Fist-release detection: crush the cloud, open the hand, get a new form.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;
use voxel_common::{Gesture, ShapeKind};

/// Watches consecutive gesture readings for a release edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseWatcher {
    last: Gesture,
}

impl ReleaseWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest reading. Returns `true` exactly on Fist → Open or
    /// Fist → None.
    pub fn observe(&mut self, gesture: Gesture) -> bool {
        let fired = self.last == Gesture::Fist && gesture != Gesture::Fist;
        self.last = gesture;
        fired
    }

    pub fn last(&self) -> Gesture {
        self.last
    }

    /// Observe and, on release, pick a shape different from `current`.
    pub fn next_shape<R: Rng + ?Sized>(
        &mut self,
        gesture: Gesture,
        current: ShapeKind,
        rng: &mut R,
    ) -> Option<ShapeKind> {
        if !self.observe(gesture) {
            return None;
        }
        let next = pick_next_shape(current, rng);
        info!(from = %current, to = %next, "Gesture release, switching shape");
        Some(next)
    }
}

/// Uniform choice among every shape except `current`.
pub fn pick_next_shape<R: Rng + ?Sized>(current: ShapeKind, rng: &mut R) -> ShapeKind {
    let candidates: Vec<ShapeKind> = ShapeKind::ALL
        .iter()
        .copied()
        .filter(|&s| s != current)
        .collect();
    candidates.choose(rng).copied().unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fires_on_fist_to_open() {
        let mut w = ReleaseWatcher::new();
        assert!(!w.observe(Gesture::Fist));
        assert!(w.observe(Gesture::Open));
    }

    #[test]
    fn fires_on_fist_to_none() {
        let mut w = ReleaseWatcher::new();
        w.observe(Gesture::Fist);
        assert!(w.observe(Gesture::None));
    }

    #[test]
    fn holding_a_fist_does_not_fire() {
        let mut w = ReleaseWatcher::new();
        for _ in 0..5 {
            assert!(!w.observe(Gesture::Fist));
        }
    }

    #[test]
    fn other_transitions_do_not_fire() {
        let sequence = [
            Gesture::None,
            Gesture::Open,
            Gesture::Open,
            Gesture::None,
            Gesture::Fist,
        ];
        let mut w = ReleaseWatcher::new();
        for g in sequence {
            assert!(!w.observe(g), "unexpected fire on {g:?}");
        }
        assert_eq!(w.last(), Gesture::Fist);
    }

    #[test]
    fn fires_once_per_release() {
        let mut w = ReleaseWatcher::new();
        let fires = [
            Gesture::Fist,
            Gesture::Open,
            Gesture::Open,
            Gesture::Fist,
            Gesture::Fist,
            Gesture::None,
            Gesture::None,
        ]
        .into_iter()
        .filter(|&g| w.observe(g))
        .count();
        assert_eq!(fires, 2);
    }

    #[test]
    fn next_shape_always_differs() {
        let mut rng = StdRng::seed_from_u64(7);
        for current in ShapeKind::ALL {
            for _ in 0..50 {
                assert_ne!(pick_next_shape(current, &mut rng), current);
            }
        }
    }

    #[test]
    fn next_shape_reaches_every_other_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(pick_next_shape(ShapeKind::Cube, &mut rng));
        }
        assert_eq!(seen.len(), ShapeKind::ALL.len() - 1);
        assert!(!seen.contains(&ShapeKind::Cube));
    }

    #[test]
    fn watcher_picks_only_on_release() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut w = ReleaseWatcher::new();
        assert_eq!(w.next_shape(Gesture::Fist, ShapeKind::Heart, &mut rng), None);
        let next = w.next_shape(Gesture::Open, ShapeKind::Heart, &mut rng);
        assert!(matches!(next, Some(s) if s != ShapeKind::Heart));
    }
}
