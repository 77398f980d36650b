//! Bean module - a single bean and its trajectory policy
//!
//! A bean knows its logical position `(x, y)` on the peg triangle and decides,
//! one row at a time, where it goes next. The decision policy is fixed when the
//! bean is created:
//!
//! - [`Trajectory::RandomWalk`]: a fair coin flip at every peg, so the landing
//!   slot over many beans follows Binomial(slot_count - 1, 0.5).
//! - [`Trajectory::TargetSeeking`]: a landing slot drawn once from a normal
//!   deviate; the bean drifts right one step per row until it reaches it.

use crate::rng::{BeanRng, RandomSource};
use crate::types::Mode;

/// Per-bean trajectory policy
#[derive(Debug, Clone)]
pub enum Trajectory {
    /// Independent fair coin flip per peg, drawn from a bean-private stream.
    RandomWalk(BeanRng),
    /// Monotone drift toward a fixed landing slot.
    TargetSeeking { target: usize },
}

/// A bean dropped through the machine
#[derive(Debug, Clone)]
pub struct Bean {
    x: usize,
    y: usize,
    trajectory: Trajectory,
}

impl Bean {
    /// Create a bean for a machine with `slot_count` slots.
    ///
    /// Luck beans fork a private coin-flip stream from `source`; skill beans draw a
    /// single normal deviate and fix their landing slot with [`skill_target`].
    ///
    /// # Panics
    ///
    /// Panics if `slot_count` is zero.
    pub fn new<R: RandomSource + ?Sized>(slot_count: usize, mode: Mode, source: &mut R) -> Self {
        assert!(slot_count >= 1, "a bean needs at least one slot to land in");

        let trajectory = match mode {
            Mode::Luck => Trajectory::RandomWalk(BeanRng::new(source.next_seed())),
            Mode::Skill => Trajectory::TargetSeeking {
                target: skill_target(slot_count, source.next_gaussian()),
            },
        };

        Self {
            x: 0,
            y: 0,
            trajectory,
        }
    }

    /// Create `count` beans sharing one random source.
    pub fn batch<R: RandomSource + ?Sized>(
        count: usize,
        slot_count: usize,
        mode: Mode,
        source: &mut R,
    ) -> Vec<Bean> {
        (0..count)
            .map(|_| Bean::new(slot_count, mode, source))
            .collect()
    }

    /// Return to the top peg. A skill bean keeps its landing slot.
    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    /// Fall to the next row and return the new `x`.
    pub fn advance(&mut self) -> usize {
        let step_right = match &mut self.trajectory {
            Trajectory::RandomWalk(rng) => rng.coin_flip(),
            Trajectory::TargetSeeking { target } => self.x < *target,
        };
        if step_right {
            self.x += 1;
        }
        self.y += 1;
        self.x
    }

    pub fn x_pos(&self) -> usize {
        self.x
    }

    pub fn y_pos(&self) -> usize {
        self.y
    }

    pub fn mode(&self) -> Mode {
        match self.trajectory {
            Trajectory::RandomWalk(_) => Mode::Luck,
            Trajectory::TargetSeeking { .. } => Mode::Skill,
        }
    }

    /// Fixed landing slot of a skill bean; `None` for luck beans.
    pub fn target(&self) -> Option<usize> {
        match self.trajectory {
            Trajectory::RandomWalk(_) => None,
            Trajectory::TargetSeeking { target } => Some(target),
        }
    }
}

/// Landing slot of a skill bean for a given normal deviate.
///
/// The deviate is scaled by the standard deviation of Binomial(n, 0.5), offset
/// to the middle slot, rounded half away from zero, and clamped to the board.
pub fn skill_target(slot_count: usize, deviate: f64) -> usize {
    let mean = (slot_count as f64 - 1.0) * 0.5;
    let stdev = (slot_count as f64 * 0.5 * 0.5).sqrt();
    let raw = (deviate * stdev + mean).round();
    let last = (slot_count - 1) as f64;
    raw.clamp(0.0, last) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDeviate(f64);

    impl RandomSource for FixedDeviate {
        fn next_gaussian(&mut self) -> f64 {
            self.0
        }

        fn next_seed(&mut self) -> u64 {
            0
        }
    }

    #[test]
    fn test_skill_target_centres_on_middle_slot() {
        assert_eq!(skill_target(10, 0.0), 5);
        assert_eq!(skill_target(11, 0.0), 5);
        assert_eq!(skill_target(1, 0.0), 0);
    }

    #[test]
    fn test_skill_target_is_clamped() {
        assert_eq!(skill_target(10, -100.0), 0);
        assert_eq!(skill_target(10, 100.0), 9);
    }

    #[test]
    fn test_skill_bean_walks_to_target() {
        let mut bean = Bean::new(10, Mode::Skill, &mut FixedDeviate(0.0));
        assert_eq!(bean.target(), Some(5));

        let mut last = 0;
        for _ in 0..9 {
            let x = bean.advance();
            assert!(x == last || x == last + 1);
            last = x;
        }
        assert_eq!(bean.x_pos(), 5);
        assert_eq!(bean.y_pos(), 9);
    }

    #[test]
    fn test_reset_keeps_skill_target() {
        let mut bean = Bean::new(10, Mode::Skill, &mut FixedDeviate(1.0));
        let target = bean.target();
        bean.advance();
        bean.advance();
        bean.reset();

        assert_eq!((bean.x_pos(), bean.y_pos()), (0, 0));
        assert_eq!(bean.target(), target);
    }

    #[test]
    fn test_luck_bean_stays_inside_triangle() {
        let mut rng = BeanRng::new(3);
        let mut bean = Bean::new(20, Mode::Luck, &mut rng);
        assert_eq!(bean.mode(), Mode::Luck);
        assert_eq!(bean.target(), None);

        for _ in 0..19 {
            let x = bean.advance();
            assert!(x <= bean.y_pos());
        }
    }

    #[test]
    fn test_batch_creates_requested_count() {
        let mut rng = BeanRng::new(1);
        let beans = Bean::batch(7, 4, Mode::Skill, &mut rng);
        assert_eq!(beans.len(), 7);
        assert!(beans.iter().all(|b| b.target().is_some_and(|t| t < 4)));
    }
}
