//! Matcher ordering
//!
//! Tier first (returning before new), then priority score descending, then
//! returning before new again, then roster order. The score formula is
//! owned by [`PriorityComparator`] so the weighting can change without
//! touching the sort.

use std::cmp::Ordering;

use super::tiering::Candidate;
use crate::config::PriorityWeights;
use crate::models::Player;

#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityComparator {
    weights: PriorityWeights,
}

impl PriorityComparator {
    pub fn new(weights: PriorityWeights) -> Self {
        Self { weights }
    }

    /// Higher is better. With default weights: `100 * fall_ball + grade`.
    pub fn score(&self, player: &Player) -> u32 {
        let fall_ball = if player.participated_fall_ball {
            self.weights.fall_ball_bonus
        } else {
            0
        };
        fall_ball.saturating_add(self.weights.grade_weight.saturating_mul(u32::from(player.grade)))
    }

    pub fn compare(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        a.tier
            .cmp(&b.tier)
            .then_with(|| self.score(b.player).cmp(&self.score(a.player)))
            .then_with(|| b.player.is_returning.cmp(&a.player.is_returning))
            .then_with(|| a.roster_index.cmp(&b.roster_index))
    }

    /// Stable sort into decision order.
    pub fn sort(&self, candidates: &mut [Candidate<'_>]) {
        candidates.sort_by(|a, b| self.compare(a, b));
    }
}
