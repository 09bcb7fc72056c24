//! Greedy preference matcher

use tracing::debug;

use super::pool::AvailabilityPool;
use super::tiering::Candidate;
use crate::models::{Assignment, AssignmentMethod};

/// Claim the highest-ranked choice still in the pool.
///
/// Returns `None` when all three choices are taken (or not in the
/// inventory at all); the caller then falls back.
pub fn match_preferences(
    candidate: &Candidate<'_>,
    pool: &mut AvailabilityPool,
) -> Option<Assignment> {
    let (rank, number) = candidate
        .submission
        .ranked_choices()
        .find(|(_, number)| pool.contains(*number))?;

    pool.claim(number);
    let method = AssignmentMethod::from(rank);
    debug!(player = candidate.player_id(), number, %method, "choice matched");

    Some(Assignment::new(
        candidate.player.id.clone(),
        number,
        candidate.submission.requested_size,
        method,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::tiering::Tier;
    use crate::models::{JerseyInventory, JerseySize, Player, Submission};

    fn pool(numbers: &[u32]) -> AvailabilityPool {
        let jerseys: Vec<_> = numbers
            .iter()
            .map(|n| JerseyInventory::new(*n, [JerseySize::YouthMedium]))
            .collect();
        AvailabilityPool::from_inventory(&jerseys, false)
    }

    fn run(choices: [u32; 3], pool: &mut AvailabilityPool) -> Option<Assignment> {
        let player = Player::new("p", 7);
        let submission = Submission::new("p", choices, JerseySize::AdultSmall);
        let candidate = Candidate {
            player: &player,
            submission: &submission,
            tier: Tier::New,
            roster_index: 0,
        };
        match_preferences(&candidate, pool)
    }

    #[test]
    fn test_first_choice_wins_when_free() {
        let mut pool = pool(&[1, 2, 3]);
        let a = run([3, 1, 2], &mut pool).unwrap();
        assert_eq!(a.jersey_number, 3);
        assert_eq!(a.assignment_method, AssignmentMethod::FirstChoice);
        assert_eq!(a.assigned_size, JerseySize::AdultSmall);
        assert!(!pool.contains(3));
    }

    #[test]
    fn test_falls_through_ranks() {
        let mut pool = pool(&[2, 3]);
        let a = run([1, 2, 3], &mut pool).unwrap();
        assert_eq!((a.jersey_number, a.assignment_method), (2, AssignmentMethod::SecondChoice));

        let a = run([1, 2, 3], &mut pool).unwrap();
        assert_eq!((a.jersey_number, a.assignment_method), (3, AssignmentMethod::ThirdChoice));
    }

    #[test]
    fn test_no_free_choice_leaves_pool_untouched() {
        let mut pool = pool(&[8, 9]);
        assert!(run([1, 2, 99], &mut pool).is_none());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_duplicate_choices_report_first_matching_rank() {
        let mut pool = pool(&[5]);
        let a = run([4, 5, 5], &mut pool).unwrap();
        assert_eq!(a.assignment_method, AssignmentMethod::SecondChoice);
    }
}
