//! Eligibility & tiering
//!
//! Players without a submission drop out here. Everyone else lands in one
//! of three tiers; Tier 1 (retention) is resolved immediately against the
//! pool before any other player is considered.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::pool::AvailabilityPool;
use crate::models::{Assignment, AssignmentMethod, Player, Submission};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Returning player whose old number is among their choices.
    Retention = 1,
    /// Returning player not resolved by retention.
    Returning = 2,
    New = 3,
}

impl Tier {
    pub fn classify(player: &Player, submission: &Submission) -> Tier {
        match player.retained_candidate() {
            Some(previous) if submission.contains(previous) => Tier::Retention,
            _ if player.is_returning => Tier::Returning,
            _ => Tier::New,
        }
    }
}

/// A submitting player queued for allocation.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub player: &'a Player,
    pub submission: &'a Submission,
    pub tier: Tier,
    /// Position in the roster, the last-resort tie-break.
    pub roster_index: usize,
}

impl Candidate<'_> {
    pub fn player_id(&self) -> &str {
        &self.player.id
    }
}

/// Submitting players split by tier, each list in roster order.
#[derive(Debug, Default)]
pub struct Tiers<'a> {
    pub retention: Vec<Candidate<'a>>,
    pub returning: Vec<Candidate<'a>>,
    pub new: Vec<Candidate<'a>>,
}

impl<'a> Tiers<'a> {
    pub fn partition(players: &'a [Player]) -> Self {
        let mut tiers = Tiers::default();
        for (roster_index, player) in players.iter().enumerate() {
            let Some(submission) = player.submission.as_ref() else {
                continue;
            };
            let tier = Tier::classify(player, submission);
            let candidate = Candidate {
                player,
                submission,
                tier,
                roster_index,
            };
            match tier {
                Tier::Retention => tiers.retention.push(candidate),
                Tier::Returning => tiers.returning.push(candidate),
                Tier::New => tiers.new.push(candidate),
            }
        }
        debug!(
            retention = tiers.retention.len(),
            returning = tiers.returning.len(),
            new = tiers.new.len(),
            "players tiered"
        );
        tiers
    }

    pub fn eligible_count(&self) -> usize {
        self.retention.len() + self.returning.len() + self.new.len()
    }
}

/// Give every Tier-1 player their previous number while it is still free.
///
/// Ids that receive a number are added to `assigned`; a repeated id is
/// skipped. Returns the players whose number was already gone, demoted to
/// [`Tier::Returning`] so the caller can decide whether to re-route them.
pub fn retain_previous_numbers<'a>(
    retention: &[Candidate<'a>],
    pool: &mut AvailabilityPool,
    assigned: &mut BTreeSet<&'a str>,
    assignments: &mut Vec<Assignment>,
) -> Vec<Candidate<'a>> {
    let mut missed = Vec::new();
    for candidate in retention {
        let Some(previous) = candidate.player.retained_candidate() else {
            continue;
        };
        let id = candidate.player.id.as_str();
        if assigned.contains(id) {
            warn!(player = id, "duplicate player id skipped");
            continue;
        }
        if pool.claim(previous) {
            debug!(player = id, number = previous, "kept old number");
            assigned.insert(id);
            assignments.push(Assignment::new(
                candidate.player.id.clone(),
                previous,
                candidate.submission.requested_size,
                AssignmentMethod::KeptOld,
            ));
        } else {
            warn!(
                player = id,
                number = previous,
                "previous number not available for retention"
            );
            missed.push(Candidate {
                tier: Tier::Returning,
                ..*candidate
            });
        }
    }
    missed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JerseyInventory, JerseySize};

    fn submission(choices: [u32; 3]) -> Submission {
        Submission::new("", choices, JerseySize::YouthMedium)
    }

    #[test]
    fn test_classify() {
        let keeper = Player::new("a", 7).returning(Some(5));
        assert_eq!(Tier::classify(&keeper, &submission([1, 2, 5])), Tier::Retention);
        assert_eq!(Tier::classify(&keeper, &submission([1, 2, 3])), Tier::Returning);

        let no_previous = Player::new("b", 7).returning(None);
        assert_eq!(Tier::classify(&no_previous, &submission([1, 2, 3])), Tier::Returning);

        let mut newcomer = Player::new("c", 6);
        newcomer.previous_jersey_number = Some(1);
        assert_eq!(Tier::classify(&newcomer, &submission([1, 2, 3])), Tier::New);
    }

    #[test]
    fn test_partition_skips_non_submitters() {
        let players = vec![
            Player::new("a", 6).with_submission(submission([1, 2, 3])),
            Player::new("b", 7),
            Player::new("c", 8).returning(Some(4)).with_submission(submission([4, 2, 3])),
            Player::new("d", 8).returning(Some(9)).with_submission(submission([4, 2, 3])),
        ];
        let tiers = Tiers::partition(&players);
        assert_eq!(tiers.eligible_count(), 3);
        assert_eq!(tiers.retention[0].player_id(), "c");
        assert_eq!(tiers.returning[0].player_id(), "d");
        assert_eq!(tiers.new[0].player_id(), "a");
        assert_eq!(tiers.new[0].roster_index, 0);
    }

    #[test]
    fn test_retention_claims_and_reports_misses() {
        let players = vec![
            Player::new("a", 6).returning(Some(4)).with_submission(submission([4, 2, 3])),
            Player::new("b", 7).returning(Some(4)).with_submission(submission([1, 4, 3])),
            Player::new("c", 8).returning(Some(50)).with_submission(submission([50, 2, 3])),
        ];
        let jerseys = vec![
            JerseyInventory::new(4, [JerseySize::AdultLarge]),
            JerseyInventory::new(2, [JerseySize::YouthMedium]),
        ];
        let mut pool = AvailabilityPool::from_inventory(&jerseys, false);
        let mut assigned = BTreeSet::new();
        let mut assignments = Vec::new();

        let tiers = Tiers::partition(&players);
        let missed =
            retain_previous_numbers(&tiers.retention, &mut pool, &mut assigned, &mut assignments);

        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].player_id, "a");
        assert_eq!(assignments[0].jersey_number, 4);
        // requested size, not whatever the number is stocked in
        assert_eq!(assignments[0].assigned_size, JerseySize::YouthMedium);
        assert_eq!(assignments[0].assignment_method, AssignmentMethod::KeptOld);

        let missed_ids: Vec<_> = missed.iter().map(|c| c.player_id()).collect();
        assert_eq!(missed_ids, vec!["b", "c"]);
        assert!(missed.iter().all(|c| c.tier == Tier::Returning));
        assert!(!pool.contains(4));
        assert_eq!(assigned.into_iter().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_retention_skips_repeated_id() {
        let players = vec![
            Player::new("x", 7).returning(Some(1)).with_submission(submission([1, 2, 3])),
            Player::new("x", 8).returning(Some(2)).with_submission(submission([2, 1, 3])),
        ];
        let jerseys = vec![
            JerseyInventory::new(1, [JerseySize::YouthMedium]),
            JerseyInventory::new(2, [JerseySize::YouthMedium]),
        ];
        let mut pool = AvailabilityPool::from_inventory(&jerseys, false);
        let mut assigned = BTreeSet::new();
        let mut assignments = Vec::new();

        let tiers = Tiers::partition(&players);
        let missed =
            retain_previous_numbers(&tiers.retention, &mut pool, &mut assigned, &mut assignments);

        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].jersey_number, 1);
        assert!(missed.is_empty());
        assert!(pool.contains(2));
    }
}
