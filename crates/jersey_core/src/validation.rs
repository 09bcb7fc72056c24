//! Validation module for roster snapshots
//!
//! Allocation accepts any input and degrades gracefully, so nothing here
//! blocks a run. The validator lists what looks wrong so an administrator
//! can fix the data before publishing numbers.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{JerseyInventory, Player, VALID_GRADES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// One finding about the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    DuplicatePlayerId { player_id: String },
    InvalidGrade { player_id: String, grade: u8 },
    /// Previous number set on a player not marked returning; it is ignored.
    PreviousNumberNotReturning { player_id: String, number: u32 },
    DuplicateChoices { player_id: String },
    /// A choice that can never match because the number is not stocked.
    ChoiceNotInInventory { player_id: String, number: u32 },
    DuplicateInventoryNumber { number: u32 },
    EmptySizeSet { number: u32 },
    /// Two returning players claim the same previous number.
    SharedPreviousNumber { number: u32, player_ids: Vec<String> },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::DuplicatePlayerId { .. }
            | ValidationIssue::InvalidGrade { .. }
            | ValidationIssue::DuplicateInventoryNumber { .. } => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicatePlayerId { player_id } => {
                write!(f, "Duplicate player id: {}", player_id)
            }
            ValidationIssue::InvalidGrade { player_id, grade } => {
                write!(
                    f,
                    "Invalid grade {} for player {}. Must be one of 6, 7, 8",
                    grade, player_id
                )
            }
            ValidationIssue::PreviousNumberNotReturning { player_id, number } => write!(
                f,
                "Player {} has previous number {} but is not marked returning",
                player_id, number
            ),
            ValidationIssue::DuplicateChoices { player_id } => {
                write!(f, "Player {} repeats a number across choices", player_id)
            }
            ValidationIssue::ChoiceNotInInventory { player_id, number } => {
                write!(f, "Player {} chose number {} which is not in inventory", player_id, number)
            }
            ValidationIssue::DuplicateInventoryNumber { number } => {
                write!(f, "Jersey number {} appears more than once in inventory", number)
            }
            ValidationIssue::EmptySizeSet { number } => {
                write!(f, "Jersey number {} has no sizes in stock", number)
            }
            ValidationIssue::SharedPreviousNumber { number, player_ids } => write!(
                f,
                "Previous number {} is claimed by several returning players: {}",
                number,
                player_ids.join(", ")
            ),
        }
    }
}

/// Snapshot validation utility
pub struct SnapshotValidator;

impl SnapshotValidator {
    pub fn validate(players: &[Player], jerseys: &[JerseyInventory]) -> Vec<ValidationIssue> {
        let mut issues = Self::validate_inventory(jerseys);
        issues.extend(Self::validate_players(players, jerseys));
        issues
    }

    pub fn validate_inventory(jerseys: &[JerseyInventory]) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut seen = BTreeSet::new();
        for jersey in jerseys {
            if !seen.insert(jersey.number) {
                issues.push(ValidationIssue::DuplicateInventoryNumber {
                    number: jersey.number,
                });
            }
            if jersey.sizes.is_empty() {
                issues.push(ValidationIssue::EmptySizeSet {
                    number: jersey.number,
                });
            }
        }
        issues
    }

    pub fn validate_players(
        players: &[Player],
        jerseys: &[JerseyInventory],
    ) -> Vec<ValidationIssue> {
        let stocked: BTreeSet<u32> = jerseys.iter().map(|j| j.number).collect();
        let mut issues = Vec::new();
        let mut ids = BTreeSet::new();
        let mut previous_owners: BTreeMap<u32, Vec<String>> = BTreeMap::new();

        for player in players {
            if !ids.insert(player.id.as_str()) {
                issues.push(ValidationIssue::DuplicatePlayerId {
                    player_id: player.id.clone(),
                });
            }
            if !VALID_GRADES.contains(&player.grade) {
                issues.push(ValidationIssue::InvalidGrade {
                    player_id: player.id.clone(),
                    grade: player.grade,
                });
            }
            match (player.is_returning, player.previous_jersey_number) {
                (false, Some(number)) => {
                    issues.push(ValidationIssue::PreviousNumberNotReturning {
                        player_id: player.id.clone(),
                        number,
                    });
                }
                (true, Some(number)) => {
                    previous_owners.entry(number).or_default().push(player.id.clone());
                }
                _ => {}
            }

            let Some(submission) = player.submission.as_ref() else {
                continue;
            };
            if submission.has_duplicate_choices() {
                issues.push(ValidationIssue::DuplicateChoices {
                    player_id: player.id.clone(),
                });
            }
            let mut reported = BTreeSet::new();
            for (_, number) in submission.ranked_choices() {
                if !stocked.contains(&number) && reported.insert(number) {
                    issues.push(ValidationIssue::ChoiceNotInInventory {
                        player_id: player.id.clone(),
                        number,
                    });
                }
            }
        }

        issues.extend(
            previous_owners
                .into_iter()
                .filter(|(_, owners)| owners.len() > 1)
                .map(|(number, player_ids)| ValidationIssue::SharedPreviousNumber {
                    number,
                    player_ids,
                }),
        );
        issues
    }

    pub fn has_errors(issues: &[ValidationIssue]) -> bool {
        issues.iter().any(|issue| issue.severity() == Severity::Error)
    }
}
