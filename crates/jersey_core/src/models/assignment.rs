//! Allocation output

use std::fmt;

use serde::{Deserialize, Serialize};

use super::size::JerseySize;
use super::submission::ChoiceRank;

/// How a number ended up with a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMethod {
    /// Returning player kept last season's number.
    KeptOld,
    FirstChoice,
    SecondChoice,
    ThirdChoice,
    /// None of the ranked choices were free.
    Fallback,
}

impl AssignmentMethod {
    pub const ALL: [AssignmentMethod; 5] = [
        AssignmentMethod::KeptOld,
        AssignmentMethod::FirstChoice,
        AssignmentMethod::SecondChoice,
        AssignmentMethod::ThirdChoice,
        AssignmentMethod::Fallback,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentMethod::KeptOld => "kept_old",
            AssignmentMethod::FirstChoice => "first_choice",
            AssignmentMethod::SecondChoice => "second_choice",
            AssignmentMethod::ThirdChoice => "third_choice",
            AssignmentMethod::Fallback => "fallback",
        }
    }

    /// True for the three ranked-choice methods.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            AssignmentMethod::FirstChoice
                | AssignmentMethod::SecondChoice
                | AssignmentMethod::ThirdChoice
        )
    }
}

impl From<ChoiceRank> for AssignmentMethod {
    fn from(rank: ChoiceRank) -> Self {
        match rank {
            ChoiceRank::First => AssignmentMethod::FirstChoice,
            ChoiceRank::Second => AssignmentMethod::SecondChoice,
            ChoiceRank::Third => AssignmentMethod::ThirdChoice,
        }
    }
}

impl fmt::Display for AssignmentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A jersey number and size handed to one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub player_id: String,
    pub jersey_number: u32,
    /// Always the size the player requested, including for fallbacks.
    pub assigned_size: JerseySize,
    pub assignment_method: AssignmentMethod,
}

impl Assignment {
    pub fn new(
        player_id: impl Into<String>,
        jersey_number: u32,
        assigned_size: JerseySize,
        assignment_method: AssignmentMethod,
    ) -> Self {
        Self {
            player_id: player_id.into(),
            jersey_number,
            assigned_size,
            assignment_method,
        }
    }
}
