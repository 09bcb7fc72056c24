//! Preference submissions

use serde::{Deserialize, Serialize};

use super::size::JerseySize;

/// Rank of a choice on a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceRank {
    First,
    Second,
    Third,
}

impl ChoiceRank {
    pub const ALL: [ChoiceRank; 3] = [ChoiceRank::First, ChoiceRank::Second, ChoiceRank::Third];
}

/// A player's ranked jersey number preferences and requested size.
///
/// Choices are not required to be distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub player_id: String,
    pub first_choice: u32,
    pub second_choice: u32,
    pub third_choice: u32,
    pub requested_size: JerseySize,
}

impl Submission {
    pub fn new(
        player_id: impl Into<String>,
        choices: [u32; 3],
        requested_size: JerseySize,
    ) -> Self {
        Self {
            player_id: player_id.into(),
            first_choice: choices[0],
            second_choice: choices[1],
            third_choice: choices[2],
            requested_size,
        }
    }

    /// Number chosen at `rank`.
    pub fn choice(&self, rank: ChoiceRank) -> u32 {
        match rank {
            ChoiceRank::First => self.first_choice,
            ChoiceRank::Second => self.second_choice,
            ChoiceRank::Third => self.third_choice,
        }
    }

    /// Choices in rank order.
    pub fn ranked_choices(&self) -> impl Iterator<Item = (ChoiceRank, u32)> + '_ {
        ChoiceRank::ALL.into_iter().map(move |rank| (rank, self.choice(rank)))
    }

    /// Whether `number` appears at any rank.
    pub fn contains(&self, number: u32) -> bool {
        self.ranked_choices().any(|(_, choice)| choice == number)
    }

    /// True when two ranks name the same number.
    pub fn has_duplicate_choices(&self) -> bool {
        self.first_choice == self.second_choice
            || self.first_choice == self.third_choice
            || self.second_choice == self.third_choice
    }
}
