//! Roster snapshot: everything a single allocation run reads.

use serde::{Deserialize, Serialize};

use super::jersey::JerseyInventory;
use super::player::Player;
use super::submission::Submission;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub players: Vec<Player>,
    pub jerseys: Vec<JerseyInventory>,
}

impl RosterSnapshot {
    pub fn new(players: Vec<Player>, jerseys: Vec<JerseyInventory>) -> Self {
        Self { players, jerseys }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Attach loose submissions to their players by `player_id`.
    ///
    /// The first submission per player wins; later ones and submissions for
    /// unknown players are returned so the caller can report them.
    pub fn attach_submissions(&mut self, submissions: Vec<Submission>) -> Vec<Submission> {
        let mut orphans = Vec::new();
        for submission in submissions {
            match self.players.iter_mut().find(|p| p.id == submission.player_id) {
                Some(player) if player.submission.is_none() => player.submission = Some(submission),
                _ => orphans.push(submission),
            }
        }
        orphans
    }

    pub fn submitted_count(&self) -> usize {
        self.players.iter().filter(|p| p.has_submitted()).count()
    }
}
