//! Roster players

use serde::{Deserialize, Deserializer, Serialize};

use super::submission::Submission;

/// Grades the program enrolls.
pub const VALID_GRADES: [u8; 3] = [6, 7, 8];

/// A rostered player, optionally carrying their preference submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub grade: u8,
    pub is_returning: bool,
    pub participated_fall_ball: bool,
    #[serde(default)]
    pub previous_jersey_number: Option<u32>,
    /// Accepts `null`, one submission, or the joined-row array shape.
    #[serde(default, deserialize_with = "deserialize_submission")]
    pub submission: Option<Submission>,
}

impl Player {
    pub fn new(id: impl Into<String>, grade: u8) -> Self {
        Self {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            grade,
            is_returning: false,
            participated_fall_ball: false,
            previous_jersey_number: None,
            submission: None,
        }
    }

    pub fn named(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Mark as returning with the number worn last season.
    pub fn returning(mut self, previous_jersey_number: Option<u32>) -> Self {
        self.is_returning = true;
        self.previous_jersey_number = previous_jersey_number;
        self
    }

    pub fn with_fall_ball(mut self, participated: bool) -> Self {
        self.participated_fall_ball = participated;
        self
    }

    /// Attach a submission, stamping it with this player's id.
    pub fn with_submission(mut self, mut submission: Submission) -> Self {
        submission.player_id = self.id.clone();
        self.submission = Some(submission);
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn has_submitted(&self) -> bool {
        self.submission.is_some()
    }

    /// Previous number, only when the player is returning.
    pub fn retained_candidate(&self) -> Option<u32> {
        if self.is_returning {
            self.previous_jersey_number
        } else {
            None
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SubmissionField {
    One(Submission),
    Many(Vec<Submission>),
}

fn deserialize_submission<'de, D>(deserializer: D) -> Result<Option<Submission>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<SubmissionField>::deserialize(deserializer)?;
    Ok(match field {
        None => None,
        Some(SubmissionField::One(sub)) => Some(sub),
        Some(SubmissionField::Many(subs)) => subs.into_iter().next(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JerseySize;

    fn base_json(submission: &str) -> String {
        format!(
            r#"{{"id":"p1","grade":7,"is_returning":true,"participated_fall_ball":false,
                "previous_jersey_number":12,"submission":{}}}"#,
            submission
        )
    }

    #[test]
    fn test_submission_accepts_object() {
        let json = base_json(
            r#"{"first_choice":1,"second_choice":2,"third_choice":3,"requested_size":"YM"}"#,
        );
        let player: Player = serde_json::from_str(&json).unwrap();
        let sub = player.submission.unwrap();
        assert_eq!(sub.first_choice, 1);
        assert_eq!(sub.requested_size, JerseySize::YouthMedium);
    }

    #[test]
    fn test_submission_accepts_array_and_takes_first() {
        let json = base_json(
            r#"[{"player_id":"p1","first_choice":4,"second_choice":5,"third_choice":6,"requested_size":"AL"},
                {"player_id":"p1","first_choice":9,"second_choice":9,"third_choice":9,"requested_size":"YS"}]"#,
        );
        let player: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player.submission.unwrap().first_choice, 4);
    }

    #[test]
    fn test_submission_empty_array_or_null_is_none() {
        let player: Player = serde_json::from_str(&base_json("[]")).unwrap();
        assert!(!player.has_submitted());
        let player: Player = serde_json::from_str(&base_json("null")).unwrap();
        assert!(!player.has_submitted());
    }

    #[test]
    fn test_submission_missing_field_is_none() {
        let json = r#"{"id":"p2","grade":6,"is_returning":false,"participated_fall_ball":true}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert!(player.submission.is_none());
        assert!(player.previous_jersey_number.is_none());
    }

    #[test]
    fn test_retained_candidate_requires_returning() {
        let mut player = Player::new("p1", 8);
        player.previous_jersey_number = Some(3);
        assert_eq!(player.retained_candidate(), None);
        let player = player.returning(Some(3));
        assert_eq!(player.retained_candidate(), Some(3));
    }

    #[test]
    fn test_with_submission_stamps_player_id() {
        let player = Player::new("abc", 7)
            .named("Ada", "Lovelace")
            .with_submission(Submission::new("", [1, 2, 3], JerseySize::YouthLarge));
        assert_eq!(player.submission.as_ref().unwrap().player_id, "abc");
        assert_eq!(player.full_name(), "Ada Lovelace");
    }
}
