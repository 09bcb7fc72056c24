//! CSV inputs - roster, submissions and inventory exports
//!
//! Three files, one row per record, headers required:
//! - players:     `id,first_name,last_name,grade,is_returning,`
//!   `participated_fall_ball,previous_jersey_number`
//! - submissions: `player_id,first_choice,second_choice,third_choice,requested_size`
//! - jerseys:     `number,sizes,is_available` (`sizes` like `YM;AL`)
//!
//! Empty `previous_jersey_number` means none; missing `is_available` means true.

use std::path::Path;

use anyhow::{Context, Result};
use jersey_core::models::{parse_size_list, JerseyInventory, JerseySize, Player, Submission};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
struct PlayerRecord {
    id: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    grade: u8,
    is_returning: bool,
    participated_fall_ball: bool,
    #[serde(default)]
    previous_jersey_number: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct SubmissionRecord {
    player_id: String,
    first_choice: u32,
    second_choice: u32,
    third_choice: u32,
    requested_size: String,
}

#[derive(Debug, Clone, Deserialize)]
struct JerseyRecord {
    number: u32,
    #[serde(default)]
    sizes: String,
    #[serde(default)]
    is_available: Option<bool>,
}

/// Row written by [`write_assignments_csv`].
#[derive(Debug, Clone, Serialize)]
struct AssignmentRecord<'a> {
    player_id: &'a str,
    jersey_number: u32,
    assigned_size: &'static str,
    assignment_method: &'static str,
}

fn reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))
}

pub fn read_players_csv(path: &Path) -> Result<Vec<Player>> {
    let mut players = Vec::new();
    for (row, record) in reader(path)?.deserialize::<PlayerRecord>().enumerate() {
        let record = record
            .with_context(|| format!("Invalid player row {} in {}", row + 1, path.display()))?;
        let mut player = Player::new(record.id, record.grade)
            .named(record.first_name, record.last_name)
            .with_fall_ball(record.participated_fall_ball);
        player.is_returning = record.is_returning;
        player.previous_jersey_number = record.previous_jersey_number;
        players.push(player);
    }
    Ok(players)
}

pub fn read_submissions_csv(path: &Path) -> Result<Vec<Submission>> {
    let mut submissions = Vec::new();
    for (row, record) in reader(path)?.deserialize::<SubmissionRecord>().enumerate() {
        let record = record
            .with_context(|| format!("Invalid submission row {} in {}", row + 1, path.display()))?;
        let requested_size: JerseySize = record
            .requested_size
            .parse()
            .with_context(|| format!("Invalid requested_size on submission row {}", row + 1))?;
        submissions.push(Submission::new(
            record.player_id,
            [record.first_choice, record.second_choice, record.third_choice],
            requested_size,
        ));
    }
    Ok(submissions)
}

pub fn read_jerseys_csv(path: &Path) -> Result<Vec<JerseyInventory>> {
    let mut jerseys = Vec::new();
    for (row, record) in reader(path)?.deserialize::<JerseyRecord>().enumerate() {
        let record = record
            .with_context(|| format!("Invalid jersey row {} in {}", row + 1, path.display()))?;
        let sizes = parse_size_list(&record.sizes)
            .with_context(|| format!("Invalid sizes on jersey row {}", row + 1))?;
        jerseys.push(JerseyInventory {
            number: record.number,
            sizes,
            is_available: record.is_available.unwrap_or(true),
        });
    }
    Ok(jerseys)
}

pub fn write_assignments_csv(path: &Path, assignments: &[jersey_core::Assignment]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    for assignment in assignments {
        writer.serialize(AssignmentRecord {
            player_id: &assignment.player_id,
            jersey_number: assignment.jersey_number,
            assigned_size: assignment.assigned_size.code(),
            assignment_method: assignment.assignment_method.as_str(),
        })?;
    }
    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}
