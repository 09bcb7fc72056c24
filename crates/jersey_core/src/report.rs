//! Allocation report
//!
//! Summarizes a run the way the admin dashboard presents it: roster
//! coverage, how each number was obtained, who is still without a number,
//! and which fallback assignments record a size the number is not stocked in.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, AssignmentMethod, JerseyInventory, JerseySize, Player};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCounts {
    pub kept_old: usize,
    pub first_choice: usize,
    pub second_choice: usize,
    pub third_choice: usize,
    pub fallback: usize,
}

impl MethodCounts {
    pub fn record(&mut self, method: AssignmentMethod) {
        match method {
            AssignmentMethod::KeptOld => self.kept_old += 1,
            AssignmentMethod::FirstChoice => self.first_choice += 1,
            AssignmentMethod::SecondChoice => self.second_choice += 1,
            AssignmentMethod::ThirdChoice => self.third_choice += 1,
            AssignmentMethod::Fallback => self.fallback += 1,
        }
    }

    pub fn get(&self, method: AssignmentMethod) -> usize {
        match method {
            AssignmentMethod::KeptOld => self.kept_old,
            AssignmentMethod::FirstChoice => self.first_choice,
            AssignmentMethod::SecondChoice => self.second_choice,
            AssignmentMethod::ThirdChoice => self.third_choice,
            AssignmentMethod::Fallback => self.fallback,
        }
    }
}

/// Recorded size is not stocked for the assigned number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeMismatch {
    pub player_id: String,
    pub jersey_number: u32,
    pub assigned_size: JerseySize,
    pub stocked_sizes: Vec<JerseySize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub total_players: usize,
    pub submitted: usize,
    /// Rounded percentage of the roster that submitted.
    pub completion_rate: u32,
    pub assigned: usize,
    pub by_method: MethodCounts,
    /// Submitting players left without a number, in roster order.
    pub unassigned: Vec<String>,
    /// Inventory numbers nobody received, ascending.
    pub unused_numbers: Vec<u32>,
    pub size_mismatches: Vec<SizeMismatch>,
}

impl AllocationReport {
    pub fn build(
        players: &[Player],
        jerseys: &[JerseyInventory],
        assignments: &[Assignment],
    ) -> Self {
        let total_players = players.len();
        let submitted = players.iter().filter(|p| p.has_submitted()).count();

        let mut by_method = MethodCounts::default();
        for assignment in assignments {
            by_method.record(assignment.assignment_method);
        }

        let assigned_players: BTreeSet<&str> =
            assignments.iter().map(|a| a.player_id.as_str()).collect();
        let unassigned = players
            .iter()
            .filter(|p| p.has_submitted() && !assigned_players.contains(p.id.as_str()))
            .map(|p| p.id.clone())
            .collect();

        let taken: BTreeSet<u32> = assignments.iter().map(|a| a.jersey_number).collect();
        let unused_numbers = jerseys
            .iter()
            .map(|j| j.number)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter(|n| !taken.contains(n))
            .collect();

        Self {
            total_players,
            submitted,
            completion_rate: completion_rate(submitted, total_players),
            assigned: assignments.len(),
            by_method,
            unassigned,
            unused_numbers,
            size_mismatches: size_mismatches(jerseys, assignments),
        }
    }

    /// True when every submitting player received a number.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }
}

/// `round(submitted / total * 100)`, halves rounding up; 0 for an empty roster.
pub fn completion_rate(submitted: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((submitted * 200 + total) / (2 * total)) as u32
}

/// Assignments whose recorded size the number is not stocked in.
///
/// Sizes follow the last inventory entry per number, as the pool does.
pub fn size_mismatches(
    jerseys: &[JerseyInventory],
    assignments: &[Assignment],
) -> Vec<SizeMismatch> {
    assignments
        .iter()
        .filter_map(|assignment| {
            let entry = jerseys
                .iter()
                .rev()
                .find(|j| j.number == assignment.jersey_number);
            if entry.is_some_and(|j| j.has_size(assignment.assigned_size)) {
                return None;
            }
            Some(SizeMismatch {
                player_id: assignment.player_id.clone(),
                jersey_number: assignment.jersey_number,
                assigned_size: assignment.assigned_size,
                stocked_sizes: entry.map(|j| j.sizes.clone()).unwrap_or_default(),
            })
        })
        .collect()
}
