//! Jersey CLI Library
//!
//! Snapshot (JSON or CSV) → allocator → assignments + report + SHA256
//! fingerprint of the assignment list. Two runs over the same snapshot
//! produce the same fingerprint.

pub mod csv_input;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jersey_core::{
    AllocationReport, Allocator, AllocatorConfig, Assignment, RosterSnapshot, SnapshotValidator,
    ValidationIssue,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

pub use csv_input::{
    read_jerseys_csv, read_players_csv, read_submissions_csv, write_assignments_csv,
};

/// Where a snapshot comes from.
#[derive(Debug, Clone)]
pub enum SnapshotSource {
    /// One JSON document `{ "players": [...], "jerseys": [...] }`.
    Json(PathBuf),
    /// Three CSV exports.
    Csv {
        players: PathBuf,
        submissions: PathBuf,
        jerseys: PathBuf,
    },
}

/// Run metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// SHA256 of the canonical JSON assignment list (hex)
    pub fingerprint: String,
    /// RFC3339 time the run finished; not part of the fingerprint
    pub generated_at: String,
    pub eligible: usize,
    pub assigned: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRun {
    pub assignments: Vec<Assignment>,
    pub report: AllocationReport,
    pub issues: Vec<ValidationIssue>,
    pub metadata: RunMetadata,
}

pub fn load_snapshot(source: &SnapshotSource) -> Result<RosterSnapshot> {
    match source {
        SnapshotSource::Json(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
            RosterSnapshot::from_json(&json)
                .with_context(|| format!("Failed to parse snapshot: {}", path.display()))
        }
        SnapshotSource::Csv {
            players,
            submissions,
            jerseys,
        } => {
            let mut snapshot =
                RosterSnapshot::new(read_players_csv(players)?, read_jerseys_csv(jerseys)?);
            let orphans = snapshot.attach_submissions(read_submissions_csv(submissions)?);
            for orphan in &orphans {
                warn!(
                    player = %orphan.player_id,
                    "submission ignored: unknown player or duplicate submission"
                );
            }
            Ok(snapshot)
        }
    }
}

/// SHA256 over the JSON encoding of the assignment list.
pub fn fingerprint(assignments: &[Assignment]) -> Result<String> {
    let bytes = serde_json::to_vec(assignments).context("Failed to encode assignments")?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

pub fn run(snapshot: &RosterSnapshot, config: AllocatorConfig) -> Result<AllocationRun> {
    let allocator = Allocator::new(config);
    let assignments = allocator.allocate(&snapshot.players, &snapshot.jerseys);
    let report = AllocationReport::build(&snapshot.players, &snapshot.jerseys, &assignments);
    let issues = SnapshotValidator::validate(&snapshot.players, &snapshot.jerseys);

    let metadata = RunMetadata {
        fingerprint: fingerprint(&assignments)?,
        generated_at: chrono::Utc::now().to_rfc3339(),
        eligible: report.submitted,
        assigned: report.assigned,
    };
    info!(
        assigned = metadata.assigned,
        eligible = metadata.eligible,
        fingerprint = %metadata.fingerprint,
        "allocation run finished"
    );

    Ok(AllocationRun {
        assignments,
        report,
        issues,
        metadata,
    })
}

/// Pretty JSON to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jersey_core::AssignmentMethod;

    const SNAPSHOT: &str = r#"{
        "players": [
            {"id":"alice","grade":7,"is_returning":true,"participated_fall_ball":true,"previous_jersey_number":2,
             "submission":{"first_choice":2,"second_choice":1,"third_choice":3,"requested_size":"YM"}},
            {"id":"bob","grade":8,"is_returning":false,"participated_fall_ball":false,
             "submission":{"first_choice":1,"second_choice":2,"third_choice":3,"requested_size":"YM"}}
        ],
        "jerseys": [
            {"number":1,"sizes":["YM"]},
            {"number":2,"sizes":["YM","AL"]},
            {"number":3,"sizes":["AL"]}
        ]
    }"#;

    #[test]
    fn test_json_snapshot_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, SNAPSHOT).unwrap();

        let snapshot = load_snapshot(&SnapshotSource::Json(path)).unwrap();
        let result = run(&snapshot, AllocatorConfig::default()).unwrap();

        assert_eq!(result.assignments.len(), 2);
        assert_eq!(result.assignments[0].assignment_method, AssignmentMethod::KeptOld);
        assert_eq!(result.metadata.eligible, 2);
        assert_eq!(result.metadata.fingerprint.len(), 64);
    }

    #[test]
    fn test_fingerprint_stable_across_runs() {
        let snapshot = RosterSnapshot::from_json(SNAPSHOT).unwrap();
        let first = run(&snapshot, AllocatorConfig::default()).unwrap();
        let second = run(&snapshot, AllocatorConfig::default()).unwrap();
        assert_eq!(first.metadata.fingerprint, second.metadata.fingerprint);
        assert_ne!(first.metadata.fingerprint, fingerprint(&[]).unwrap());
    }

    #[test]
    fn test_csv_snapshot_attaches_submissions() {
        let dir = tempfile::tempdir().unwrap();
        let players = dir.path().join("players.csv");
        let submissions = dir.path().join("submissions.csv");
        let jerseys = dir.path().join("jerseys.csv");
        fs::write(
            &players,
            "id,first_name,last_name,grade,is_returning,participated_fall_ball,previous_jersey_number\n\
             alice,Alice,A,7,true,true,2\n\
             bob,Bob,B,8,false,false,\n\
             carol,Carol,C,6,false,false,\n",
        )
        .unwrap();
        fs::write(
            &submissions,
            "player_id,first_choice,second_choice,third_choice,requested_size\n\
             alice,2,1,3,YM\n\
             bob,1,2,3,YM\n\
             ghost,1,2,3,YM\n",
        )
        .unwrap();
        fs::write(
            &jerseys,
            "number,sizes,is_available\n1,YM,true\n2,YM;AL,true\n3,AL,true\n",
        )
        .unwrap();

        let snapshot = load_snapshot(&SnapshotSource::Csv {
            players,
            submissions,
            jerseys,
        })
        .unwrap();
        assert_eq!(snapshot.submitted_count(), 2);

        let from_csv = run(&snapshot, AllocatorConfig::default()).unwrap();
        let from_json = run(
            &RosterSnapshot::from_json(SNAPSHOT).unwrap(),
            AllocatorConfig::default(),
        )
        .unwrap();
        assert_eq!(from_csv.assignments, from_json.assignments);
        assert_eq!(from_csv.report.total_players, 3);
    }

    #[test]
    fn test_write_json_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/assignments.json");
        write_json(&path, &vec![1, 2, 3]).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains('2'));
    }

    #[test]
    fn test_missing_snapshot_file_has_context() {
        let err =
            load_snapshot(&SnapshotSource::Json("/nonexistent/snap.json".into())).unwrap_err();
        assert!(err.to_string().contains("Failed to read snapshot file"));
    }
}
