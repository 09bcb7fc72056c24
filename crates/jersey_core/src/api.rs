//! JSON API for allocation runs
//!
//! A request carries the whole snapshot (and optionally a config); the
//! response wraps the assignment list and its report in the standard
//! envelope. Errors are reported in the envelope, never panicked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::allocator::Allocator;
use crate::config::AllocatorConfig;
use crate::error::{CoreError, Result};
use crate::models::{Assignment, JerseyInventory, Player};
use crate::report::AllocationReport;
use crate::validation::{SnapshotValidator, ValidationIssue};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn err(error: &CoreError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: error.code().to_string(),
                message: error.to_string(),
            }),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub schema_version: Option<String>,
    pub players: Vec<Player>,
    pub jerseys: Vec<JerseyInventory>,
    #[serde(default)]
    pub config: Option<AllocatorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResponse {
    pub assignments: Vec<Assignment>,
    pub report: AllocationReport,
    pub issues: Vec<ValidationIssue>,
}

fn check_schema_version(requested: Option<&str>) -> Result<()> {
    match requested {
        Some(version) if version != API_VERSION => Err(CoreError::SchemaVersion {
            found: version.to_string(),
            expected: API_VERSION.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Run an allocation for an already-parsed request.
pub fn run_allocation(request: &AllocationRequest) -> Result<AllocationResponse> {
    check_schema_version(request.schema_version.as_deref())?;
    if request.jerseys.is_empty() && request.players.iter().any(Player::has_submitted) {
        info!("request has submissions but an empty inventory");
    }

    let allocator = Allocator::new(request.config.clone().unwrap_or_default());
    let assignments = allocator.allocate(&request.players, &request.jerseys);
    let report = AllocationReport::build(&request.players, &request.jerseys, &assignments);
    let issues = SnapshotValidator::validate(&request.players, &request.jerseys);

    Ok(AllocationResponse {
        assignments,
        report,
        issues,
    })
}

/// JSON in, JSON envelope out.
pub fn allocate_json(request_json: &str) -> String {
    let response = serde_json::from_str::<AllocationRequest>(request_json)
        .map_err(CoreError::from)
        .and_then(|request| run_allocation(&request));

    let envelope = match response {
        Ok(data) => ApiResponse::ok(data),
        Err(err) => {
            error!(code = err.code(), "allocation request failed: {}", err);
            ApiResponse::err(&err)
        }
    };
    serde_json::to_string(&envelope).unwrap_or_else(|err| {
        format!(
            r#"{{"success":false,"data":null,"error":{{"code":"SERIALIZATION_ERROR","message":"{}"}},"schema_version":"{}","timestamp":"{}"}}"#,
            err.to_string().replace('"', "'"),
            API_VERSION,
            Utc::now().to_rfc3339()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssignmentMethod;

    const REQUEST: &str = r#"{
        "players": [
            {"id":"alice","grade":7,"is_returning":true,"participated_fall_ball":true,
             "previous_jersey_number":2,
             "submission":[{"player_id":"alice","first_choice":2,"second_choice":1,"third_choice":3,"requested_size":"YM"}]},
            {"id":"bob","grade":8,"is_returning":false,"participated_fall_ball":false,
             "previous_jersey_number":null,
             "submission":{"first_choice":1,"second_choice":2,"third_choice":3,"requested_size":"YM"}},
            {"id":"carol","grade":6,"is_returning":false,"participated_fall_ball":false,"submission":null}
        ],
        "jerseys": [
            {"number":1,"sizes":["YM"],"is_available":true},
            {"number":2,"sizes":["YM","AL"],"is_available":true},
            {"number":3,"sizes":["AL"],"is_available":true}
        ]
    }"#;

    #[test]
    fn test_allocate_json_success() {
        let out = allocate_json(REQUEST);
        let envelope: ApiResponse<AllocationResponse> = serde_json::from_str(&out).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.schema_version, API_VERSION);

        let data = envelope.data.unwrap();
        assert_eq!(data.assignments.len(), 2);
        assert_eq!(data.assignments[0].assignment_method, AssignmentMethod::KeptOld);
        assert_eq!(data.assignments[1].player_id, "bob");
        assert_eq!(data.report.submitted, 2);
        assert_eq!(data.report.unused_numbers, vec![3]);
    }

    #[test]
    fn test_allocate_json_bad_input() {
        let out = allocate_json("{\"players\": 12}");
        let envelope: ApiResponse<AllocationResponse> = serde_json::from_str(&out).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.unwrap().code, "DESERIALIZATION_ERROR");
    }

    #[test]
    fn test_schema_version_mismatch() {
        let request = AllocationRequest {
            schema_version: Some("v9".into()),
            players: vec![],
            jerseys: vec![],
            config: None,
        };
        assert!(matches!(
            run_allocation(&request),
            Err(CoreError::SchemaVersion { .. })
        ));
    }

    #[test]
    fn test_config_in_request_is_applied() {
        let request = r#"{
            "players": [{"id":"a","grade":8,"is_returning":false,"participated_fall_ball":false,
                "submission":{"first_choice":1,"second_choice":2,"third_choice":3,"requested_size":"AL"}}],
            "jerseys": [{"number":1,"sizes":["AL"],"is_available":false},{"number":2,"sizes":["AL"]}],
            "config": {"honor_availability_flag": true}
        }"#;
        let request: AllocationRequest = serde_json::from_str(request).unwrap();
        let response = run_allocation(&request).unwrap();
        assert_eq!(response.assignments[0].jersey_number, 2);
        assert_eq!(response.assignments[0].assignment_method, AssignmentMethod::SecondChoice);
    }
}
