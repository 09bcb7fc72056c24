//! # jersey_core - Deterministic Jersey Number Allocation
//!
//! Assigns each player who submitted preferences one jersey number and size
//! from a shared inventory, in a single deterministic pass.
//!
//! ## Features
//! - Returning players keep their old number when they ask for it
//! - Returning players, then new players, by fall-ball participation and grade
//! - Ranked choices tried in order, then a size-proximity fallback
//! - Same snapshot = same assignments (no clock, no randomness, no hash order)
//! - JSON API and coverage report for the surrounding roster application
//!
//! ```rust
//! use jersey_core::models::{JerseyInventory, JerseySize, Player, Submission};
//!
//! let jerseys = vec![JerseyInventory::new(1, [JerseySize::YouthMedium])];
//! let players = vec![Player::new("p1", 7)
//!     .with_submission(Submission::new("p1", [1, 2, 3], JerseySize::YouthMedium))];
//!
//! let assignments = jersey_core::allocate(&players, &jerseys);
//! assert_eq!(assignments[0].jersey_number, 1);
//! ```

pub mod allocator;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod validation;

pub use allocator::{allocate, Allocator};
pub use api::{allocate_json, AllocationRequest, AllocationResponse, ApiError, ApiResponse};
pub use config::{AllocatorConfig, PriorityWeights};
pub use error::{CoreError, Result};
pub use models::{
    Assignment, AssignmentMethod, ChoiceRank, JerseyInventory, JerseySize, Player, RosterSnapshot,
    Submission,
};
pub use report::AllocationReport;
pub use validation::{Severity, SnapshotValidator, ValidationIssue};
