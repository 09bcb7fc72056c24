//! # Allocator Configuration
//!
//! Every knob the allocator exposes lives here so a run can be reproduced
//! from its inputs plus this struct.
//!
//! ```rust
//! use jersey_core::config::AllocatorConfig;
//!
//! let config = AllocatorConfig::default();
//! let strict = AllocatorConfig::strict();
//! assert!(!config.honor_availability_flag);
//! assert!(config.reroute_unretained);
//! assert!(strict.honor_availability_flag);
//! ```

use serde::{Deserialize, Serialize};

/// Weights of the matcher priority score.
///
/// `score = fall_ball_bonus * participated_fall_ball + grade_weight * grade`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    pub fall_ball_bonus: u32,
    pub grade_weight: u32,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            fall_ball_bonus: 100,
            grade_weight: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    pub priority: PriorityWeights,
    /// Leave administratively disabled numbers out of the pool.
    pub honor_availability_flag: bool,
    /// Send Tier-1 players whose old number is gone through the matcher
    /// with the other returning players. `false` leaves them unassigned.
    pub reroute_unretained: bool,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            priority: PriorityWeights::default(),
            honor_availability_flag: false,
            reroute_unretained: true,
        }
    }
}

impl AllocatorConfig {
    /// Reference behavior (same as `Default`).
    pub fn reference() -> Self {
        Self::default()
    }

    /// Reference behavior that also respects disabled numbers.
    pub fn strict() -> Self {
        Self {
            honor_availability_flag: true,
            ..Self::default()
        }
    }
}

// ========== Tests ==========
