//! # Allocator
//!
//! Single pass over a roster snapshot:
//!
//! ```text
//! tiering ──► retention (Tier 1) ──► priority sort (Tier 2, Tier 3)
//!                                        │
//!                                        ▼
//!                          preference matcher ──► fallback resolver
//! ```
//!
//! The pool is the only mutable state. Output order is decision order.

pub mod fallback;
pub mod matcher;
pub mod pool;
pub mod priority;
pub mod tiering;

pub use fallback::{find_fallback_number, proximity_order};
pub use pool::AvailabilityPool;
pub use priority::PriorityComparator;
pub use tiering::{Candidate, Tier, Tiers};

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::config::AllocatorConfig;
use crate::models::{Assignment, JerseyInventory, Player};

#[derive(Debug, Clone, Default)]
pub struct Allocator {
    config: AllocatorConfig,
}

impl Allocator {
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Assign numbers to every submitting player the inventory can cover.
    ///
    /// Never fails. Players the inventory cannot serve are simply absent
    /// from the result; compare against the eligible count to detect that.
    pub fn allocate(&self, players: &[Player], jerseys: &[JerseyInventory]) -> Vec<Assignment> {
        let mut pool =
            AvailabilityPool::from_inventory(jerseys, self.config.honor_availability_flag);
        let tiers = Tiers::partition(players);
        let eligible = tiers.eligible_count();
        let mut assigned = BTreeSet::new();
        let mut assignments = Vec::with_capacity(eligible);

        let missed = tiering::retain_previous_numbers(
            &tiers.retention,
            &mut pool,
            &mut assigned,
            &mut assignments,
        );

        let mut queue = tiers.returning;
        if self.config.reroute_unretained {
            queue.extend(missed);
        } else if !missed.is_empty() {
            debug!(count = missed.len(), "retention misses left unassigned");
        }
        queue.extend(tiers.new);

        let comparator = PriorityComparator::new(self.config.priority);
        comparator.sort(&mut queue);

        for candidate in &queue {
            let id = candidate.player.id.as_str();
            if assigned.contains(id) {
                debug!(player = id, "player id already assigned, skipping record");
                continue;
            }
            let assignment = matcher::match_preferences(candidate, &mut pool)
                .or_else(|| fallback::resolve_fallback(candidate, &mut pool));
            if let Some(assignment) = assignment {
                assigned.insert(id);
                assignments.push(assignment);
            }
        }

        info!(
            eligible,
            assigned = assignments.len(),
            remaining = pool.len(),
            "allocation complete"
        );
        assignments
    }
}

/// Run the allocator with the default configuration.
pub fn allocate(players: &[Player], jerseys: &[JerseyInventory]) -> Vec<Assignment> {
    Allocator::default().allocate(players, jerseys)
}
