//! Proximity fallback resolver
//!
//! Used once per player whose three choices are all gone:
//! 1. smallest free number stocked in the requested size;
//! 2. else walk outward through the size order (1 below, 1 above,
//!    2 below, 2 above, ...) and take the smallest free number in the
//!    first size that has one;
//! 3. else the smallest free number of any size;
//! 4. else nothing.
//!
//! The assignment records the requested size even when the number was
//! found through a neighboring size.

use tracing::{debug, info};

use super::pool::AvailabilityPool;
use super::tiering::Candidate;
use crate::models::{Assignment, AssignmentMethod, JerseySize};

/// Sizes to try after `requested`, nearest first, below before above.
pub fn proximity_order(requested: JerseySize) -> Vec<JerseySize> {
    let origin = requested.index();
    let count = JerseySize::ORDER.len();
    let mut order = Vec::with_capacity(count - 1);
    for distance in 1..count {
        if let Some(below) = origin.checked_sub(distance).and_then(JerseySize::from_index) {
            order.push(below);
        }
        if let Some(above) = JerseySize::from_index(origin + distance) {
            order.push(above);
        }
    }
    order
}

/// Number the resolver would pick for `requested`, without claiming it.
pub fn find_fallback_number(pool: &AvailabilityPool, requested: JerseySize) -> Option<u32> {
    if let Some(number) = pool.smallest_with_size(requested) {
        return Some(number);
    }
    proximity_order(requested)
        .into_iter()
        .find_map(|size| pool.smallest_with_size(size))
        .or_else(|| pool.smallest())
}

pub fn resolve_fallback(
    candidate: &Candidate<'_>,
    pool: &mut AvailabilityPool,
) -> Option<Assignment> {
    let requested = candidate.submission.requested_size;
    let Some(number) = find_fallback_number(pool, requested) else {
        info!(player = candidate.player_id(), "inventory exhausted, no number assigned");
        return None;
    };
    pool.claim(number);
    debug!(player = candidate.player_id(), number, %requested, "fallback number");

    Some(Assignment::new(
        candidate.player.id.clone(),
        number,
        requested,
        AssignmentMethod::Fallback,
    ))
}
