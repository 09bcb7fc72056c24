//! Availability pool
//!
//! The shrinking set of unclaimed numbers for one run, plus the size lookup
//! the fallback resolver needs. Ordered collections keep every query
//! independent of hash order, so runs over the same snapshot are identical.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::models::{JerseyInventory, JerseySize};

#[derive(Debug, Clone, Default)]
pub struct AvailabilityPool {
    available: BTreeSet<u32>,
    sizes: BTreeMap<u32, Vec<JerseySize>>,
}

impl AvailabilityPool {
    /// Build the pool from the inventory's numeric key set.
    ///
    /// Duplicate numbers resolve to the last entry. With
    /// `honor_availability_flag`, disabled entries start out claimed.
    pub fn from_inventory(jerseys: &[JerseyInventory], honor_availability_flag: bool) -> Self {
        let mut pool = Self::default();
        for jersey in jerseys {
            if pool.sizes.insert(jersey.number, jersey.sizes.clone()).is_some() {
                warn!(number = jersey.number, "duplicate inventory entry, last one wins");
            }
            if honor_availability_flag && !jersey.is_available {
                pool.available.remove(&jersey.number);
            } else {
                pool.available.insert(jersey.number);
            }
        }
        debug!(
            numbers = pool.sizes.len(),
            available = pool.available.len(),
            "availability pool built"
        );
        pool
    }

    pub fn contains(&self, number: u32) -> bool {
        self.available.contains(&number)
    }

    /// Remove `number` from the pool. Returns false if it was not available.
    pub fn claim(&mut self, number: u32) -> bool {
        self.available.remove(&number)
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Unclaimed numbers in ascending order.
    pub fn remaining(&self) -> impl Iterator<Item = u32> + '_ {
        self.available.iter().copied()
    }

    /// Sizes stocked for `number`, if it is in the inventory at all.
    pub fn sizes_of(&self, number: u32) -> Option<&[JerseySize]> {
        self.sizes.get(&number).map(Vec::as_slice)
    }

    pub fn smallest(&self) -> Option<u32> {
        self.available.first().copied()
    }

    /// Smallest unclaimed number stocked in `size`.
    pub fn smallest_with_size(&self, size: JerseySize) -> Option<u32> {
        self.remaining().find(|number| {
            self.sizes_of(*number)
                .is_some_and(|sizes| sizes.contains(&size))
        })
    }
}
