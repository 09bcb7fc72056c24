//! Jersey inventory entries

use serde::{Deserialize, Serialize};

use super::size::JerseySize;

/// One jersey number and the sizes physically on hand for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JerseyInventory {
    pub number: u32,
    #[serde(default)]
    pub sizes: Vec<JerseySize>,
    /// Administrative switch only; allocation state is tracked per run.
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl JerseyInventory {
    pub fn new(number: u32, sizes: impl IntoIterator<Item = JerseySize>) -> Self {
        Self {
            number,
            sizes: sizes.into_iter().collect(),
            is_available: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.is_available = false;
        self
    }

    pub fn has_size(&self, size: JerseySize) -> bool {
        self.sizes.contains(&size)
    }
}
