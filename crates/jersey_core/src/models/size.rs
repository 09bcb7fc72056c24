//! Jersey sizes
//!
//! Sizes form a fixed total order from the smallest youth cut to the largest
//! adult cut. The order matters: the fallback resolver walks outward from the
//! requested size along it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Physical jersey size, ordered smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JerseySize {
    #[serde(rename = "YS")]
    YouthSmall,
    #[serde(rename = "YM")]
    YouthMedium,
    #[serde(rename = "YL")]
    YouthLarge,
    #[serde(rename = "AS")]
    AdultSmall,
    #[serde(rename = "AM")]
    AdultMedium,
    #[serde(rename = "AL")]
    AdultLarge,
}

impl JerseySize {
    /// All sizes in ascending order.
    pub const ORDER: [JerseySize; 6] = [
        JerseySize::YouthSmall,
        JerseySize::YouthMedium,
        JerseySize::YouthLarge,
        JerseySize::AdultSmall,
        JerseySize::AdultMedium,
        JerseySize::AdultLarge,
    ];

    /// Position of this size in [`JerseySize::ORDER`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Size at `index` in the ordering, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ORDER.get(index).copied()
    }

    /// Short code used on forms and in storage ("YS", "AM", ...).
    pub fn code(self) -> &'static str {
        match self {
            JerseySize::YouthSmall => "YS",
            JerseySize::YouthMedium => "YM",
            JerseySize::YouthLarge => "YL",
            JerseySize::AdultSmall => "AS",
            JerseySize::AdultMedium => "AM",
            JerseySize::AdultLarge => "AL",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            JerseySize::YouthSmall => "Youth Small",
            JerseySize::YouthMedium => "Youth Medium",
            JerseySize::YouthLarge => "Youth Large",
            JerseySize::AdultSmall => "Adult Small",
            JerseySize::AdultMedium => "Adult Medium",
            JerseySize::AdultLarge => "Adult Large",
        }
    }
}

impl fmt::Display for JerseySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for JerseySize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ORDER
            .iter()
            .copied()
            .find(|size| size.code() == code)
            .ok_or_else(|| CoreError::UnknownSize(s.trim().to_string()))
    }
}

/// Parse a list of size codes separated by `;`, `,`, `|` or whitespace.
///
/// Empty tokens are skipped, so `""` parses to an empty list.
pub fn parse_size_list(raw: &str) -> Result<Vec<JerseySize>, CoreError> {
    raw.split(|c: char| c == ';' || c == ',' || c == '|' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(JerseySize::from_str)
        .collect()
}
