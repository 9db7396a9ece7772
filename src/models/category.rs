//! Activity categories
//!
//! The category set is closed. Adding a variant forces every exhaustive
//! match in the budget and itinerary code to be revisited.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of an activity within a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Outdoors,
    Culinary,
    Sightseeing,
}

impl ActivityCategory {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[Self::Outdoors, Self::Culinary, Self::Sightseeing]
    }

    /// The lowercase name used on the command line and in the data file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outdoors => "outdoors",
            Self::Culinary => "culinary",
            Self::Sightseeing => "sightseeing",
        }
    }

    /// Human-friendly label for terminal output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Outdoors => "Outdoors",
            Self::Culinary => "Culinary",
            Self::Sightseeing => "Sightseeing",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.trim().to_string()))
    }
}

/// Returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid: Vec<_> = ActivityCategory::all().iter().map(|c| c.as_str()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            valid.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}
