//! Trip model
//!
//! A trip owns its activities. The core only ever appends to the activity
//! list; insertion order is kept and is not necessarily chronological.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::activity::{Activity, ActivityValidationError};
use super::ids::{ActivityId, TripId};

/// A travel plan with a destination, a start date and its activities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier
    pub id: TripId,

    /// Destination display name (also used for country lookups)
    pub destination: String,

    /// First day of the trip
    pub start_date: NaiveDate,

    /// Activities in insertion order
    #[serde(default)]
    pub activities: Vec<Activity>,

    /// When the trip was created
    pub created_at: DateTime<Utc>,

    /// When the trip was last modified
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    /// Create a new trip with no activities
    pub fn new(destination: impl Into<String>, start_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: TripId::new(),
            destination: destination.into(),
            start_date,
            activities: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append an activity, rejecting a duplicate activity ID
    pub fn add_activity(&mut self, activity: Activity) -> Result<(), TripValidationError> {
        if self.activities.iter().any(|a| a.id == activity.id) {
            return Err(TripValidationError::DuplicateActivity(activity.id));
        }

        self.activities.push(activity);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Get an activity by ID
    pub fn activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Check whether the trip has any activities
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Validate the trip and every activity it owns
    pub fn validate(&self) -> Result<(), TripValidationError> {
        if self.destination.trim().is_empty() {
            return Err(TripValidationError::EmptyDestination);
        }

        let mut seen = HashSet::with_capacity(self.activities.len());
        for activity in &self.activities {
            if !seen.insert(activity.id) {
                return Err(TripValidationError::DuplicateActivity(activity.id));
            }
            activity
                .validate()
                .map_err(|e| TripValidationError::InvalidActivity(activity.id, e))?;
        }

        Ok(())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.destination, self.start_date)
    }
}

/// Validation errors for trips
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripValidationError {
    EmptyDestination,
    DuplicateActivity(ActivityId),
    InvalidActivity(ActivityId, ActivityValidationError),
}

impl fmt::Display for TripValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDestination => write!(f, "Trip destination cannot be empty"),
            Self::DuplicateActivity(id) => write!(f, "Activity {} already exists in this trip", id),
            Self::InvalidActivity(id, err) => write!(f, "Activity {}: {}", id, err),
        }
    }
}

impl std::error::Error for TripValidationError {}
