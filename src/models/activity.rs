//! Activity model
//!
//! A single bookable item within a trip: a museum visit, a dinner, a hike.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ActivityCategory;
use super::ids::ActivityId;
use super::money::Money;

/// An activity scheduled as part of a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier
    pub id: ActivityId,

    /// Activity name
    pub name: String,

    /// Cost of the activity (never negative)
    pub cost: Money,

    /// Activity category
    pub category: ActivityCategory,

    /// When the activity starts, in local wall-clock time
    pub start_time: NaiveDateTime,
}

impl Activity {
    /// Create a new activity with a fresh ID
    ///
    /// Fields are copied unchanged; call [`Activity::validate`] before
    /// attaching the activity to a trip.
    pub fn new(
        name: impl Into<String>,
        cost: Money,
        category: ActivityCategory,
        start_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            name: name.into(),
            cost,
            category,
            start_time,
        }
    }

    /// The calendar day the activity starts on
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Validate the activity
    pub fn validate(&self) -> Result<(), ActivityValidationError> {
        if self.name.trim().is_empty() {
            return Err(ActivityValidationError::EmptyName);
        }

        if self.cost.is_negative() {
            return Err(ActivityValidationError::NegativeCost(self.cost));
        }

        if !self.cost.is_within_limit() {
            return Err(ActivityValidationError::CostTooLarge(self.cost));
        }

        Ok(())
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for activities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityValidationError {
    EmptyName,
    NegativeCost(Money),
    CostTooLarge(Money),
}

impl fmt::Display for ActivityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Activity name cannot be empty"),
            Self::NegativeCost(cost) => write!(f, "Activity cost cannot be negative ({})", cost),
            Self::CostTooLarge(cost) => {
                write!(f, "Activity cost {} exceeds the maximum of {}", cost, Money::MAX)
            }
        }
    }
}

impl std::error::Error for ActivityValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_new_activity_copies_fields() {
        let start = at("2026-07-02", "10:00");
        let activity = Activity::new(
            "Eiffel Tower",
            Money::from_units(50),
            ActivityCategory::Sightseeing,
            start,
        );

        assert_eq!(activity.name, "Eiffel Tower");
        assert_eq!(activity.cost, Money::from_units(50));
        assert_eq!(activity.category, ActivityCategory::Sightseeing);
        assert_eq!(activity.start_time, start);
        assert_eq!(activity.start_date(), NaiveDate::from_ymd_opt(2026, 7, 2).unwrap());
    }

    #[test]
    fn test_validation() {
        let mut activity = Activity::new(
            "Hike",
            Money::zero(),
            ActivityCategory::Outdoors,
            at("2026-07-02", "08:30"),
        );
        assert!(activity.validate().is_ok());

        activity.name = "   ".into();
        assert_eq!(activity.validate(), Err(ActivityValidationError::EmptyName));

        activity.name = "Hike".into();
        activity.cost = Money::from_cents(-1);
        assert_eq!(
            activity.validate(),
            Err(ActivityValidationError::NegativeCost(Money::from_cents(-1)))
        );

        activity.cost = Money::MAX;
        assert!(activity.validate().is_ok());

        activity.cost = Money::MAX + Money::from_cents(1);
        assert_eq!(
            activity.validate(),
            Err(ActivityValidationError::CostTooLarge(activity.cost))
        );
    }

    #[test]
    fn test_serialization() {
        let activity = Activity::new(
            "Louvre",
            Money::from_units(30),
            ActivityCategory::Culinary,
            at("2026-07-03", "14:15"),
        );
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["cost"], 3000);
        assert_eq!(json["category"], "culinary");
        assert_eq!(json["start_time"], "2026-07-03T14:15:00");

        let back: Activity = serde_json::from_value(json).unwrap();
        assert_eq!(back, activity);
    }
}
