//! Budget engine
//!
//! Pure functions over a single trip: totals, per-category breakdowns,
//! threshold filters and over-budget checks. Thresholds and limits are taken
//! as given; a negative threshold matches every activity with positive cost.
//!
//! Costs are bounded by [`Money::MAX`], so totals are exact for any
//! realistic trip; `Money` arithmetic saturates past that.

use std::collections::BTreeMap;

use crate::models::{Activity, ActivityCategory, Money, Trip};

/// Sum of all activity costs (zero for a trip without activities)
pub fn total_cost(trip: &Trip) -> Money {
    trip.activities.iter().map(|a| a.cost).sum()
}

/// Cost per category
///
/// Categories without activities are absent from the map rather than
/// present with zero.
pub fn cost_by_category(trip: &Trip) -> BTreeMap<ActivityCategory, Money> {
    let mut totals = BTreeMap::new();
    for activity in &trip.activities {
        *totals.entry(activity.category).or_insert_with(Money::zero) += activity.cost;
    }
    totals
}

/// Activities costing strictly more than `threshold`, in trip order
pub fn high_cost_activities(trip: &Trip, threshold: Money) -> Vec<&Activity> {
    trip.activities
        .iter()
        .filter(|a| a.cost > threshold)
        .collect()
}

/// True iff the trip's total cost is strictly greater than `limit`
pub fn is_over_budget(trip: &Trip, limit: Money) -> bool {
    check_limit(trip, limit).over_budget
}

/// Compare the trip's total against a spending limit
pub fn check_limit(trip: &Trip, limit: Money) -> LimitStatus {
    let total = total_cost(trip);
    LimitStatus {
        limit,
        remaining: limit - total,
        over_budget: total > limit,
    }
}

/// Everything the `budget summary` command reports about a trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSummary {
    pub total: Money,
    pub by_category: BTreeMap<ActivityCategory, Money>,
    pub activity_count: usize,
    pub limit: Option<LimitStatus>,
}

/// Position of a trip's total relative to a spending limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitStatus {
    pub limit: Money,
    /// `limit - total`; negative when over budget
    pub remaining: Money,
    pub over_budget: bool,
}

/// Compute a full budget summary, optionally against a limit
pub fn summarize(trip: &Trip, limit: Option<Money>) -> BudgetSummary {
    BudgetSummary {
        total: total_cost(trip),
        by_category: cost_by_category(trip),
        activity_count: trip.activities.len(),
        limit: limit.map(|limit| check_limit(trip, limit)),
    }
}
