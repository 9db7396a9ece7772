//! Itinerary query engine
//!
//! Pure queries over a trip's activities. Every function returns borrowed
//! activities in a new vector and never reorders the trip itself. Dates are
//! compared on the local wall clock; start times carry no timezone.

use chrono::NaiveDate;

use crate::models::{Activity, ActivityCategory, Trip};

/// Activities of the given category, in trip order
pub fn filter_by_category(trip: &Trip, category: ActivityCategory) -> Vec<&Activity> {
    trip.activities
        .iter()
        .filter(|a| a.category == category)
        .collect()
}

/// Activities starting on the given calendar day, in trip order
pub fn filter_by_date(trip: &Trip, date: NaiveDate) -> Vec<&Activity> {
    trip.activities
        .iter()
        .filter(|a| a.start_date() == date)
        .collect()
}

/// Activities ordered by start time
///
/// Activities with equal start times keep their relative trip order.
pub fn sorted_by_start_time(trip: &Trip) -> Vec<&Activity> {
    let mut sorted: Vec<&Activity> = trip.activities.iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|a| a.start_time);
    sorted
}

/// Day-by-day itinerary: days ascending, activities chronological within a day
pub fn group_by_day(trip: &Trip) -> Vec<(NaiveDate, Vec<&Activity>)> {
    let mut days: Vec<(NaiveDate, Vec<&Activity>)> = Vec::new();
    for activity in sorted_by_start_time(trip) {
        let day = activity.start_date();
        if let Some((last_day, items)) = days.last_mut() {
            if *last_day == day {
                items.push(activity);
                continue;
            }
        }
        days.push((day, vec![activity]));
    }
    days
}
