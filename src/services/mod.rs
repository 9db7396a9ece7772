//! Service layer for the trip planner
//!
//! `budget` and `itinerary` are pure engines over a loaded trip; `trip`
//! handles creation and lookup on top of the storage layer.

pub mod budget;
pub mod itinerary;
pub mod trip;

pub use budget::{BudgetSummary, LimitStatus};
pub use trip::{NewActivity, TripService};
