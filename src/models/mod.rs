//! Core data models for the trip planner
//!
//! This module contains the data structures that represent the travel
//! domain: trips, their activities, and the persisted database of trips.

pub mod activity;
pub mod category;
pub mod country;
pub mod database;
pub mod ids;
pub mod money;
pub mod trip;

pub use activity::{Activity, ActivityValidationError};
pub use category::{ActivityCategory, UnknownCategory};
pub use country::CountryInfo;
pub use database::{Database, DatabaseValidationError, SCHEMA_VERSION};
pub use ids::{ActivityId, TripId};
pub use money::{Money, MoneyParseError};
pub use trip::{Trip, TripValidationError};
