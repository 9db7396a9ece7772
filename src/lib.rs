//! Trip Planner - terminal-based trip planning
//!
//! This library provides the core of the `trip` command: trips made of timed
//! activities, cost reports over them, and optional country information for
//! a destination.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (trips, activities, money, categories)
//! - `storage`: JSON file storage and load/save sessions
//! - `services`: Budget and itinerary engines plus the trip service
//! - `enrichment`: Country lookup over HTTP
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use trip_planner::services::budget;
//! use trip_planner::storage::{JsonFileStore, TripStore};
//!
//! let store = JsonFileStore::new("trips.json".into());
//! let db = store.load()?;
//! for trip in &db.trips {
//!     println!("{}: {}", trip.destination, budget::total_cost(trip));
//! }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod enrichment;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TripError;
