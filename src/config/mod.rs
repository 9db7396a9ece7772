//! Configuration module for the trip planner
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TripPaths;
pub use settings::Settings;
