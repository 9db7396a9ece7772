//! The persisted collection of trips
//!
//! The database is always read and written as a whole. Trip order is
//! creation order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ids::TripId;
use super::trip::{Trip, TripValidationError};

/// Current schema version of the database document
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Every trip the user has planned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Trips in creation order
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            trips: Vec::new(),
        }
    }
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trip, rejecting a duplicate trip ID
    pub fn insert_trip(&mut self, trip: Trip) -> Result<(), DatabaseValidationError> {
        if self.trips.iter().any(|t| t.id == trip.id) {
            return Err(DatabaseValidationError::DuplicateTrip(trip.id));
        }
        self.trips.push(trip);
        Ok(())
    }

    /// Get a trip by ID
    pub fn trip(&self, id: TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    /// Get a mutable trip by ID
    pub fn trip_mut(&mut self, id: TripId) -> Option<&mut Trip> {
        self.trips.iter_mut().find(|t| t.id == id)
    }

    /// Find trips whose destination matches (case-insensitive)
    pub fn trips_by_destination(&self, destination: &str) -> Vec<&Trip> {
        let wanted = destination.trim().to_lowercase();
        self.trips
            .iter()
            .filter(|t| t.destination.to_lowercase() == wanted)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Validate the schema version, global invariants and every trip
    pub fn validate(&self) -> Result<(), DatabaseValidationError> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(DatabaseValidationError::UnsupportedSchema(self.schema_version));
        }

        let mut seen = HashSet::with_capacity(self.trips.len());
        for trip in &self.trips {
            if !seen.insert(trip.id) {
                return Err(DatabaseValidationError::DuplicateTrip(trip.id));
            }
            trip.validate()
                .map_err(|e| DatabaseValidationError::InvalidTrip(trip.id, e))?;
        }
        Ok(())
    }
}

/// Validation errors for the database as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseValidationError {
    UnsupportedSchema(u32),
    DuplicateTrip(TripId),
    InvalidTrip(TripId, TripValidationError),
}

impl fmt::Display for DatabaseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSchema(version) => write!(
                f,
                "schema version {} is newer than supported version {}",
                version, SCHEMA_VERSION
            ),
            Self::DuplicateTrip(id) => write!(f, "Trip {} appears more than once", id),
            Self::InvalidTrip(id, err) => write!(f, "Trip {}: {}", id, err),
        }
    }
}

impl std::error::Error for DatabaseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trip(destination: &str) -> Trip {
        Trip::new(destination, NaiveDate::from_ymd_opt(2026, 7, 1).unwrap())
    }

    #[test]
    fn test_default_is_empty() {
        let db = Database::default();
        assert!(db.is_empty());
        assert_eq!(db.schema_version, SCHEMA_VERSION);
        assert!(db.validate().is_ok());
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut db = Database::new();
        let paris = trip("Paris");
        let id = paris.id;
        db.insert_trip(paris).unwrap();
        db.insert_trip(trip("Rome")).unwrap();

        assert_eq!(db.len(), 2);
        assert_eq!(db.trip(id).unwrap().destination, "Paris");
        assert_eq!(db.trips_by_destination("paris").len(), 1);
        assert!(db.trips_by_destination("Berlin").is_empty());

        db.trip_mut(id).unwrap().destination = "Paris, France".into();
        assert_eq!(db.trip(id).unwrap().destination, "Paris, France");
    }

    #[test]
    fn test_duplicate_trip_rejected() {
        let mut db = Database::new();
        let paris = trip("Paris");
        db.insert_trip(paris.clone()).unwrap();
        assert_eq!(
            db.insert_trip(paris.clone()),
            Err(DatabaseValidationError::DuplicateTrip(paris.id))
        );

        db.trips.push(paris.clone());
        assert_eq!(
            db.validate(),
            Err(DatabaseValidationError::DuplicateTrip(paris.id))
        );
    }

    #[test]
    fn test_newer_schema_rejected() {
        let db = Database {
            schema_version: SCHEMA_VERSION + 1,
            trips: Vec::new(),
        };
        assert_eq!(
            db.validate(),
            Err(DatabaseValidationError::UnsupportedSchema(SCHEMA_VERSION + 1))
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let db: Database = serde_json::from_str("{}").unwrap();
        assert_eq!(db, Database::default());
    }
}
