//! Trip service
//!
//! Creates trips, appends activities and resolves user-supplied trip
//! references. Every mutation runs in its own [`Session`]: load, change,
//! commit.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{TripError, TripResult};
use crate::models::{Activity, ActivityCategory, Money, Trip, TripId};
use crate::storage::{Session, TripStore};

/// Validated input for a new activity
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub name: String,
    pub cost: Money,
    pub category: ActivityCategory,
    pub start_time: NaiveDateTime,
}

/// Service for trip management
pub struct TripService<'a> {
    store: &'a dyn TripStore,
    audit: Option<&'a AuditLogger>,
}

impl<'a> TripService<'a> {
    /// Create a new trip service
    pub fn new(store: &'a dyn TripStore) -> Self {
        Self { store, audit: None }
    }

    /// Record created entities in the given audit log
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Create and persist a trip with no activities
    pub fn create_trip(&self, destination: &str, start_date: NaiveDate) -> TripResult<Trip> {
        let trip = Trip::new(destination.trim(), start_date);
        trip.validate()
            .map_err(|e| TripError::Validation(e.to_string()))?;

        let mut session = Session::begin(self.store)?;
        session
            .database_mut()
            .insert_trip(trip.clone())
            .map_err(|_| TripError::Duplicate {
                entity_type: "Trip",
                identifier: trip.id.to_string(),
            })?;
        session.commit()?;

        info!(trip = %trip.id, destination = %trip.destination, "created trip");
        self.record(AuditEntry::create(
            EntityType::Trip,
            trip.id.to_string(),
            Some(trip.destination.clone()),
            &trip,
        ));

        Ok(trip)
    }

    /// All trips in creation order
    pub fn list_trips(&self) -> TripResult<Vec<Trip>> {
        Ok(Session::begin(self.store)?.database().trips.clone())
    }

    /// Get a trip by ID
    pub fn get_trip(&self, id: TripId) -> TripResult<Trip> {
        let session = Session::begin(self.store)?;
        session
            .database()
            .trip(id)
            .cloned()
            .ok_or_else(|| TripError::trip_not_found(id.to_string()))
    }

    /// Resolve a trip by destination name or ID
    ///
    /// Destination matches are case-insensitive. IDs may be given in full,
    /// in the `trip-xxxxxxxx` short form, or as a leading part of the UUID.
    /// A reference matching more than one trip is rejected.
    pub fn find_trip(&self, identifier: &str) -> TripResult<Trip> {
        let session = Session::begin(self.store)?;
        let db = session.database();

        let mut matches = db.trips_by_destination(identifier);
        if matches.is_empty() {
            matches = db.trips.iter().filter(|t| t.id.matches(identifier)).collect();
        }

        match matches.as_slice() {
            [] => Err(TripError::trip_not_found(identifier)),
            [trip] => Ok((*trip).clone()),
            many => {
                let ids: Vec<_> = many.iter().map(|t| t.id.to_string()).collect();
                Err(TripError::Validation(format!(
                    "'{}' matches {} trips ({}); use a trip ID",
                    identifier,
                    many.len(),
                    ids.join(", ")
                )))
            }
        }
    }

    /// Append an activity to an existing trip and persist it
    pub fn add_activity(&self, trip_id: TripId, input: NewActivity) -> TripResult<Activity> {
        let activity = Activity::new(
            input.name.trim(),
            input.cost,
            input.category,
            input.start_time,
        );
        activity
            .validate()
            .map_err(|e| TripError::Validation(e.to_string()))?;

        let mut session = Session::begin(self.store)?;
        let trip = session
            .database_mut()
            .trip_mut(trip_id)
            .ok_or_else(|| TripError::trip_not_found(trip_id.to_string()))?;
        trip.add_activity(activity.clone())
            .map_err(|_| TripError::Duplicate {
                entity_type: "Activity",
                identifier: activity.id.to_string(),
            })?;
        session.commit()?;

        info!(trip = %trip_id, activity = %activity.id, name = %activity.name, "added activity");
        self.record(
            AuditEntry::create(
                EntityType::Activity,
                activity.id.to_string(),
                Some(activity.name.clone()),
                &activity,
            )
            .with_parent(trip_id.to_string()),
        );

        Ok(activity)
    }

    /// Write an audit entry; the change is already committed, so failures
    /// are logged rather than returned
    fn record(&self, entry: AuditEntry) {
        if let Some(audit) = self.audit {
            if let Err(err) = audit.log(&entry) {
                warn!(error = %err, path = %audit.path().display(), "failed to write audit entry");
            }
        }
    }
}
