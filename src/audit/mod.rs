//! Audit logging for the trip planner
//!
//! Records every created trip and activity in an append-only JSONL file.
//!
//! ```rust,ignore
//! use trip_planner::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Trip,
//!     trip.id.to_string(),
//!     Some(trip.destination.clone()),
//!     &trip,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
