//! Storage layer for the trip planner
//!
//! The core sees persistence only through [`TripStore`]: load the whole
//! database, save the whole database. Commands work on a [`Session`]
//! snapshot and commit it when they mutate.

pub mod file_io;
pub mod init;
pub mod json_store;
pub mod memory;
pub mod session;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use session::Session;

use crate::error::TripResult;
use crate::models::Database;

/// Whole-database persistence contract
///
/// Both operations are atomic from the caller's point of view. Failures are
/// reported as [`crate::error::TripError::Storage`]; nothing is retried.
pub trait TripStore {
    /// Read the full database
    fn load(&self) -> TripResult<Database>;

    /// Replace the persisted database with `db`
    fn save(&self, db: &Database) -> TripResult<()>;
}
