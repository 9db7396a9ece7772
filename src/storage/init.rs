//! Storage initialization
//!
//! Handles first-run setup: directories plus an empty trips.json.

use crate::config::paths::TripPaths;
use crate::error::TripError;
use crate::models::Database;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// An existing trips.json is left as is.
pub fn initialize_storage(paths: &TripPaths) -> Result<(), TripError> {
    paths.ensure_directories()?;

    if !paths.trips_file().exists() {
        write_json_atomic(paths.trips_file(), &Database::default())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TripPaths) -> bool {
    !paths.trips_file().exists()
}
