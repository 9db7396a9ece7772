//! JSON file store
//!
//! Keeps the whole database in a single trips.json document.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TripError, TripResult};
use crate::models::Database;

use super::file_io::{read_json, write_json_atomic};
use super::TripStore;

/// Store backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file (it need not exist yet)
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TripStore for JsonFileStore {
    fn load(&self) -> TripResult<Database> {
        let db = read_json::<Database>(&self.path)?.unwrap_or_default();
        db.validate().map_err(|reason| {
            TripError::Storage(format!("Cannot load {}: {}", self.path.display(), reason))
        })?;

        debug!(path = %self.path.display(), trips = db.len(), "loaded database");
        Ok(db)
    }

    fn save(&self, db: &Database) -> TripResult<()> {
        write_json_atomic(&self.path, db)?;
        debug!(path = %self.path.display(), trips = db.len(), "saved database");
        Ok(())
    }
}
