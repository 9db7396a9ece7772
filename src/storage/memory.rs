//! In-memory store, used by tests and when embedding the planner

use std::sync::RwLock;

use crate::error::{TripError, TripResult};
use crate::models::Database;

use super::TripStore;

/// Store that keeps the database in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Database>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TripStore for MemoryStore {
    fn load(&self) -> TripResult<Database> {
        let data = self
            .data
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    fn save(&self, db: &Database) -> TripResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = db.clone();
        Ok(())
    }
}
