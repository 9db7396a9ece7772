//! Load/mutate/save sessions
//!
//! A [`Session`] owns one snapshot of the database for the duration of a
//! command. Changes only reach the store on [`Session::commit`]; a session
//! dropped without committing leaves the store untouched.

use crate::error::TripResult;
use crate::models::Database;

use super::TripStore;

/// A single-owner working copy of the database
pub struct Session<'a> {
    store: &'a dyn TripStore,
    db: Database,
    dirty: bool,
}

impl<'a> Session<'a> {
    /// Load a fresh snapshot from the store
    pub fn begin(store: &'a dyn TripStore) -> TripResult<Self> {
        let db = store.load()?;
        Ok(Self {
            store,
            db,
            dirty: false,
        })
    }

    /// Read-only access to the snapshot
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Mutable access to the snapshot; marks the session as needing a save
    pub fn database_mut(&mut self) -> &mut Database {
        self.dirty = true;
        &mut self.db
    }

    /// Whether the snapshot has been handed out for mutation
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the snapshot back to the store if it was mutated
    pub fn commit(self) -> TripResult<Database> {
        if self.dirty {
            self.store.save(&self.db)?;
        }
        Ok(self.db)
    }
}
