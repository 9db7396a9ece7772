//! Append-only audit log
//!
//! One JSON object per line. Each entry goes out in a single write so a
//! reader never sees half an entry followed by the next one.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{TripError, TripResult};

use super::entry::AuditEntry;

/// JSONL audit log at a fixed path
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry, creating the file on first use
    pub fn log(&self, entry: &AuditEntry) -> TripResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| TripError::Json(format!("Failed to serialize audit entry: {}", e)))?;
        line.push('\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(|e| {
                TripError::Io(format!("Failed to append to {}: {}", self.log_path.display(), e))
            })
    }

    /// Every entry, oldest first; blank lines are ignored
    pub fn read_all(&self) -> TripResult<Vec<AuditEntry>> {
        let contents = match fs::read_to_string(&self.log_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TripError::Io(format!(
                    "Failed to read {}: {}",
                    self.log_path.display(),
                    e
                )))
            }
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    TripError::Json(format!("Bad audit entry on line {}: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TripResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let older = entries.len().saturating_sub(count);
        entries.drain(..older);
        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
