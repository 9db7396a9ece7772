//! Whole-document JSON files
//!
//! Reads treat a missing file as "nothing stored yet". Writes go through a
//! sibling temp file so a crash leaves either the old or the new document.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TripError, TripResult};

fn storage_error(action: &str, path: &Path, err: impl fmt::Display) -> TripError {
    TripError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Parse the document at `path`, or `None` if there is no file
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> TripResult<Option<T>> {
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(storage_error("read", path, err)),
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|err| storage_error("parse", path, err))
}

/// Replace the document at `path`, creating parent directories as needed
pub fn write_json_atomic<T: Serialize>(path: impl AsRef<Path>, data: &T) -> TripResult<()> {
    let path = path.as_ref();

    let mut bytes =
        serde_json::to_vec_pretty(data).map_err(|err| storage_error("serialize", path, err))?;
    bytes.push(b'\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| storage_error("create directory for", path, err))?;
    }

    // Same directory as the target, so the rename cannot cross filesystems
    let temp_path = path.with_extension("json.tmp");
    let written = File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp_path, path));

    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("write", path, err));
    }
    Ok(())
}
