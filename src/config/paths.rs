//! Path management for the trip planner
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `TRIP_PLANNER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/trip-planner` or `~/.config/trip-planner`
//! 3. Windows: `%APPDATA%\trip-planner`

use std::path::PathBuf;

use crate::error::TripError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "TRIP_PLANNER_DATA_DIR";

/// Manages all paths used by the trip planner
#[derive(Debug, Clone)]
pub struct TripPaths {
    /// Base directory for all trip planner data
    base_dir: PathBuf,
}

impl TripPaths {
    /// Create a new TripPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TripError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TripPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/trip-planner/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/trip-planner/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to trips.json
    pub fn trips_file(&self) -> PathBuf {
        self.data_dir().join("trips.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), TripError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TripError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TripError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TripError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("trip-planner"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| TripError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("trip-planner"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TripError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TripError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("trip-planner"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.trips_file(),
            temp_dir.path().join("data").join("trips.json")
        );
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var(DATA_DIR_ENV, custom_path);
        let paths = TripPaths::new().unwrap();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.data_dir().exists());
        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }
}
