//! Path management for trip-budget
//!
//! ## Path Resolution Order
//!
//! 1. `TRIP_BUDGET_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (e.g. `~/.config/trip-budget` on Linux)

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::TripError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "TRIP_BUDGET_DIR";

/// Manages all paths used by trip-budget
#[derive(Debug, Clone)]
pub struct TripPaths {
    base_dir: PathBuf,
}

impl TripPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is unset.
    pub fn new() -> Result<Self, TripError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "trip-budget")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    TripError::Config("Could not determine a configuration directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create TripPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location for user-supplied reference data
    pub fn reference_file(&self) -> PathBuf {
        self.base_dir.join("destinations.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TripError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TripError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Whether a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
