//! User settings for trip-budget
//!
//! Manages display preferences, the optional reference data override and
//! the tunables used by reconciliation and comparison.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::TripPaths;
use crate::error::TripError;
use crate::models::Money;
use crate::services::comparison::{ComparisonService, DEFAULT_SAME_THRESHOLD_PERCENT};

/// User settings for trip-budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Print the symbol after the amount instead of before it
    #[serde(default)]
    pub currency_suffix: bool,

    /// Destination key used when a session does not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_destination: Option<String>,

    /// JSON or YAML file replacing the built-in destinations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_data: Option<PathBuf>,

    /// Allow expense edits to move a record to another day
    #[serde(default)]
    pub allow_date_edits: bool,

    /// Differences below this percentage are "about the same"
    #[serde(default = "default_same_threshold")]
    pub same_threshold_percent: f64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₩".to_string()
}

fn default_same_threshold() -> f64 {
    DEFAULT_SAME_THRESHOLD_PERCENT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            currency_suffix: false,
            default_destination: None,
            reference_data: None,
            allow_date_edits: false,
            same_threshold_percent: default_same_threshold(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &TripPaths) -> Result<Self, TripError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TripError::Io(format!("Failed to read settings file: {}", e)))?;
        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TripError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;

        tracing::debug!(path = %settings_path.display(), "settings loaded");
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TripPaths) -> Result<(), TripError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TripError::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TripError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), TripError> {
        if !ComparisonService::is_valid_threshold(self.same_threshold_percent) {
            return Err(TripError::Config(format!(
                "same_threshold_percent must be a non-negative number, got {}",
                self.same_threshold_percent
            )));
        }
        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol, self.currency_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₩");
        assert_eq!(settings.same_threshold_percent, 5.0);
        assert!(!settings.allow_date_edits);
        assert!(settings.reference_data.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "원".into();
        settings.currency_suffix = true;
        settings.default_destination = Some("tokyo".into());
        settings.same_threshold_percent = 10.0;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "원");
        assert!(loaded.currency_suffix);
        assert_eq!(loaded.default_destination.as_deref(), Some("tokyo"));
        assert_eq!(loaded.same_threshold_percent, 10.0);
        assert_eq!(loaded.format_money(Money::new(12_000)), "12,000원");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"allow_date_edits": true}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.allow_date_edits);
        assert_eq!(loaded.currency_symbol, "₩");
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"same_threshold_percent": -1}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TripError::Config(_)));
    }
}
