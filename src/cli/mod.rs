//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod history;
pub mod reference;
pub mod report;

pub use history::handle_history_command;
pub use reference::{
    handle_categories_command, handle_compare_command, handle_destination_command,
    handle_destinations_command,
};
pub use report::{handle_report_command, ReportArgs, ReportFormat};

use crate::config::{Settings, TripPaths};
use crate::error::TripResult;
use crate::reference::ReferenceStore;

/// Load the reference dataset
///
/// Order: the file named in settings, then `destinations.json` in the
/// config directory if present, then the built-in dataset.
pub fn load_reference_store(paths: &TripPaths, settings: &Settings) -> TripResult<ReferenceStore> {
    if let Some(path) = &settings.reference_data {
        return ReferenceStore::load(path);
    }
    let default_file = paths.reference_file();
    if default_file.exists() {
        return ReferenceStore::load(&default_file);
    }
    ReferenceStore::builtin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LISBON: &str = r#"[{"key":"lisbon","name":"Lisbon, Portugal","flag":"",
        "total_travelers":120,"average_days":4,"average_total_cost":1700000,
        "popular_season":"Summer","average_costs":{"flight":800000,
        "accommodation":400000,"food":200000,"transport":60000,
        "attraction":90000,"shopping":100000}}]"#;

    #[test]
    fn test_builtin_without_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = load_reference_store(&paths, &Settings::default()).unwrap();
        assert!(store.get("tokyo").is_some());
    }

    #[test]
    fn test_config_dir_dataset_replaces_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.reference_file(), LISBON).unwrap();

        let store = load_reference_store(&paths, &Settings::default()).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get("lisbon").is_some());
        assert!(store.get("tokyo").is_none());
    }

    #[test]
    fn test_settings_path_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.reference_file(), LISBON).unwrap();

        let mut settings = Settings::default();
        settings.reference_data = Some(temp_dir.path().join("missing.json"));
        assert!(load_reference_store(&paths, &settings).is_err());
    }
}
