//! Export module for trip-budget
//!
//! Writes a reconciled budget overview in machine-readable formats:
//! - CSV: one row per expense with its variance (spreadsheet-compatible)
//! - JSON: the full overview wrapped with export metadata
//! - YAML: the same document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_overview_csv;
pub use json::{export_overview_json, OverviewExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_overview_yaml;
