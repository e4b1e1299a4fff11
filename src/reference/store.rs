//! Validated, read-only collection of reference destinations

use std::collections::HashSet;
use std::path::Path;

use crate::error::{TripError, TripResult};
use crate::models::{ReferenceDestination, ReferenceValidationError};

/// The embedded six-destination dataset
pub const BUILTIN_DESTINATIONS: &str = include_str!("destinations.json");

/// Destinations looked up by key
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    destinations: Vec<ReferenceDestination>,
}

impl ReferenceStore {
    /// Build a store, validating every record once
    pub fn new(destinations: Vec<ReferenceDestination>) -> TripResult<Self> {
        let mut seen = HashSet::new();
        for destination in &destinations {
            destination.validate().map_err(reference_error)?;
            if !seen.insert(normalize_key(&destination.key)) {
                return Err(reference_error(ReferenceValidationError::DuplicateKey(
                    destination.key.clone(),
                )));
            }
        }
        tracing::debug!(count = destinations.len(), "reference data loaded");
        Ok(Self { destinations })
    }

    /// The dataset shipped with the crate
    pub fn builtin() -> TripResult<Self> {
        Self::from_json_str(BUILTIN_DESTINATIONS)
    }

    pub fn from_json_str(json: &str) -> TripResult<Self> {
        let destinations: Vec<ReferenceDestination> = serde_json::from_str(json)
            .map_err(|e| TripError::Reference(format!("Failed to parse destinations: {}", e)))?;
        Self::new(destinations)
    }

    pub fn from_yaml_str(yaml: &str) -> TripResult<Self> {
        let destinations: Vec<ReferenceDestination> = serde_yaml::from_str(yaml)
            .map_err(|e| TripError::Reference(format!("Failed to parse destinations: {}", e)))?;
        Self::new(destinations)
    }

    /// Load a dataset file; `.yaml`/`.yml` are read as YAML, anything else as JSON
    pub fn load(path: &Path) -> TripResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TripError::Io(format!(
                "Failed to read reference data {}: {}",
                path.display(),
                e
            ))
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            _ => Self::from_json_str(&contents),
        }
    }

    /// Look up a destination; a miss simply means "no comparison available"
    pub fn get(&self, key: &str) -> Option<&ReferenceDestination> {
        let key = normalize_key(key);
        self.destinations
            .iter()
            .find(|d| normalize_key(&d.key) == key)
    }

    /// Like [`ReferenceStore::get`] but reports a miss as an error
    pub fn require(&self, key: &str) -> TripResult<&ReferenceDestination> {
        self.get(key)
            .ok_or_else(|| TripError::destination_not_found(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.destinations.iter().map(|d| d.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceDestination> {
        self.destinations.iter()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

fn reference_error(err: ReferenceValidationError) -> TripError {
    TripError::Reference(err.to_string())
}
