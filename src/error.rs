//! Custom error types for trip-budget
//!
//! The reconciliation core never fails: malformed input degrades to a
//! rejected no-op or a safe default. These errors belong to the outer
//! surfaces only (settings, reference data files, session files, export
//! and the command line).

use thiserror::Error;

/// The main error type for trip-budget operations
#[derive(Error, Debug)]
pub enum TripError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reference dataset could not be loaded or failed validation
    #[error("Reference data error: {0}")]
    Reference(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TripError {
    /// Create a "not found" error for reference destinations
    pub fn destination_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Destination",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for session files
    pub fn session_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Session file",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Reference(_))
    }
}

impl From<std::io::Error> for TripError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TripError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TripError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for trip-budget operations
pub type TripResult<T> = Result<T, TripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TripError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TripError::destination_not_found("atlantis");
        assert_eq!(err.to_string(), "Destination not found: atlantis");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_reference_error_counts_as_validation() {
        let err = TripError::Reference("negative average".into());
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let trip_err: TripError = io_err.into();
        assert!(matches!(trip_err, TripError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let trip_err: TripError = json_err.into();
        assert!(matches!(trip_err, TripError::Json(_)));
    }
}
