//! Configuration module for trip-budget
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TripPaths;
pub use settings::Settings;
