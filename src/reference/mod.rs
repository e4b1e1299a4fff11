//! Reference data store
//!
//! Static per-destination peer statistics. The built-in dataset is embedded
//! in the binary; a replacement can be loaded from a JSON or YAML file.

pub mod store;

pub use store::{ReferenceStore, BUILTIN_DESTINATIONS};
