//! trip-budget - Travel budget planning and peer cost comparison
//!
//! This library holds a traveler's total budget, a per-category plan and a
//! ledger of logged expenses, reconciles them against each other and
//! against peer averages for the chosen destination, and compares
//! destinations with one another.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, destinations)
//! - `reference`: Validated reference destination dataset
//! - `services`: Ledger, plan table, reconciliation and comparison logic
//! - `reports`: Terminal reports
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `trip-budget` binary
//!
//! # Example
//!
//! ```rust
//! use trip_budget::models::{ExpenseInput, Money, TripContext};
//! use trip_budget::reference::ReferenceStore;
//! use trip_budget::services::TripSession;
//!
//! let store = ReferenceStore::builtin().unwrap();
//! let trip = TripContext::new(Money::new(1_500_000), 5, 4).with_destination("tokyo");
//! let mut session = TripSession::new(trip);
//! session.add_expense(&ExpenseInput::new("flight", "350000", "ICN-NRT", "2024-06-01"));
//!
//! let overview = session.reconcile(&store);
//! assert_eq!(overview.remaining_budget, Money::new(1_150_000));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reference;
pub mod reports;
pub mod services;

pub use error::{TripError, TripResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber once
///
/// Honors `RUST_LOG`; without it only `trip_budget` events at info and
/// above are shown. Output goes to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("trip_budget=info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
