//! Reference data CLI commands
//!
//! Category listing, destination profiles and destination comparison.

use crate::config::Settings;
use crate::error::{TripError, TripResult};
use crate::models::CanonicalCategory;
use crate::reference::ReferenceStore;
use crate::reports::{ComparisonReport, DestinationListReport, DestinationReport};
use crate::services::ComparisonService;

/// Print the canonical categories
pub fn handle_categories_command() -> TripResult<()> {
    println!("{:<16} {:<26} Averaged", "Key", "Label");
    println!("{}", "-".repeat(52));
    for category in CanonicalCategory::all() {
        let averaged = CanonicalCategory::averaged().contains(category);
        println!(
            "{:<16} {} {:<23} {}",
            category.key(),
            category.icon(),
            category.label(),
            if averaged { "yes" } else { "no" }
        );
    }
    Ok(())
}

pub fn handle_destinations_command(store: &ReferenceStore, settings: &Settings) -> TripResult<()> {
    print!(
        "{}",
        DestinationListReport::generate(store).format_terminal(settings)
    );
    Ok(())
}

pub fn handle_destination_command(
    store: &ReferenceStore,
    settings: &Settings,
    key: &str,
) -> TripResult<()> {
    let report = DestinationReport::generate(store, key)?;
    print!("{}", report.format_terminal(settings));
    Ok(())
}

/// Compare two destinations
///
/// `threshold` overrides the configured "about the same" percentage.
pub fn handle_compare_command(
    store: &ReferenceStore,
    settings: &Settings,
    left: &str,
    right: &str,
    threshold: Option<f64>,
) -> TripResult<()> {
    let threshold = threshold.unwrap_or(settings.same_threshold_percent);
    if !ComparisonService::is_valid_threshold(threshold) {
        return Err(TripError::Validation(format!(
            "threshold must be a non-negative number, got {}",
            threshold
        )));
    }
    let service = ComparisonService::new(threshold);
    let report = ComparisonReport::generate(store, &service, left, right)?;
    print!("{}", report.format_terminal(settings));
    Ok(())
}
