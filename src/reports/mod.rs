//! Reports module for trip-budget
//!
//! Terminal renderings of the budget overview, destination comparisons
//! and destination profiles.

pub mod budget_overview;
pub mod comparison;
pub mod destination;
pub mod history;

pub use budget_overview::BudgetOverviewReport;
pub use comparison::ComparisonReport;
pub use destination::{DestinationListReport, DestinationReport};
pub use history::HistoryReport;
