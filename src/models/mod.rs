//! Core data models for trip-budget
//!
//! This module contains the data structures of the travel budgeting
//! domain: money, categories, expenses, plan rows, reference destinations
//! and the trip itself.

pub mod category;
pub mod destination;
pub mod expense;
pub mod ids;
pub mod money;
pub mod plan;
pub mod trip;

pub use category::CanonicalCategory;
pub use destination::{
    AverageCosts, Course, ItineraryStop, PeerReview, ReferenceDestination,
    ReferenceValidationError,
};
pub use expense::{ExpenseDetails, ExpenseInput, ExpenseRecord, ExpenseValidationError};
pub use ids::{ExpenseId, TripId};
pub use money::{Money, MoneyParseError};
pub use plan::{BudgetPlanEntry, PlanInput, PlanValidationError};
pub use trip::{TripContext, TripRecord, TripValidationError};
