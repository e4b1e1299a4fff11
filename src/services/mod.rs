//! Service layer for trip-budget
//!
//! Services hold the budgeting logic on top of the models: the expense
//! ledger and plan table own mutable state, while reconciliation and
//! comparison borrow snapshots and compute derived figures.

pub mod comparison;
pub mod ledger;
pub mod plan;
pub mod reconciliation;
pub mod session;

pub use comparison::{ComparisonService, CostDifference, DestinationComparison, Standing};
pub use ledger::{ExpenseLedger, GroupDimension, GroupKey};
pub use plan::BudgetPlanTable;
pub use reconciliation::{BudgetOverview, ReconciliationService, Variance};
pub use session::{SessionFile, SessionLoad, TripSession};
