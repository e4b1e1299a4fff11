//! Reconciliation service
//!
//! Derives the budget view model from the current ledger, plan table,
//! trip context and (optionally) a reference destination. Nothing is
//! cached: every call recomputes from the snapshots it borrows, and the
//! inputs are never mutated.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::money::round_one_decimal;
use crate::models::{
    CanonicalCategory, ExpenseId, ExpenseRecord, Money, ReferenceDestination, TripContext,
};
use crate::services::ledger::ExpenseLedger;
use crate::services::plan::BudgetPlanTable;

/// Actual amount measured against the traveler's own plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanComparison {
    pub planned: Money,
    /// `amount - planned`
    pub difference: Money,
    pub is_over: bool,
}

/// Amount measured against the destination's peer average
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AverageComparison {
    pub average: Money,
    /// `amount - average`
    pub difference: Money,
    /// Difference as a percentage of the average, one decimal place.
    /// `None` when the average is zero.
    pub percentage: Option<f64>,
    pub is_higher: bool,
}

impl AverageComparison {
    pub fn new(amount: Money, average: Money) -> Self {
        let difference = amount - average;
        let percentage = if average.is_zero() {
            None
        } else {
            Some(round_one_decimal(difference.percent_of(average)))
        };
        Self {
            average,
            difference,
            percentage,
            is_higher: difference.is_positive(),
        }
    }
}

/// Baseline an expense was compared to
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Variance {
    Plan(PlanComparison),
    Average(AverageComparison),
}

impl Variance {
    /// Whether the expense exceeds its baseline
    pub fn exceeds(&self) -> bool {
        match self {
            Variance::Plan(p) => p.is_over,
            Variance::Average(a) => a.is_higher,
        }
    }

    pub fn difference(&self) -> Money {
        match self {
            Variance::Plan(p) => p.difference,
            Variance::Average(a) => a.difference,
        }
    }
}

/// One ledger row with its variance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseVariance {
    pub id: ExpenseId,
    pub index: usize,
    pub category: CanonicalCategory,
    pub amount: Money,
    pub description: String,
    pub date: NaiveDate,
    pub variance: Option<Variance>,
}

/// One plan row compared to the destination average
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanVariance {
    pub category: CanonicalCategory,
    pub planned: Money,
    /// Spent so far in this category
    pub spent: Money,
    pub average: Option<AverageComparison>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: CanonicalCategory,
    pub total: Money,
    pub count: usize,
    pub expense_ids: Vec<ExpenseId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTotal {
    pub date: NaiveDate,
    pub total: Money,
    pub count: usize,
    pub expense_ids: Vec<ExpenseId>,
}

/// Complete derived budget state for display collaborators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverview {
    pub destination: Option<String>,
    pub total_budget: Money,
    pub total_planned: Money,
    pub total_spent: Money,
    /// `total_budget - total_spent`, may be negative
    pub remaining_budget: Money,
    pub is_over_budget: bool,
    /// `total_budget - total_planned`, may be negative
    pub unplanned_budget: Money,
    /// Planned total as a percentage of the budget, 0 for a zero budget
    pub planned_percent: f64,
    /// Spent total as a percentage of the budget, 0 for a zero budget
    pub spent_percent: f64,
    pub average_daily_budget: Option<Money>,
    /// Remaining budget per travel day, only while money remains
    pub daily_allowance: Option<Money>,
    pub trip_dates: Vec<NaiveDate>,
    pub expenses: Vec<ExpenseVariance>,
    pub plan: Vec<PlanVariance>,
    pub by_category: Vec<CategoryTotal>,
    pub by_date: Vec<DateTotal>,
}

/// Service for budget reconciliation
pub struct ReconciliationService<'a> {
    ledger: &'a ExpenseLedger,
    plan: &'a BudgetPlanTable,
    destination: Option<&'a ReferenceDestination>,
    trip: &'a TripContext,
}

impl<'a> ReconciliationService<'a> {
    /// Create a new reconciliation service over the given snapshots
    pub fn new(
        ledger: &'a ExpenseLedger,
        plan: &'a BudgetPlanTable,
        destination: Option<&'a ReferenceDestination>,
        trip: &'a TripContext,
    ) -> Self {
        Self {
            ledger,
            plan,
            destination,
            trip,
        }
    }

    pub fn total_spent(&self) -> Money {
        self.ledger.total()
    }

    pub fn total_planned(&self) -> Money {
        self.plan.total()
    }

    pub fn remaining_budget(&self) -> Money {
        self.trip.total_budget - self.total_spent()
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget().is_negative()
    }

    /// Budget per travel day; `None` when the trip has no days
    pub fn average_daily_budget(&self) -> Option<Money> {
        self.trip.total_budget.split_evenly(self.trip.travel_days)
    }

    /// Remaining budget per travel day while the budget is not used up
    pub fn daily_allowance(&self) -> Option<Money> {
        let remaining = self.remaining_budget();
        if !remaining.is_positive() {
            return None;
        }
        remaining.split_evenly(self.trip.travel_days)
    }

    /// Compare an amount with the destination's average for its category
    pub fn compare_to_average(
        &self,
        category: CanonicalCategory,
        amount: Money,
    ) -> Option<AverageComparison> {
        let average = self.destination?.average_for(category)?;
        Some(AverageComparison::new(amount, average))
    }

    /// Variance of one expense
    ///
    /// A plan row for the category wins; otherwise the destination average
    /// is used; with neither there is no comparison.
    pub fn expense_variance(&self, record: &ExpenseRecord) -> Option<Variance> {
        if let Some(planned) = self.plan.planned_for(record.category) {
            let difference = record.amount - planned;
            return Some(Variance::Plan(PlanComparison {
                planned,
                difference,
                is_over: difference.is_positive(),
            }));
        }
        self.compare_to_average(record.category, record.amount)
            .map(Variance::Average)
    }

    pub fn expense_variances(&self) -> Vec<ExpenseVariance> {
        self.ledger
            .iter()
            .enumerate()
            .map(|(index, record)| ExpenseVariance {
                id: record.id,
                index,
                category: record.category,
                amount: record.amount,
                description: record.description.clone(),
                date: record.date,
                variance: self.expense_variance(record),
            })
            .collect()
    }

    pub fn plan_variances(&self) -> Vec<PlanVariance> {
        let by_category = self.ledger.group_by_category();
        self.plan
            .entries()
            .iter()
            .map(|entry| PlanVariance {
                category: entry.category,
                planned: entry.planned_amount,
                spent: by_category
                    .iter()
                    .find(|b| b.key == entry.category)
                    .map(|b| b.total)
                    .unwrap_or_default(),
                average: self.compare_to_average(entry.category, entry.planned_amount),
            })
            .collect()
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        self.ledger
            .group_by_category()
            .into_iter()
            .map(|bucket| CategoryTotal {
                category: bucket.key,
                total: bucket.total,
                count: bucket.count(),
                expense_ids: bucket.entries.iter().map(|e| e.record.id).collect(),
            })
            .collect()
    }

    pub fn date_totals(&self) -> Vec<DateTotal> {
        self.ledger
            .group_by_date()
            .into_iter()
            .map(|bucket| DateTotal {
                date: bucket.key,
                total: bucket.total,
                count: bucket.count(),
                expense_ids: bucket.entries.iter().map(|e| e.record.id).collect(),
            })
            .collect()
    }

    /// Build the full view model
    pub fn overview(&self) -> BudgetOverview {
        let total_budget = self.trip.total_budget;
        let total_planned = self.total_planned();
        let total_spent = self.total_spent();
        let remaining_budget = total_budget - total_spent;

        BudgetOverview {
            destination: self.destination.map(|d| d.key.clone()),
            total_budget,
            total_planned,
            total_spent,
            remaining_budget,
            is_over_budget: remaining_budget.is_negative(),
            unplanned_budget: total_budget - total_planned,
            planned_percent: total_planned.percent_of(total_budget),
            spent_percent: total_spent.percent_of(total_budget),
            average_daily_budget: self.average_daily_budget(),
            daily_allowance: self.daily_allowance(),
            trip_dates: self.trip.trip_dates(),
            expenses: self.expense_variances(),
            plan: self.plan_variances(),
            by_category: self.category_totals(),
            by_date: self.date_totals(),
        }
    }
}
