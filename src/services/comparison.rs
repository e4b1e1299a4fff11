//! Cross-destination comparison
//!
//! Measures how two reference destinations differ per category and in
//! total. The percentage is taken relative to the second destination, so
//! swapping the inputs can change whether a pair counts as "about the
//! same" even though the absolute gap is unchanged.

use serde::Serialize;
use std::fmt;

use crate::models::{CanonicalCategory, Money, ReferenceDestination};

/// Differences below this percentage count as "about the same"
pub const DEFAULT_SAME_THRESHOLD_PERCENT: f64 = 5.0;

/// How the first value relates to the second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    Same,
    Higher,
    Lower,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Standing::Same => "about the same",
            Standing::Higher => "higher",
            Standing::Lower => "lower",
        };
        write!(f, "{}", s)
    }
}

/// What a difference row measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonSubject {
    Category(CanonicalCategory),
    Total,
}

impl fmt::Display for ComparisonSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonSubject::Category(c) => write!(f, "{}", c),
            ComparisonSubject::Total => write!(f, "Total"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostDifference {
    pub subject: ComparisonSubject,
    pub left: Money,
    pub right: Money,
    /// `|left - right| / right * 100`; `None` when `right` is zero and
    /// `left` is not
    pub percent_difference: Option<f64>,
    pub standing: Standing,
}

impl CostDifference {
    pub fn is_same(&self) -> bool {
        self.standing == Standing::Same
    }

    pub fn is_higher(&self) -> bool {
        self.standing == Standing::Higher
    }
}

/// Result of comparing two destinations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationComparison {
    pub left: String,
    pub right: String,
    pub categories: Vec<CostDifference>,
    pub total: CostDifference,
}

/// A category's share of a destination's average total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: CanonicalCategory,
    pub cost: Money,
    /// Percentage of `average_total_cost`, 0 when that total is zero
    pub share: f64,
}

/// Service for destination comparisons
#[derive(Debug, Clone, Copy)]
pub struct ComparisonService {
    same_threshold: f64,
}

impl Default for ComparisonService {
    fn default() -> Self {
        Self::new(DEFAULT_SAME_THRESHOLD_PERCENT)
    }
}

impl ComparisonService {
    pub fn new(same_threshold: f64) -> Self {
        Self { same_threshold }
    }

    /// Whether `value` can serve as a "same" threshold
    pub fn is_valid_threshold(value: f64) -> bool {
        value.is_finite() && value >= 0.0
    }

    pub fn same_threshold(&self) -> f64 {
        self.same_threshold
    }

    /// Compare every averaged category and the average total
    pub fn compare(
        &self,
        left: &ReferenceDestination,
        right: &ReferenceDestination,
    ) -> DestinationComparison {
        let categories = left
            .average_costs
            .iter()
            .filter_map(|(category, a)| {
                let b = right.average_for(category)?;
                Some(self.difference(ComparisonSubject::Category(category), a, b))
            })
            .collect();

        DestinationComparison {
            left: left.key.clone(),
            right: right.key.clone(),
            categories,
            total: self.difference(
                ComparisonSubject::Total,
                left.average_total_cost,
                right.average_total_cost,
            ),
        }
    }

    /// Compare two amounts relative to the second one
    pub fn difference(&self, subject: ComparisonSubject, left: Money, right: Money) -> CostDifference {
        let percent_difference = if right.is_zero() {
            left.is_zero().then_some(0.0)
        } else {
            Some((left - right).abs().percent_of(right))
        };

        let standing = match percent_difference {
            Some(pct) if pct < self.same_threshold => Standing::Same,
            _ if left > right => Standing::Higher,
            _ => Standing::Lower,
        };

        CostDifference {
            subject,
            left,
            right,
            percent_difference,
            standing,
        }
    }

    /// Each averaged category's share of the destination's average total
    pub fn breakdown(destination: &ReferenceDestination) -> Vec<CategoryShare> {
        destination
            .average_costs
            .iter()
            .map(|(category, cost)| CategoryShare {
                category,
                cost,
                share: cost.percent_of(destination.average_total_cost),
            })
            .collect()
    }
}
