//! Planned budget per category

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CanonicalCategory;
use super::money::{deserialize_raw_amount, Money, MoneyParseError};

/// Amount the traveler intends to spend on one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPlanEntry {
    pub category: CanonicalCategory,
    pub planned_amount: Money,
}

impl BudgetPlanEntry {
    pub fn new(category: CanonicalCategory, planned_amount: Money) -> Self {
        Self {
            category,
            planned_amount,
        }
    }

    /// Build an entry from form input
    ///
    /// Zero is an acceptable plan; blank, negative or non-numeric amounts
    /// are not.
    pub fn parse(category: &str, amount: &str) -> Result<Self, PlanValidationError> {
        if category.trim().is_empty() {
            return Err(PlanValidationError::MissingCategory);
        }
        let planned_amount = Money::parse(amount).map_err(PlanValidationError::Amount)?;
        Ok(Self::new(
            CanonicalCategory::from_selection(category),
            planned_amount,
        ))
    }
}

/// Plan row as it appears in a session file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInput {
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_raw_amount")]
    pub amount: String,
}

impl PlanInput {
    pub fn new(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanValidationError {
    MissingCategory,
    Amount(MoneyParseError),
}

impl fmt::Display for PlanValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Category is required"),
            Self::Amount(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PlanValidationError {}
