//! Expense records and raw expense input
//!
//! Input arrives as user-typed strings. [`ExpenseInput::validate`] turns it
//! into typed fields or reports why it was rejected; the ledger treats any
//! rejection as a no-op.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CanonicalCategory;
use super::ids::ExpenseId;
use super::money::{deserialize_raw_amount, Money, MoneyParseError};

/// ISO calendar-day format used for expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Durable identifier assigned when the record is created
    pub id: ExpenseId,

    pub category: CanonicalCategory,

    /// Amount spent, always positive
    pub amount: Money,

    pub description: String,

    /// Day the expense happened
    pub date: NaiveDate,
}

impl ExpenseRecord {
    /// Create a record from already-validated details
    pub fn new(details: ExpenseDetails, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            category: details.category,
            amount: details.amount,
            description: details.description,
            date,
        }
    }

    /// Replace everything but the identity and date
    pub fn apply(&mut self, details: ExpenseDetails) {
        self.category = details.category;
        self.amount = details.amount;
        self.description = details.description;
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.category, self.amount, self.description
        )
    }
}

/// The validated, date-independent part of an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDetails {
    pub category: CanonicalCategory,
    pub amount: Money,
    pub description: String,
}

/// Raw form input for adding or editing an expense
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseInput {
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_raw_amount")]
    pub amount: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}

impl ExpenseInput {
    pub fn new(
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// Validate every field including the date
    pub fn validate(&self) -> Result<(ExpenseDetails, NaiveDate), ExpenseValidationError> {
        let details = self.validate_details()?;
        let date = self
            .parse_date()?
            .ok_or(ExpenseValidationError::MissingDate)?;
        Ok((details, date))
    }

    /// Validate category, amount and description
    ///
    /// An unrecognized category is not an error; it resolves to `other`.
    pub fn validate_details(&self) -> Result<ExpenseDetails, ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }

        let amount = Money::parse(&self.amount).map_err(ExpenseValidationError::Amount)?;
        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ExpenseValidationError::MissingDescription);
        }

        Ok(ExpenseDetails {
            category: CanonicalCategory::from_selection(&self.category),
            amount,
            description: description.to_string(),
        })
    }

    /// Parse the date field; blank yields `None`
    pub fn parse_date(&self) -> Result<Option<NaiveDate>, ExpenseValidationError> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Some)
            .map_err(|_| ExpenseValidationError::InvalidDate(raw.to_string()))
    }
}

/// Reasons an expense input is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingCategory,
    Amount(MoneyParseError),
    NonPositiveAmount,
    MissingDescription,
    MissingDate,
    InvalidDate(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Category is required"),
            Self::Amount(e) => write!(f, "{}", e),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::MissingDescription => write!(f, "Description is required"),
            Self::MissingDate => write!(f, "Date is required"),
            Self::InvalidDate(s) => write!(f, "Invalid date (expected YYYY-MM-DD): {}", s),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
