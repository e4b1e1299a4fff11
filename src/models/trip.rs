//! Trip context and trip history records

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TripId;
use super::money::Money;

/// Session-wide trip parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripContext {
    #[serde(default)]
    pub total_budget: Money,

    #[serde(default)]
    pub travel_days: u32,

    #[serde(default)]
    pub travel_nights: u32,

    /// Key into the reference data store
    #[serde(default)]
    pub destination: Option<String>,

    /// First day of the trip, if known
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl TripContext {
    pub fn new(total_budget: Money, travel_days: u32, travel_nights: u32) -> Self {
        Self {
            total_budget,
            travel_days,
            travel_nights,
            destination: None,
            start_date: None,
        }
    }

    pub fn with_destination(mut self, key: impl Into<String>) -> Self {
        self.destination = Some(key.into());
        self
    }

    pub fn with_start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Check the trip parameters
    pub fn validate(&self) -> Result<(), TripValidationError> {
        if self.total_budget.is_negative() {
            return Err(TripValidationError::NegativeBudget(self.total_budget));
        }
        Ok(())
    }

    /// Every calendar day of the trip, starting at `start_date`
    ///
    /// Empty when there is no start date or no travel days.
    pub fn trip_dates(&self) -> Vec<NaiveDate> {
        let Some(start) = self.start_date else {
            return Vec::new();
        };
        (0..self.travel_days)
            .map_while(|offset| start.checked_add_days(Days::new(u64::from(offset))))
            .collect()
    }

    /// Last day of the trip
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.trip_dates().last().copied()
    }

    /// Duration label such as "4N5D"
    pub fn duration_label(&self) -> Option<String> {
        if self.travel_days == 0 {
            return None;
        }
        Some(format!("{}N{}D", self.travel_nights, self.travel_days))
    }
}

/// Reasons trip parameters are refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripValidationError {
    NegativeBudget(Money),
}

impl fmt::Display for TripValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget(amount) => {
                write!(f, "Total budget cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for TripValidationError {}

/// A completed trip kept for history views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    #[serde(default)]
    pub id: TripId,
    pub destination: String,
    pub flag: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_budget: Money,
    pub total_expense: Money,
}

impl TripRecord {
    pub fn new(
        destination: impl Into<String>,
        flag: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_budget: Money,
        total_expense: Money,
    ) -> Self {
        Self {
            id: TripId::new(),
            destination: destination.into(),
            flag: flag.into(),
            start_date,
            end_date,
            total_budget,
            total_expense,
        }
    }

    /// Share of the budget left unspent, as a percentage
    ///
    /// Negative when the trip went over budget. `None` for a zero budget.
    pub fn savings_rate(&self) -> Option<f64> {
        if self.total_budget.is_zero() {
            return None;
        }
        Some((self.total_budget - self.total_expense).percent_of(self.total_budget))
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_expense > self.total_budget
    }

    /// Nights and days between start and end, inclusive of both ends
    pub fn nights_and_days(&self) -> (i64, i64) {
        let nights = (self.end_date - self.start_date).num_days().max(0);
        (nights, nights + 1)
    }
}
