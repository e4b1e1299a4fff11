//! Money type for representing trip amounts
//!
//! Amounts are whole currency units (no minor unit) stored as i64. Raw
//! user input is parsed leniently but must be a finite, non-negative
//! number; anything else is rejected.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest amount accepted from user input
pub const MAX_INPUT_AMOUNT: i64 = 1_000_000_000_000_000;

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use trip_budget::models::Money;
    /// let fare = Money::new(350_000);
    /// assert_eq!(fare.amount(), 350_000);
    /// ```
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn amount(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse a user-typed amount
    ///
    /// Accepts plain numbers ("350000", "12.5", "1e3") and comma grouping
    /// ("1,580,000"). Fractions are rounded to the nearest whole unit.
    /// Amounts above [`MAX_INPUT_AMOUNT`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
        let value: f64 = cleaned
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite(trimmed.to_string()));
        }
        if value < 0.0 {
            return Err(MoneyParseError::Negative(trimmed.to_string()));
        }
        if value > MAX_INPUT_AMOUNT as f64 {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        Ok(Self(value.round() as i64))
    }

    /// Express this amount as a percentage of `whole`
    ///
    /// Returns 0.0 when `whole` is zero so callers never see NaN or infinity.
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            0.0
        } else {
            self.0 as f64 / whole.0 as f64 * 100.0
        }
    }

    /// Divide into `parts` equal shares, rounded to the nearest unit
    pub fn split_evenly(&self, parts: u32) -> Option<Money> {
        if parts == 0 {
            return None;
        }
        Some(Self((self.0 as f64 / f64::from(parts)).round() as i64))
    }

    /// Format with digit grouping and a currency symbol
    pub fn format_with_symbol(&self, symbol: &str, suffix: bool) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = group_digits(self.0.unsigned_abs());
        if suffix {
            format!("{}{}{}", sign, digits, symbol)
        } else {
            format!("{}{}{}", sign, symbol, digits)
        }
    }
}

fn group_digits(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Accept a form amount written either as text or as a bare number
pub fn deserialize_raw_amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Text(s) => s,
        RawAmount::Int(i) => i.to_string(),
        RawAmount::Float(f) => f.to_string(),
    })
}

/// Round a percentage to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    // adding 0.0 turns -0.0 into 0.0
    (value * 10.0).round() / 10.0 + 0.0
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", group_digits(self.0.unsigned_abs()))
        } else {
            write!(f, "{}", group_digits(self.0.unsigned_abs()))
        }
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    NotFinite(String),
    Negative(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is required"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            MoneyParseError::NotFinite(s) => write!(f, "Amount must be finite: {}", s),
            MoneyParseError::Negative(s) => write!(f, "Amount cannot be negative: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_digits() {
        assert_eq!(Money::new(1_580_000).to_string(), "1,580,000");
        assert_eq!(Money::new(0).to_string(), "0");
        assert_eq!(Money::new(999).to_string(), "999");
        assert_eq!(Money::new(-250_000).to_string(), "-250,000");
    }

    #[test]
    fn test_format_with_symbol() {
        let m = Money::new(350_000);
        assert_eq!(m.format_with_symbol("₩", false), "₩350,000");
        assert_eq!(m.format_with_symbol("원", true), "350,000원");
        assert_eq!(Money::new(-1000).format_with_symbol("$", false), "-$1,000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(1500);

        assert_eq!((a + b).amount(), 2500);
        assert_eq!((a - b).amount(), -500);
        assert_eq!((-a).amount(), -1000);
    }

    #[test]
    fn test_parse_accepts_numbers() {
        assert_eq!(Money::parse("350000").unwrap().amount(), 350_000);
        assert_eq!(Money::parse(" 1,580,000 ").unwrap().amount(), 1_580_000);
        assert_eq!(Money::parse("12.6").unwrap().amount(), 13);
        assert_eq!(Money::parse("1e3").unwrap().amount(), 1000);
        assert_eq!(Money::parse("0").unwrap().amount(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("inf"),
            Err(MoneyParseError::NotFinite(_))
        ));
        assert!(matches!(
            Money::parse("NaN"),
            Err(MoneyParseError::NotFinite(_))
        ));
        assert!(matches!(
            Money::parse("-5"),
            Err(MoneyParseError::Negative(_))
        ));
    }

    #[test]
    fn test_parse_rejects_oversized_amounts() {
        assert_eq!(
            Money::parse("1,000,000,000,000,000").unwrap().amount(),
            MAX_INPUT_AMOUNT
        );
        assert!(matches!(
            Money::parse("5000000000000000000"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("1e300"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::new(i64::MAX - 1);
        assert_eq!((big + Money::new(10)).amount(), i64::MAX);
        assert_eq!((Money::new(i64::MIN) - Money::new(1)).amount(), i64::MIN);
        assert_eq!((-Money::new(i64::MIN)).amount(), i64::MAX);

        let total: Money = vec![big, big, big].into_iter().sum();
        assert_eq!(total.amount(), i64::MAX);
    }

    #[test]
    fn test_percent_of_guards_zero() {
        assert_eq!(Money::new(500).percent_of(Money::zero()), 0.0);
        assert_eq!(Money::new(500).percent_of(Money::new(1000)), 50.0);
    }

    #[test]
    fn test_split_evenly() {
        assert_eq!(Money::new(1_500_000).split_evenly(4), Some(Money::new(375_000)));
        assert_eq!(Money::new(1000).split_evenly(3), Some(Money::new(333)));
        assert_eq!(Money::new(1000).split_evenly(0), None);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(85.882), 85.9);
        assert_eq!(round_one_decimal(-28.57), -28.6);
        assert_eq!(round_one_decimal(0.0), 0.0);
        assert!(round_one_decimal(-0.01).is_sign_positive());
        assert_eq!(format!("{:.1}", round_one_decimal(-0.04)), "0.0");
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![Money::new(100), Money::new(200), Money::new(300)]
            .into_iter()
            .sum();
        assert_eq!(total.amount(), 600);
    }
}
