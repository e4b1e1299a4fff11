//! Expense ledger
//!
//! Ordered collection of expense records. Records keep their insertion
//! order for display and are addressed by [`ExpenseId`]; positional
//! helpers exist for callers that only know a row number.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{CanonicalCategory, ExpenseId, ExpenseInput, ExpenseRecord, Money};

/// Dimension used to bucket expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupDimension {
    Category,
    Date,
}

/// Key of an expense bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Category(CanonicalCategory),
    Date(NaiveDate),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Category(c) => write!(f, "{}", c),
            GroupKey::Date(d) => write!(f, "{}", d),
        }
    }
}

/// A record inside a bucket, with its position in the ledger
#[derive(Debug, Clone, Copy)]
pub struct BucketEntry<'a> {
    pub index: usize,
    pub record: &'a ExpenseRecord,
}

/// Expenses sharing one key
#[derive(Debug, Clone)]
pub struct ExpenseBucket<'a, K> {
    pub key: K,
    pub entries: Vec<BucketEntry<'a>>,
    pub total: Money,
}

impl<K> ExpenseBucket<'_, K> {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Ordered expense records for one trip
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseLedger {
    records: Vec<ExpenseRecord>,

    /// Whether `edit` may move an expense to another day
    #[serde(default)]
    allow_date_edits: bool,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger whose edits may change a record's date
    pub fn with_date_edits(allow_date_edits: bool) -> Self {
        Self {
            records: Vec::new(),
            allow_date_edits,
        }
    }

    /// Append an expense
    ///
    /// Returns the new record's ID, or `None` when the input was rejected.
    /// A rejected input leaves the ledger untouched.
    pub fn add(&mut self, input: &ExpenseInput) -> Option<ExpenseId> {
        let (details, date) = input.validate().ok()?;
        let record = ExpenseRecord::new(details, date);
        let id = record.id;

        tracing::debug!(
            expense = %id,
            category = record.category.key(),
            amount = record.amount.amount(),
            %date,
            "expense added"
        );
        self.records.push(record);
        Some(id)
    }

    /// Replace the fields of an existing expense in place
    ///
    /// The date is preserved unless date edits are enabled and the input
    /// carries a date. Returns `false` (and changes nothing) for an unknown
    /// ID or invalid input.
    pub fn edit(&mut self, id: ExpenseId, input: &ExpenseInput) -> bool {
        match self.position(id) {
            Some(index) => self.edit_at(index, input),
            None => false,
        }
    }

    /// Positional variant of [`ExpenseLedger::edit`]
    pub fn edit_at(&mut self, index: usize, input: &ExpenseInput) -> bool {
        if index >= self.records.len() {
            return false;
        }
        let Ok(details) = input.validate_details() else {
            return false;
        };
        let new_date = if self.allow_date_edits {
            match input.parse_date() {
                Ok(date) => date,
                Err(_) => return false,
            }
        } else {
            None
        };

        let record = &mut self.records[index];
        record.apply(details);
        if let Some(date) = new_date {
            record.date = date;
        }
        tracing::debug!(expense = %record.id, "expense edited");
        true
    }

    /// Remove an expense by ID
    pub fn remove(&mut self, id: ExpenseId) -> Option<ExpenseRecord> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    /// Remove the expense at a position; later records shift down
    pub fn remove_at(&mut self, index: usize) -> Option<ExpenseRecord> {
        if index >= self.records.len() {
            return None;
        }
        let removed = self.records.remove(index);
        tracing::debug!(expense = %removed.id, "expense removed");
        Some(removed)
    }

    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Current position of an expense
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn allows_date_edits(&self) -> bool {
        self.allow_date_edits
    }

    /// Sum of every recorded amount
    pub fn total(&self) -> Money {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Bucket expenses along a dimension
    ///
    /// Date buckets are sorted ascending; category buckets keep the order
    /// in which each category first appears.
    pub fn group_by(&self, dimension: GroupDimension) -> Vec<ExpenseBucket<'_, GroupKey>> {
        match dimension {
            GroupDimension::Category => self.bucket(|r| GroupKey::Category(r.category), false),
            GroupDimension::Date => self.bucket(|r| GroupKey::Date(r.date), true),
        }
    }

    /// Buckets keyed by category, in first-seen order
    pub fn group_by_category(&self) -> Vec<ExpenseBucket<'_, CanonicalCategory>> {
        self.bucket(|r| r.category, false)
    }

    /// Buckets keyed by day, earliest first
    pub fn group_by_date(&self) -> Vec<ExpenseBucket<'_, NaiveDate>> {
        self.bucket(|r| r.date, true)
    }

    fn bucket<K, F>(&self, key_of: F, sorted: bool) -> Vec<ExpenseBucket<'_, K>>
    where
        K: Copy + Ord,
        F: Fn(&ExpenseRecord) -> K,
    {
        let mut buckets: Vec<ExpenseBucket<'_, K>> = Vec::new();

        for (index, record) in self.records.iter().enumerate() {
            let key = key_of(record);
            let entry = BucketEntry { index, record };
            match buckets.iter_mut().find(|b| b.key == key) {
                Some(bucket) => {
                    bucket.total += record.amount;
                    bucket.entries.push(entry);
                }
                None => buckets.push(ExpenseBucket {
                    key,
                    entries: vec![entry],
                    total: record.amount,
                }),
            }
        }

        if sorted {
            buckets.sort_by(|a, b| a.key.cmp(&b.key));
        }
        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: &str, date: &str) -> ExpenseInput {
        ExpenseInput::new(category, amount, "test expense", date)
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut ledger = ExpenseLedger::new();
        let a = ledger.add(&expense("food", "12000", "2024-06-02")).unwrap();
        let b = ledger.add(&expense("flight", "350000", "2024-06-01")).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.records()[0].id, a);
        assert_eq!(ledger.records()[1].id, b);
        assert_eq!(ledger.total(), Money::new(362_000));
    }

    #[test]
    fn test_invalid_add_is_a_no_op() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&expense("food", "12000", "2024-06-02"));

        assert!(ledger.add(&expense("food", "abc", "2024-06-02")).is_none());
        assert!(ledger.add(&expense("food", "0", "2024-06-02")).is_none());
        assert!(ledger.add(&expense("", "100", "2024-06-02")).is_none());
        assert!(ledger.add(&expense("food", "100", "")).is_none());
        assert!(ledger
            .add(&ExpenseInput::new("food", "100", " ", "2024-06-02"))
            .is_none());

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), Money::new(12_000));
    }

    #[test]
    fn test_total_matches_successful_adds() {
        let inputs = [
            ("food", "1000"),
            ("food", "-5"),
            ("transport", "2500"),
            ("shopping", "NaN"),
            ("other", "1,500"),
        ];
        let mut ledger = ExpenseLedger::new();
        let mut expected = Money::zero();
        for (category, amount) in inputs {
            let input = expense(category, amount, "2024-06-01");
            if ledger.add(&input).is_some() {
                expected += Money::parse(amount).unwrap();
            }
        }
        assert_eq!(ledger.total(), expected);
        assert_eq!(expected, Money::new(5_000));
    }

    #[test]
    fn test_oversized_amounts_are_rejected() {
        let mut ledger = ExpenseLedger::new();
        assert!(ledger
            .add(&expense("food", "5000000000000000000", "2024-06-01"))
            .is_none());
        assert!(ledger
            .add(&expense("food", "5000000000000000000", "2024-06-01"))
            .is_none());
        assert!(ledger.is_empty());

        for _ in 0..3 {
            ledger
                .add(&expense("food", "1,000,000,000,000,000", "2024-06-01"))
                .unwrap();
        }
        assert_eq!(ledger.total(), Money::new(3_000_000_000_000_000));
    }

    #[test]
    fn test_add_then_remove_restores_total() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&expense("food", "12000", "2024-06-02"));
        let before = ledger.total();

        let id = ledger.add(&expense("shopping", "80000", "2024-06-03")).unwrap();
        assert_eq!(ledger.total(), before + Money::new(80_000));

        let removed = ledger.remove(id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(ledger.total(), before);
    }

    #[test]
    fn test_remove_by_id_survives_shifts() {
        let mut ledger = ExpenseLedger::new();
        let a = ledger.add(&expense("food", "1", "2024-06-01")).unwrap();
        let b = ledger.add(&expense("food", "2", "2024-06-01")).unwrap();
        let c = ledger.add(&expense("food", "3", "2024-06-01")).unwrap();

        ledger.remove(a);
        assert_eq!(ledger.position(c), Some(1));

        let removed = ledger.remove(c).unwrap();
        assert_eq!(removed.amount, Money::new(3));
        assert_eq!(ledger.records()[0].id, b);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut ledger = ExpenseLedger::new();
        assert!(ledger.remove_at(0).is_none());
        assert!(ledger.remove(ExpenseId::new()).is_none());
    }

    #[test]
    fn test_edit_preserves_date_by_default() {
        let mut ledger = ExpenseLedger::new();
        let id = ledger.add(&expense("food", "12000", "2024-06-02")).unwrap();

        assert!(ledger.edit(id, &ExpenseInput::new("food", "15000", "sushi", "2024-06-05")));
        let record = ledger.get(id).unwrap();
        assert_eq!(record.amount, Money::new(15_000));
        assert_eq!(record.description, "sushi");
        assert_eq!(record.date, day("2024-06-02"));
    }

    #[test]
    fn test_edit_moves_date_when_allowed() {
        let mut ledger = ExpenseLedger::with_date_edits(true);
        let id = ledger.add(&expense("food", "12000", "2024-06-02")).unwrap();

        assert!(ledger.edit(id, &ExpenseInput::new("food", "12000", "ramen", "2024-06-05")));
        assert_eq!(ledger.get(id).unwrap().date, day("2024-06-05"));

        // A blank date keeps the current one
        assert!(ledger.edit(id, &ExpenseInput::new("food", "9000", "ramen", "")));
        assert_eq!(ledger.get(id).unwrap().date, day("2024-06-05"));

        // A malformed date rejects the whole edit
        assert!(!ledger.edit(id, &ExpenseInput::new("food", "1", "ramen", "june")));
        assert_eq!(ledger.get(id).unwrap().amount, Money::new(9_000));
    }

    #[test]
    fn test_invalid_edit_is_a_no_op() {
        let mut ledger = ExpenseLedger::new();
        let id = ledger.add(&expense("food", "12000", "2024-06-02")).unwrap();
        let snapshot = ledger.get(id).unwrap().clone();

        assert!(!ledger.edit(id, &ExpenseInput::new("food", "", "ramen", "")));
        assert!(!ledger.edit_at(5, &ExpenseInput::new("food", "1", "ramen", "")));
        assert!(!ledger.edit(ExpenseId::new(), &ExpenseInput::new("food", "1", "x", "")));
        assert_eq!(ledger.get(id).unwrap(), &snapshot);
    }

    #[test]
    fn test_group_by_date_sorts_ascending() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&expense("food", "100", "2024-06-03"));
        ledger.add(&expense("food", "200", "2024-06-01"));
        ledger.add(&expense("transport", "300", "2024-06-03"));

        let buckets = ledger.group_by_date();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].key, day("2024-06-01"));
        assert_eq!(buckets[0].total, Money::new(200));
        assert_eq!(buckets[1].key, day("2024-06-03"));
        assert_eq!(buckets[1].total, Money::new(400));
        let indices: Vec<usize> = buckets[1].entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_group_by_category_first_seen_order() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&expense("shopping", "100", "2024-06-01"));
        ledger.add(&expense("flight", "200", "2024-06-01"));
        ledger.add(&expense("shopping", "50", "2024-06-02"));

        let buckets = ledger.group_by_category();
        let keys: Vec<CanonicalCategory> = buckets.iter().map(|b| b.key).collect();
        assert_eq!(
            keys,
            vec![CanonicalCategory::Shopping, CanonicalCategory::Flight]
        );
        assert_eq!(buckets[0].total, Money::new(150));
        assert_eq!(buckets[0].count(), 2);

        let bucket_sum: Money = buckets.iter().map(|b| b.total).sum();
        assert_eq!(bucket_sum, ledger.total());
    }

    #[test]
    fn test_group_by_dimension() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&expense("food", "100", "2024-06-02"));
        ledger.add(&expense("food", "100", "2024-06-01"));

        let by_category = ledger.group_by(GroupDimension::Category);
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].key, GroupKey::Category(CanonicalCategory::Food));

        let by_date = ledger.group_by(GroupDimension::Date);
        assert_eq!(by_date[0].key, GroupKey::Date(day("2024-06-01")));
    }
}
