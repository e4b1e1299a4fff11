//! Budget plan table
//!
//! Planned amounts per category. `upsert` is the only way to add a row,
//! which keeps the table at one row per category.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetPlanEntry, CanonicalCategory, Money};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetPlanTable {
    entries: Vec<BudgetPlanEntry>,
}

impl BudgetPlanTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the planned amount for a category
    ///
    /// Overwrites an existing row in place, otherwise appends one.
    pub fn upsert(&mut self, category: CanonicalCategory, amount: Money) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.planned_amount = amount,
            None => self.entries.push(BudgetPlanEntry::new(category, amount)),
        }
        tracing::debug!(
            category = category.key(),
            amount = amount.amount(),
            "plan updated"
        );
    }

    /// Upsert from form input; returns `false` when the input is rejected
    pub fn upsert_input(&mut self, category: &str, amount: &str) -> bool {
        match BudgetPlanEntry::parse(category, amount) {
            Ok(entry) => {
                self.upsert(entry.category, entry.planned_amount);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove the row for a category
    pub fn remove(&mut self, category: CanonicalCategory) -> Option<BudgetPlanEntry> {
        let index = self.entries.iter().position(|e| e.category == category)?;
        self.remove_at(index)
    }

    /// Remove the row at a position
    pub fn remove_at(&mut self, index: usize) -> Option<BudgetPlanEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        tracing::debug!(category = removed.category.key(), "plan row removed");
        Some(removed)
    }

    /// Planned amount for a category
    pub fn planned_for(&self, category: CanonicalCategory) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.planned_amount)
    }

    pub fn entries(&self) -> &[BudgetPlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all planned amounts
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.planned_amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_overwrites() {
        let mut plan = BudgetPlanTable::new();
        plan.upsert(CanonicalCategory::Food, Money::new(300_000));
        plan.upsert(CanonicalCategory::Food, Money::new(250_000));

        assert_eq!(plan.len(), 1);
        assert_eq!(
            plan.planned_for(CanonicalCategory::Food),
            Some(Money::new(250_000))
        );
    }

    #[test]
    fn test_upsert_keeps_row_order() {
        let mut plan = BudgetPlanTable::new();
        plan.upsert(CanonicalCategory::Flight, Money::new(350_000));
        plan.upsert(CanonicalCategory::Food, Money::new(300_000));
        plan.upsert(CanonicalCategory::Flight, Money::new(400_000));

        let categories: Vec<_> = plan.entries().iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![CanonicalCategory::Flight, CanonicalCategory::Food]
        );
        assert_eq!(plan.total(), Money::new(700_000));
    }

    #[test]
    fn test_upsert_input() {
        let mut plan = BudgetPlanTable::new();
        assert!(plan.upsert_input("food", "300000"));
        assert!(plan.upsert_input("Food", "320000"));
        assert!(!plan.upsert_input("food", "lots"));
        assert!(!plan.upsert_input("", "100"));

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.total(), Money::new(320_000));
    }

    #[test]
    fn test_remove_then_upsert_does_not_duplicate() {
        let mut plan = BudgetPlanTable::new();
        plan.upsert(CanonicalCategory::Transport, Money::new(50_000));
        plan.upsert(CanonicalCategory::Shopping, Money::new(80_000));

        let removed = plan.remove_at(0).unwrap();
        assert_eq!(removed.category, CanonicalCategory::Transport);
        assert!(plan.remove_at(3).is_none());

        plan.upsert(CanonicalCategory::Shopping, Money::new(90_000));
        assert_eq!(plan.len(), 1);
        assert!(plan.remove(CanonicalCategory::Shopping).is_some());
        assert!(plan.is_empty());
        assert_eq!(plan.total(), Money::zero());
    }
}
