//! Expense model
//!
//! A single ledger entry: the date it happened, what it cost, and a free-text
//! category. Expenses have no identity beyond their position in the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A recorded expense
///
/// `date` is kept as the ISO `YYYY-MM-DD` string it was entered as. Month and
/// year filters are lexical prefix matches on this string, so a record loaded
/// from a hand-edited file with an odd date still round-trips untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense date (`YYYY-MM-DD`)
    pub date: String,

    /// Amount spent (signed)
    pub amount: Money,

    /// Free-text category label
    pub category: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(date: impl Into<String>, amount: Money, category: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
        }
    }

    /// Case-insensitive category comparison
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Check whether the date string starts with the given prefix
    pub fn date_has_prefix(&self, prefix: &str) -> bool {
        self.date.starts_with(prefix)
    }

    /// The category normalized for grouping
    pub fn category_key(&self) -> String {
        self.category.to_lowercase()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}, Amount: {}, Category: {}",
            self.date, self.amount, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_category_ignores_case() {
        let expense = Expense::new("2024-01-05", Money::from_cents(1250), "Food");
        assert!(expense.in_category("food"));
        assert!(expense.in_category("FOOD"));
        assert!(!expense.in_category("foo"));
    }

    #[test]
    fn test_date_prefix() {
        let expense = Expense::new("2024-02-10", Money::from_cents(3000), "Food");
        assert!(expense.date_has_prefix("2024"));
        assert!(expense.date_has_prefix("2024-02"));
        assert!(!expense.date_has_prefix("2024-2"));
        assert!(!expense.date_has_prefix("2023"));
    }

    #[test]
    fn test_serialized_shape() {
        let expense = Expense::new("2024-01-05", Money::from_cents(1250), "Food");
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"date": "2024-01-05", "amount": 12.5, "category": "Food"})
        );
    }

    #[test]
    fn test_display() {
        let expense = Expense::new("2024-01-05", Money::from_cents(1250), "Food");
        assert_eq!(
            expense.to_string(),
            "Date: 2024-01-05, Amount: $12.50, Category: Food"
        );
    }
}
