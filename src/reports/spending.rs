//! Spending Report
//!
//! Groups expenses by category (case-insensitively) and totals each group.

use std::collections::BTreeMap;

use crate::models::{Expense, Money};

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    /// Category label, lower-cased
    pub category: String,
    /// Sum of the category's amounts
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of overall spending (by absolute value)
    pub percentage: f64,
}

/// Totals per category, sorted by category name
pub fn totals_by_category(expenses: &[Expense]) -> Vec<CategorySpending> {
    let mut grouped: BTreeMap<String, (Money, usize)> = BTreeMap::new();
    for expense in expenses {
        let entry = grouped
            .entry(expense.category_key())
            .or_insert((Money::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let abs_total: i64 = grouped.values().map(|(m, _)| m.cents().abs()).sum();

    grouped
        .into_iter()
        .map(|(category, (total, count))| {
            let percentage = if abs_total == 0 {
                0.0
            } else {
                (total.cents().abs() as f64 / abs_total as f64) * 100.0
            };
            CategorySpending {
                category,
                total,
                count,
                percentage,
            }
        })
        .collect()
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Spending by category
    pub categories: Vec<CategorySpending>,
    /// Sum across every expense
    pub total: Money,
    /// Number of expenses covered
    pub expense_count: usize,
}

impl SpendingReport {
    /// Generate a spending report over the given expenses
    pub fn generate(expenses: &[Expense]) -> Self {
        Self {
            categories: totals_by_category(expenses),
            total: crate::services::total(expenses),
            expense_count: expenses.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.categories.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let width = self
            .categories
            .iter()
            .map(|c| c.category.len())
            .max()
            .unwrap_or(8)
            .max(8);

        let mut output = String::new();
        output.push_str(&format!(
            "{:<width$} {:>12} {:>6} {:>7}\n",
            "Category",
            "Amount",
            "Count",
            "%",
            width = width
        ));
        output.push_str(&"-".repeat(width + 28));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<width$} {:>12} {:>6} {:>6.1}%\n",
                category.category,
                category.total,
                category.count,
                category.percentage,
                width = width
            ));
        }

        output.push_str(&"-".repeat(width + 28));
        output.push('\n');
        output.push_str(&format!(
            "{:<width$} {:>12} {:>6}\n",
            "TOTAL",
            self.total,
            self.expense_count,
            width = width
        ));

        output
    }
}
