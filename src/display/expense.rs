//! Expense display formatting
//!
//! Formats expenses, categories and totals for terminal output.

use crate::models::{Expense, Money};

/// Format expenses as a numbered register
///
/// Rows are numbered from 1 in the order given. When showing the full ledger
/// these numbers are the positions accepted by remove.
pub fn format_expense_list<'a, I>(expenses: I) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let expenses: Vec<&Expense> = expenses.into_iter().collect();
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let category_width = expenses
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);
    let index_width = expenses.len().to_string().len().max(1);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>iw$}  {:<10}  {:>12}  {}\n",
        "#",
        "Date",
        "Amount",
        "Category",
        iw = index_width
    ));
    output.push_str(&"-".repeat(index_width + 28 + category_width));
    output.push('\n');

    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format!(
            "{:>iw$}  {:<10}  {:>12}  {}\n",
            i + 1,
            expense.date,
            expense.amount,
            expense.category,
            iw = index_width
        ));
    }

    output
}

/// Format the distinct category list
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::from("Categories:\n");
    for category in categories {
        output.push_str(&format!("  - {}\n", category));
    }
    output
}

/// Format a total line
pub fn format_total(label: &str, total: Money) -> String {
    format!("{}: {}\n", label, total)
}
