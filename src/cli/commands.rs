//! Non-interactive subcommands
//!
//! Each command runs one operation against the store and exits. Commands that
//! change the ledger save before returning.

use std::io::Write;

use clap::Subcommand;

use crate::display::{format_category_list, format_expense_list, format_total};
use crate::error::ExpenseResult;
use crate::models::{Expense, Money};
use crate::reports::SpendingReport;
use crate::services::{self, ExpenseService};
use crate::storage::ExpenseStore;

use super::prompt::{parse_amount, parse_category, parse_date, parse_year, parse_year_month};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Expense date (YYYY-MM-DD)
        date: String,
        /// Amount (e.g. "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label
        category: String,
    },

    /// Remove an expense by its position in `list`
    #[command(alias = "rm")]
    Remove {
        /// 1-based position
        position: usize,
    },

    /// List expenses, optionally filtered
    #[command(alias = "filter")]
    List {
        /// Only this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Only this month (YYYY-MM)
        #[arg(short, long, conflicts_with = "year")]
        month: Option<String>,
        /// Only this year (YYYY)
        #[arg(short, long)]
        year: Option<String>,
    },

    /// List distinct categories
    Categories,

    /// Show the sum of all expenses
    Total,

    /// Show spending per category
    Summary,
}

/// Handle an expense subcommand
pub fn handle_expense_command<W: Write>(
    store: &mut ExpenseStore,
    cmd: ExpenseCommands,
    out: &mut W,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            date,
            amount,
            category,
        } => {
            let date = parse_date(&date).into_result("date")?;
            let amount = parse_amount(&amount).into_result("amount")?;
            let category = parse_category(&category).into_result("category")?;

            let mut service = ExpenseService::new(store);
            writeln!(out, "Added: {}", service.add(date, amount, category))?;
            service.save()?;
        }

        ExpenseCommands::Remove { position } => {
            let mut service = ExpenseService::new(store);
            let removed = service.remove_at(position)?;
            service.save()?;
            writeln!(out, "Removed: {}", removed)?;
        }

        ExpenseCommands::List {
            category,
            month,
            year,
        } => {
            let filtered = category.is_some() || month.is_some() || year.is_some();
            let mut selected: Vec<&Expense> = store.expenses().iter().collect();

            if let Some(category) = category {
                let category = parse_category(&category).into_result("category")?;
                selected = services::filter_by_category(selected, &category);
            }
            if let Some(month) = month {
                let month = parse_year_month(&month).into_result("month")?;
                selected = services::filter_by_month(selected, &month);
            }
            if let Some(year) = year {
                let year = parse_year(&year).into_result("year")?;
                selected = services::filter_by_year(selected, &year);
            }

            write!(out, "{}", format_expense_list(selected.iter().copied()))?;
            if filtered {
                let total: Money = selected.iter().map(|e| e.amount).sum();
                write!(out, "{}", format_total("Total", total))?;
            }
        }

        ExpenseCommands::Categories => {
            let categories = services::list_categories(store.expenses());
            write!(out, "{}", format_category_list(&categories))?;
        }

        ExpenseCommands::Total => {
            let total = services::total(store.expenses());
            write!(out, "{}", format_total("Total Expenses", total))?;
        }

        ExpenseCommands::Summary => {
            let report = SpendingReport::generate(store.expenses());
            write!(out, "{}", report.format_terminal())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded_store(temp_dir: &TempDir) -> ExpenseStore {
        let mut store = ExpenseStore::empty(temp_dir.path().join("expenses.json"));
        store.push(Expense::new("2024-01-05", Money::from_cents(1250), "Food"));
        store.push(Expense::new("2024-02-10", Money::from_cents(3000), "Food"));
        store.push(Expense::new("2024-02-20", Money::from_cents(500), "Transport"));
        store
    }

    fn run(store: &mut ExpenseStore, cmd: ExpenseCommands) -> ExpenseResult<String> {
        let mut out = Vec::new();
        handle_expense_command(store, cmd, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_add_validates_and_saves() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::empty(temp_dir.path().join("expenses.json"));

        let err = run(
            &mut store,
            ExpenseCommands::Add {
                date: "2024/01/05".into(),
                amount: "1".into(),
                category: "Food".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());

        run(
            &mut store,
            ExpenseCommands::Add {
                date: "2024-01-05".into(),
                amount: "-2.50".into(),
                category: "Refund".into(),
            },
        )
        .unwrap();

        let reloaded = ExpenseStore::open(store.path());
        assert_eq!(reloaded.expenses()[0].amount, Money::from_cents(-250));
    }

    #[test]
    fn test_remove_out_of_range_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = seeded_store(&temp_dir);

        let err = run(&mut store, ExpenseCommands::Remove { position: 4 }).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_list_combined_filters() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = seeded_store(&temp_dir);

        let output = run(
            &mut store,
            ExpenseCommands::List {
                category: Some("food".into()),
                month: Some("2024-02".into()),
                year: None,
            },
        )
        .unwrap();

        assert!(output.contains("2024-02-10"));
        assert!(!output.contains("2024-01-05"));
        assert!(!output.contains("2024-02-20"));
        assert!(output.contains("Total: $30.00"));
    }

    #[test]
    fn test_list_unfiltered_has_no_total_line() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = seeded_store(&temp_dir);

        let output = run(
            &mut store,
            ExpenseCommands::List {
                category: None,
                month: None,
                year: None,
            },
        )
        .unwrap();

        assert_eq!(output.lines().count(), 5);
        assert!(!output.contains("Total"));
    }

    #[test]
    fn test_total_categories_summary() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = seeded_store(&temp_dir);

        assert_eq!(
            run(&mut store, ExpenseCommands::Total).unwrap(),
            "Total Expenses: $47.50\n"
        );
        assert_eq!(
            run(&mut store, ExpenseCommands::Categories).unwrap(),
            "Categories:\n  - food\n  - transport\n"
        );
        let summary = run(&mut store, ExpenseCommands::Summary).unwrap();
        assert!(summary.contains("$42.50"));
    }
}
