//! Interactive numbered menu
//!
//! Loads nothing and saves only on exit; the caller hands in an opened store.

use std::fmt;
use std::io::{BufRead, Write};

use crate::display::{format_category_list, format_expense_list, format_total};
use crate::error::ExpenseResult;
use crate::services::{self, ExpenseService};
use crate::storage::ExpenseStore;

use super::prompt::{
    parse_amount, parse_category, parse_date, parse_position, parse_year, parse_year_month,
    Entry, Prompter, CANCEL,
};

/// Menu actions, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    List,
    Categories,
    Total,
    FilterCategory,
    FilterMonth,
    FilterYear,
    SaveAndExit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::List,
        MenuChoice::Categories,
        MenuChoice::Total,
        MenuChoice::FilterCategory,
        MenuChoice::FilterMonth,
        MenuChoice::FilterYear,
        MenuChoice::SaveAndExit,
    ];

    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    /// 1-based menu number
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Add => "Add an expense",
            MenuChoice::Remove => "Remove an expense",
            MenuChoice::List => "List all expenses",
            MenuChoice::Categories => "List categories",
            MenuChoice::Total => "Show total expenses",
            MenuChoice::FilterCategory => "Filter expenses by category",
            MenuChoice::FilterMonth => "Filter expenses by month",
            MenuChoice::FilterYear => "Filter expenses by year",
            MenuChoice::SaveAndExit => "Save and exit",
        };
        write!(f, "{}", label)
    }
}

fn print_menu<W: Write>(out: &mut W) -> ExpenseResult<()> {
    writeln!(out)?;
    writeln!(out, "Expense Tracker")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice)?;
    }
    Ok(())
}

/// Run the menu loop until the user saves and exits
///
/// End of input at the menu prompt is treated as save-and-exit.
pub fn run_menu<R: BufRead, W: Write>(
    store: &mut ExpenseStore,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<()> {
    loop {
        print_menu(prompter.output())?;

        let Some(line) = prompter.line("Enter your choice: ")? else {
            writeln!(prompter.output())?;
            save_and_exit(store, prompter)?;
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(
                prompter.output(),
                "Invalid choice. Please enter a number 1-{}.",
                MenuChoice::ALL.len()
            )?;
            continue;
        };

        match choice {
            MenuChoice::Add => add(store, prompter)?,
            MenuChoice::Remove => remove(store, prompter)?,
            MenuChoice::List => {
                writeln!(prompter.output(), "\nAll Expenses:")?;
                write!(prompter.output(), "{}", format_expense_list(store.expenses()))?;
            }
            MenuChoice::Categories => {
                let categories = services::list_categories(store.expenses());
                write!(prompter.output(), "\n{}", format_category_list(&categories))?;
            }
            MenuChoice::Total => {
                let total = services::total(store.expenses());
                write!(prompter.output(), "\n{}", format_total("Total Expenses", total))?;
            }
            MenuChoice::FilterCategory => {
                let Entry::Value(category) =
                    prompter.ask("Enter category to filter: ", parse_category)?
                else {
                    cancelled(prompter)?;
                    continue;
                };
                let matches = services::filter_by_category(store.expenses(), &category);
                writeln!(prompter.output(), "\nExpenses for {}:", category)?;
                write!(prompter.output(), "{}", format_expense_list(matches))?;
            }
            MenuChoice::FilterMonth => {
                let Entry::Value(year_month) =
                    prompter.ask("Enter year and month (YYYY-MM): ", parse_year_month)?
                else {
                    cancelled(prompter)?;
                    continue;
                };
                let matches = services::filter_by_month(store.expenses(), &year_month);
                writeln!(prompter.output(), "\nExpenses for {}:", year_month)?;
                write!(prompter.output(), "{}", format_expense_list(matches.iter().copied()))?;
                write!(
                    prompter.output(),
                    "{}",
                    format_total("Month total", matches.into_iter().map(|e| e.amount).sum())
                )?;
            }
            MenuChoice::FilterYear => {
                let Entry::Value(year) = prompter.ask("Enter year (YYYY): ", parse_year)? else {
                    cancelled(prompter)?;
                    continue;
                };
                let matches = services::filter_by_year(store.expenses(), &year);
                writeln!(prompter.output(), "\nExpenses for {}:", year)?;
                write!(prompter.output(), "{}", format_expense_list(matches.iter().copied()))?;
                write!(
                    prompter.output(),
                    "{}",
                    format_total("Year total", matches.into_iter().map(|e| e.amount).sum())
                )?;
            }
            MenuChoice::SaveAndExit => {
                save_and_exit(store, prompter)?;
                return Ok(());
            }
        }
    }
}

fn cancelled<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> ExpenseResult<()> {
    writeln!(prompter.output(), "Operation cancelled.")?;
    Ok(())
}

fn add<R: BufRead, W: Write>(
    store: &mut ExpenseStore,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<()> {
    writeln!(
        prompter.output(),
        "Type '{}' at any prompt to abort.",
        CANCEL
    )?;

    let Entry::Value(date) = prompter.ask("Enter the date (YYYY-MM-DD): ", parse_date)? else {
        return cancelled(prompter);
    };
    let Entry::Value(amount) = prompter.ask("Enter amount: ", parse_amount)? else {
        return cancelled(prompter);
    };
    let Entry::Value(category) = prompter.ask("Enter category: ", parse_category)? else {
        return cancelled(prompter);
    };

    let mut service = ExpenseService::new(store);
    let expense = service.add(date, amount, category);
    writeln!(prompter.output(), "Added: {}", expense)?;
    Ok(())
}

fn remove<R: BufRead, W: Write>(
    store: &mut ExpenseStore,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<()> {
    if store.is_empty() {
        writeln!(prompter.output(), "No expenses to remove.")?;
        return Ok(());
    }

    write!(prompter.output(), "{}", format_expense_list(store.expenses()))?;

    let Entry::Value(position) = prompter.ask(
        "Enter the number of the expense to remove: ",
        parse_position,
    )?
    else {
        return cancelled(prompter);
    };

    let mut service = ExpenseService::new(store);
    match service.remove_at(position) {
        Ok(removed) => writeln!(prompter.output(), "Removed: {}", removed)?,
        Err(e) if e.is_out_of_range() => writeln!(prompter.output(), "{}", e)?,
        Err(e) => return Err(e),
    }
    Ok(())
}

fn save_and_exit<R: BufRead, W: Write>(
    store: &ExpenseStore,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<()> {
    store.save()?;
    writeln!(
        prompter.output(),
        "Saved {} expenses to {}. Goodbye!",
        store.len(),
        store.path().display()
    )?;
    Ok(())
}
