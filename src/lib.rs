//! Expense Tracker - terminal-based personal expense ledger
//!
//! This library provides the core of the `expenses` binary: a list of dated,
//! categorized expenses kept in a local JSON file, plus the operations to add,
//! remove, total and filter them.
//!
//! # Architecture
//!
//! - `config`: Data file resolution
//! - `error`: Custom error types
//! - `models`: The expense record and money type
//! - `storage`: JSON load/save and the expense store
//! - `services`: Mutations and pure queries over the ledger
//! - `reports`: Per-category spending summary
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu, subcommands and input validation
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::Money;
//! use expense_tracker::services::{self, ExpenseService};
//! use expense_tracker::storage::ExpenseStore;
//!
//! let mut store = ExpenseStore::open("expenses.json");
//! ExpenseService::new(&mut store).add("2024-01-05", Money::from_cents(1250), "Food");
//! println!("{}", services::total(store.expenses()));
//! store.save()?;
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
