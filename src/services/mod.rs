//! Business logic layer
//!
//! `expense` holds the mutating operations on the store; `query` holds the
//! pure read-side operations over a slice of expenses.

pub mod expense;
pub mod query;

pub use expense::ExpenseService;
pub use query::{filter_by_category, filter_by_month, filter_by_year, list_categories, total};
