//! Reports module
//!
//! Aggregated views of the ledger.

pub mod spending;

pub use spending::{totals_by_category, CategorySpending, SpendingReport};
