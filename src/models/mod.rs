//! Core data models for the expense tracker
//!
//! The ledger has a single entity, the expense, plus the fixed-point money
//! type used for its amount.

pub mod expense;
pub mod money;

pub use expense::Expense;
pub use money::{Money, MoneyParseError};
