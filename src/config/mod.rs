//! Configuration module for the expense tracker
//!
//! Resolves the location of the ledger file from flags, environment, and
//! defaults.

pub mod paths;

pub use paths::{ExpensePaths, DATA_FILE_ENV, DEFAULT_DATA_FILE};
