//! Storage layer for the expense tracker
//!
//! Provides the JSON-backed expense store and the file helpers it is built on.

pub mod expenses;
pub mod file_io;

pub use expenses::{load, save, ExpenseStore};
pub use file_io::{read_json_or_default, write_json_atomic};
