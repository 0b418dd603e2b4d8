//! Expense store for JSON storage
//!
//! Owns the in-memory expense sequence and the path of the JSON document it is
//! loaded from and saved to. The document is a bare array of expense objects.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;
use crate::models::Expense;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Read the expenses stored at `path`
///
/// A missing file or malformed JSON yields an empty list.
pub fn load(path: impl AsRef<Path>) -> Vec<Expense> {
    read_json_or_default(path)
}

/// Overwrite `path` with the given expenses
pub fn save(expenses: &[Expense], path: impl AsRef<Path>) -> Result<(), ExpenseError> {
    write_json_atomic(path, expenses)
}

/// The ledger: an ordered sequence of expenses bound to its backing file
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Open the store at `path`, loading whatever it currently holds
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let expenses = load(&path);
        log::info!("Loaded {} expenses from {}", expenses.len(), path.display());
        Self { path, expenses }
    }

    /// Create an empty store bound to `path` without reading it
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expenses: Vec::new(),
        }
    }

    /// Path of the backing JSON document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full sequence to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        save(&self.expenses, &self.path)?;
        log::info!(
            "Saved {} expenses to {}",
            self.expenses.len(),
            self.path.display()
        );
        Ok(())
    }

    /// All expenses, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Append an expense
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove and return the expense at a 0-based index
    ///
    /// Returns `None` and leaves the store unchanged if the index is past the
    /// end.
    pub fn take(&mut self, index: usize) -> Option<Expense> {
        if index < self.expenses.len() {
            Some(self.expenses.remove(index))
        } else {
            None
        }
    }
}
