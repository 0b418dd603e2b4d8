//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit path (the `--file` flag, which clap also fills from
//!    `EXPENSE_TRACKER_FILE`)
//! 2. `expenses.json` in the current working directory

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data file location
///
/// Read by the CLI parser only, as the fallback for `--file`.
pub const DATA_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

/// Default data file name
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Resolves where the ledger lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpensePaths {
    data_file: PathBuf,
}

impl ExpensePaths {
    /// Use the explicit path if given, otherwise `expenses.json`
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let data_file = explicit
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Self { data_file }
    }

    /// Path to the expenses JSON document
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}
