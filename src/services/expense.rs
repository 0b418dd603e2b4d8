//! Expense service
//!
//! Mutations on the ledger. Values arrive already validated by the shell; this
//! layer only appends and removes.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::ExpenseStore;

/// Service for adding and removing expenses
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store }
    }

    /// Append an expense to the end of the ledger
    pub fn add(
        &mut self,
        date: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> &Expense {
        let expense = Expense::new(date, amount, category);
        log::debug!("Adding expense: {}", expense);
        self.store.push(expense);
        &self.store.expenses()[self.store.len() - 1]
    }

    /// Remove the expense at a 1-based position
    ///
    /// Positions outside `[1, len]` leave the ledger unchanged.
    pub fn remove_at(&mut self, position: usize) -> ExpenseResult<Expense> {
        let len = self.store.len();
        if position == 0 {
            return Err(ExpenseError::out_of_range(position, len));
        }

        let removed = self
            .store
            .take(position - 1)
            .ok_or_else(|| ExpenseError::out_of_range(position, len))?;
        log::debug!("Removed expense #{}: {}", position, removed);
        Ok(removed)
    }

    /// Persist the ledger
    pub fn save(&self) -> ExpenseResult<()> {
        self.store.save()
    }
}
