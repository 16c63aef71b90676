//! # Expense Ledger
//!
//! A plain list of named amounts, independent of orders. Pure list
//! operations, no derived state: totals are computed on read by the profit
//! module.

use crate::money::Money;
use crate::types::Expense;

/// The day's operating expenses, in the order they were recorded.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        ExpenseLedger {
            expenses: Vec::new(),
        }
    }

    /// Rebuilds a ledger from previously persisted expenses.
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        ExpenseLedger { expenses }
    }

    /// Records a new expense under the caller-assigned id.
    pub fn add(&mut self, id: String, name: String, amount: Money) {
        self.expenses.push(Expense {
            id,
            name,
            amount_cents: amount.cents(),
        });
    }

    /// Removes the expense with the given id.
    ///
    /// Returns `false` (a silent no-op) if no such expense exists.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    /// Empties the ledger. Idempotent; used by the day reset.
    pub fn clear_all(&mut self) {
        self.expenses.clear();
    }

    /// All expenses, in recording order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Number of recorded expenses.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
