//! In-memory owner of the expense and income collections.
//!
//! Expenses support create/update/delete; incomes are append-only. Every
//! total is derived on demand from the parsed amounts.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Draft, DraftError, Transaction, TransactionId};

/// Totals shown on the summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) total_incomes: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) balance: Decimal,
}

/// Everything the screen needs to draw, borrowed from the ledger.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Snapshot<'a> {
    pub(crate) expenses: &'a [Transaction],
    pub(crate) incomes: &'a [Transaction],
    pub(crate) summary: Summary,
}

/// Hands out time-based ids that never repeat, even within one millisecond.
#[derive(Debug, Default)]
struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    fn next(&mut self) -> TransactionId {
        let now = chrono::Utc::now().timestamp_millis();
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        TransactionId(id)
    }
}

#[derive(Debug, Default)]
pub(crate) struct Ledger {
    expenses: Vec<Transaction>,
    incomes: Vec<Transaction>,
    ids: IdGenerator,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn expenses(&self) -> &[Transaction] {
        &self.expenses
    }

    pub(crate) fn incomes(&self) -> &[Transaction] {
        &self.incomes
    }

    pub(crate) fn expense(&self, id: TransactionId) -> Option<&Transaction> {
        self.expenses.iter().find(|t| t.id() == id)
    }

    pub(crate) fn add_expense(&mut self, draft: &Draft) -> Result<TransactionId, DraftError> {
        draft.validate()?;
        let id = self.ids.next();
        self.expenses.push(Transaction::from_draft(id, draft));
        debug!(%id, name = %draft.name, amount = %draft.amount, "expense added");
        Ok(id)
    }

    /// Overwrite the expense with `id` in place. Returns `Ok(false)` when no
    /// such expense exists.
    pub(crate) fn update_expense(
        &mut self,
        id: TransactionId,
        draft: &Draft,
    ) -> Result<bool, DraftError> {
        draft.validate()?;
        match self.expenses.iter_mut().find(|t| t.id() == id) {
            Some(txn) => {
                txn.apply(draft);
                debug!(%id, name = %draft.name, amount = %draft.amount, "expense updated");
                Ok(true)
            }
            None => {
                debug!(%id, "expense to update not found");
                Ok(false)
            }
        }
    }

    /// Remove the expense with `id`. Returns whether anything was removed.
    pub(crate) fn delete_expense(&mut self, id: TransactionId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|t| t.id() != id);
        let removed = self.expenses.len() != before;
        debug!(%id, removed, "expense delete");
        removed
    }

    pub(crate) fn add_income(&mut self, draft: &Draft) -> Result<TransactionId, DraftError> {
        draft.validate()?;
        let id = self.ids.next();
        self.incomes.push(Transaction::from_draft(id, draft));
        debug!(%id, name = %draft.name, amount = %draft.amount, "income added");
        Ok(id)
    }

    /// Totals saturate at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
    pub(crate) fn total_expenses(&self) -> Decimal {
        total(&self.expenses)
    }

    pub(crate) fn total_incomes(&self) -> Decimal {
        total(&self.incomes)
    }

    pub(crate) fn balance(&self) -> Decimal {
        self.total_incomes().saturating_sub(self.total_expenses())
    }

    pub(crate) fn summary(&self) -> Summary {
        Summary {
            total_incomes: self.total_incomes(),
            total_expenses: self.total_expenses(),
            balance: self.balance(),
        }
    }

    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            expenses: &self.expenses,
            incomes: &self.incomes,
            summary: self.summary(),
        }
    }
}

fn total(entries: &[Transaction]) -> Decimal {
    entries
        .iter()
        .map(Transaction::value)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

#[cfg(test)]
mod tests;
