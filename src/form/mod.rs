//! Draft state for the entry form and dispatch of submissions to the ledger.

use tracing::info;

use crate::ledger::Ledger;
use crate::models::{Draft, DraftError, Field, Transaction, TransactionId};

/// Result of pressing one of the save actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Submission {
    Added(TransactionId),
    Updated(TransactionId),
    /// The expense being edited no longer exists; nothing changed.
    Missing(TransactionId),
    Rejected(DraftError),
}

#[derive(Debug, Default)]
pub(crate) struct FormController {
    draft: Draft,
    editing_id: Option<TransactionId>,
    keep_draft_on_reject: bool,
}

impl FormController {
    pub(crate) fn new(keep_draft_on_reject: bool) -> Self {
        Self {
            keep_draft_on_reject,
            ..Self::default()
        }
    }

    pub(crate) fn draft(&self) -> &Draft {
        &self.draft
    }

    pub(crate) fn editing_id(&self) -> Option<TransactionId> {
        self.editing_id
    }

    pub(crate) fn field(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    pub(crate) fn field_mut(&mut self, field: Field) -> &mut String {
        self.draft.get_mut(field)
    }

    pub(crate) fn start_edit(&mut self, txn: &Transaction) {
        self.draft = txn.to_draft();
        self.editing_id = Some(txn.id());
    }

    pub(crate) fn reset(&mut self) {
        self.draft = Draft::default();
        self.editing_id = None;
    }

    pub(crate) fn submit_expense(&mut self, ledger: &mut Ledger) -> Submission {
        let outcome = match self.editing_id {
            Some(id) => match ledger.update_expense(id, &self.draft) {
                Ok(true) => Submission::Updated(id),
                Ok(false) => Submission::Missing(id),
                Err(e) => Submission::Rejected(e),
            },
            None => match ledger.add_expense(&self.draft) {
                Ok(id) => Submission::Added(id),
                Err(e) => Submission::Rejected(e),
            },
        };
        self.finish(outcome)
    }

    pub(crate) fn submit_income(&mut self, ledger: &mut Ledger) -> Submission {
        let outcome = match ledger.add_income(&self.draft) {
            Ok(id) => Submission::Added(id),
            Err(e) => Submission::Rejected(e),
        };
        self.finish(outcome)
    }

    fn finish(&mut self, outcome: Submission) -> Submission {
        if let Submission::Rejected(reason) = outcome {
            info!(%reason, editing = ?self.editing_id, "submission rejected");
            if self.keep_draft_on_reject {
                return outcome;
            }
        }
        self.reset();
        outcome
    }
}
