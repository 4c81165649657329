use crate::form::{FormController, Submission};
use crate::ledger::Ledger;
use crate::models::{Field, Transaction, TransactionId};
use crate::settings::Settings;

use super::util::{clamp_index, scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

/// Focusable area of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pane {
    Form,
    Expenses,
    Incomes,
}

impl Pane {
    pub(crate) fn all() -> &'static [Pane] {
        &[Self::Form, Self::Expenses, Self::Incomes]
    }
}

impl std::fmt::Display for Pane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form => write!(f, "Form"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Incomes => write!(f, "Incomes"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Insert,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Insert => write!(f, "INSERT"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteExpense { id: TransactionId, name: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) pane: Pane,
    pub(crate) input_mode: InputMode,
    pub(crate) field: Field,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) ledger: Ledger,
    pub(crate) form: FormController,

    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,
    pub(crate) income_index: usize,
    pub(crate) income_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) list_rows: usize,
}

impl App {
    pub(crate) fn new(settings: &Settings) -> Self {
        Self {
            running: true,
            pane: Pane::Form,
            input_mode: InputMode::Normal,
            field: Field::Name,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            ledger: Ledger::new(),
            form: FormController::new(settings.keep_draft_on_reject),

            expense_index: 0,
            expense_scroll: 0,
            income_index: 0,
            income_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            list_rows: 5,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn selected_expense(&self) -> Option<&Transaction> {
        self.ledger.expenses().get(self.expense_index)
    }

    // ── Focus and cursor ─────────────────────────────────────

    pub(crate) fn next_pane(&mut self) {
        let panes = Pane::all();
        let idx = panes.iter().position(|p| *p == self.pane).unwrap_or(0);
        self.pane = panes[(idx + 1) % panes.len()];
    }

    pub(crate) fn prev_pane(&mut self) {
        let panes = Pane::all();
        let idx = panes.iter().position(|p| *p == self.pane).unwrap_or(0);
        self.pane = panes[if idx == 0 { panes.len() - 1 } else { idx - 1 }];
    }

    pub(crate) fn move_down(&mut self) {
        let page = self.list_rows.max(1);
        match self.pane {
            Pane::Form => self.field = self.field.next(),
            Pane::Expenses => scroll_down(
                &mut self.expense_index,
                &mut self.expense_scroll,
                self.ledger.expenses().len(),
                page,
            ),
            Pane::Incomes => scroll_down(
                &mut self.income_index,
                &mut self.income_scroll,
                self.ledger.incomes().len(),
                page,
            ),
        }
    }

    pub(crate) fn move_up(&mut self) {
        match self.pane {
            Pane::Form => self.field = self.field.prev(),
            Pane::Expenses => scroll_up(&mut self.expense_index, &mut self.expense_scroll),
            Pane::Incomes => scroll_up(&mut self.income_index, &mut self.income_scroll),
        }
    }

    pub(crate) fn goto_top(&mut self) {
        match self.pane {
            Pane::Form => self.field = Field::Name,
            Pane::Expenses => scroll_to_top(&mut self.expense_index, &mut self.expense_scroll),
            Pane::Incomes => scroll_to_top(&mut self.income_index, &mut self.income_scroll),
        }
    }

    pub(crate) fn goto_bottom(&mut self) {
        let page = self.list_rows.max(1);
        match self.pane {
            Pane::Form => self.field = Field::Date,
            Pane::Expenses => scroll_to_bottom(
                &mut self.expense_index,
                &mut self.expense_scroll,
                self.ledger.expenses().len(),
                page,
            ),
            Pane::Incomes => scroll_to_bottom(
                &mut self.income_index,
                &mut self.income_scroll,
                self.ledger.incomes().len(),
                page,
            ),
        }
    }

    // ── Form editing ─────────────────────────────────────────

    pub(crate) fn start_insert(&mut self) {
        self.pane = Pane::Form;
        self.input_mode = InputMode::Insert;
    }

    pub(crate) fn insert_char(&mut self, c: char) {
        self.form.field_mut(self.field).push(c);
    }

    pub(crate) fn delete_char(&mut self) {
        self.form.field_mut(self.field).pop();
    }

    pub(crate) fn clear_field(&mut self) {
        self.form.field_mut(self.field).clear();
    }

    pub(crate) fn clear_form(&mut self) {
        let was_editing = self.form.editing_id().is_some();
        self.form.reset();
        self.field = Field::Name;
        self.set_status(if was_editing {
            "Edit cancelled"
        } else {
            "Form cleared"
        });
    }

    // ── Ledger actions ───────────────────────────────────────

    pub(crate) fn save_expense(&mut self) {
        let name = self.form.draft().name.clone();
        let outcome = self.form.submit_expense(&mut self.ledger);
        match outcome {
            Submission::Added(_) => {
                self.select_last_expense();
                self.set_status(format!("Saved expense: {name}"));
            }
            Submission::Updated(_) => self.set_status(format!("Updated expense: {name}")),
            Submission::Missing(id) => {
                self.set_status(format!("Expense {id} no longer exists; nothing saved"));
            }
            Submission::Rejected(reason) => self.set_status(format!("Not saved: {reason}")),
        }
        self.after_submit(outcome);
    }

    pub(crate) fn save_income(&mut self) {
        let name = self.form.draft().name.clone();
        let outcome = self.form.submit_income(&mut self.ledger);
        match outcome {
            Submission::Added(_) => {
                self.select_last_income();
                self.set_status(format!("Saved income: {name}"));
            }
            Submission::Rejected(reason) => self.set_status(format!("Not saved: {reason}")),
            Submission::Updated(_) | Submission::Missing(_) => {}
        }
        self.after_submit(outcome);
    }

    fn after_submit(&mut self, outcome: Submission) {
        let kept = matches!(outcome, Submission::Rejected(_)) && !self.form.draft().is_blank();
        if !kept {
            self.field = Field::Name;
        }
    }

    fn select_last_expense(&mut self) {
        let len = self.ledger.expenses().len();
        scroll_to_bottom(
            &mut self.expense_index,
            &mut self.expense_scroll,
            len,
            self.list_rows.max(1),
        );
    }

    fn select_last_income(&mut self) {
        let len = self.ledger.incomes().len();
        scroll_to_bottom(
            &mut self.income_index,
            &mut self.income_scroll,
            len,
            self.list_rows.max(1),
        );
    }

    /// Load the selected expense into the form.
    pub(crate) fn edit_selected(&mut self) {
        let Some(txn) = self.ledger.expenses().get(self.expense_index) else {
            self.set_status("No expense selected");
            return;
        };
        self.form.start_edit(txn);
        let name = txn.name().to_string();
        self.pane = Pane::Form;
        self.field = Field::Name;
        self.set_status(format!("Editing '{name}'. S saves, Esc cancels"));
    }

    pub(crate) fn request_delete(&mut self) {
        let Some(txn) = self.selected_expense() else {
            self.set_status("No expense selected");
            return;
        };
        let (id, name) = (txn.id(), txn.name().to_string());
        self.confirm_message = format!("Delete '{name}' ({})?", txn.amount());
        self.pending_action = Some(PendingAction::DeleteExpense { id, name });
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn confirm_pending(&mut self) {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::DeleteExpense { id, name } => {
                    if self.ledger.delete_expense(id) {
                        clamp_index(
                            &mut self.expense_index,
                            &mut self.expense_scroll,
                            self.ledger.expenses().len(),
                        );
                        self.set_status(format!("Deleted: {name}"));
                    } else {
                        self.set_status(format!("'{name}' was already gone"));
                    }
                }
            }
        }
        self.confirm_message.clear();
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.confirm_message.clear();
        self.input_mode = InputMode::Normal;
        self.set_status("Cancelled");
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
