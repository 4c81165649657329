use rust_decimal::Decimal;

use super::{parse_amount, Draft};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct TransactionId(pub(crate) i64);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A recorded expense or income entry.
///
/// `amount` keeps the text as entered; `value` is its parsed form and is
/// always kept in step with it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    id: TransactionId,
    name: String,
    amount: String,
    category: String,
    date: String,
    value: Decimal,
}

impl Transaction {
    pub(crate) fn from_draft(id: TransactionId, draft: &Draft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            amount: draft.amount.clone(),
            category: draft.category.clone(),
            date: draft.date.clone(),
            value: parse_amount(&draft.amount),
        }
    }

    pub(crate) fn id(&self) -> TransactionId {
        self.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn amount(&self) -> &str {
        &self.amount
    }

    pub(crate) fn category(&self) -> &str {
        &self.category
    }

    pub(crate) fn date(&self) -> &str {
        &self.date
    }

    pub(crate) fn value(&self) -> Decimal {
        self.value
    }

    /// Replace every field except the id.
    pub(crate) fn apply(&mut self, draft: &Draft) {
        self.name = draft.name.clone();
        self.amount = draft.amount.clone();
        self.category = draft.category.clone();
        self.date = draft.date.clone();
        self.value = parse_amount(&draft.amount);
    }

    pub(crate) fn to_draft(&self) -> Draft {
        Draft {
            name: self.name.clone(),
            amount: self.amount.clone(),
            category: self.category.clone(),
            date: self.date.clone(),
        }
    }
}
