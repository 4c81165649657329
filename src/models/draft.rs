/// Pending, unsaved form values. All fields are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Draft {
    pub(crate) name: String,
    pub(crate) amount: String,
    pub(crate) category: String,
    pub(crate) date: String,
}

impl Draft {
    /// Check the required fields. Only emptiness is checked; whitespace counts as content.
    pub(crate) fn validate(&self) -> Result<(), DraftError> {
        if self.name.is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.amount.is_empty() {
            return Err(DraftError::MissingAmount);
        }
        Ok(())
    }

    pub(crate) fn is_blank(&self) -> bool {
        Field::all().iter().all(|f| self.get(*f).is_empty())
    }

    pub(crate) fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Amount => &self.amount,
            Field::Category => &self.category,
            Field::Date => &self.date,
        }
    }

    pub(crate) fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Amount => &mut self.amount,
            Field::Category => &mut self.category,
            Field::Date => &mut self.date,
        }
    }
}

/// Why a draft was refused by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DraftError {
    MissingName,
    MissingAmount,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "name is required"),
            Self::MissingAmount => write!(f, "amount is required"),
        }
    }
}

impl std::error::Error for DraftError {}

/// Form field, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Field {
    #[default]
    Name,
    Amount,
    Category,
    Date,
}

impl Field {
    pub(crate) fn all() -> &'static [Field] {
        &[Self::Name, Self::Amount, Self::Category, Self::Date]
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Name,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Amount => Self::Name,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Date => "Date",
        }
    }

    pub(crate) fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "e.g. Paycheck",
            Self::Amount => "e.g. 1200.00",
            Self::Category => "e.g. Salary",
            Self::Date => "DD/MM/YYYY",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
