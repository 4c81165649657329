mod amount;
mod draft;
mod transaction;

pub(crate) use amount::parse_amount;
pub(crate) use draft::{Draft, DraftError, Field};
pub(crate) use transaction::{Transaction, TransactionId};

#[cfg(test)]
mod tests;
