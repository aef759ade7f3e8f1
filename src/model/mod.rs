//! The data model for the tracker: monetary amounts, transactions, and the settings record.

mod amount;
mod settings;
mod transaction;

pub use amount::Amount;
pub use settings::{Currency, Settings};
pub use transaction::{Transaction, TransactionDraft};
