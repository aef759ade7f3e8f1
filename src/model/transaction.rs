use crate::model::Amount;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded expense.
///
/// Instances are only created through [`Transaction::create`] or [`Transaction::update`], both of
/// which expect field values that have already passed validation. The persisted JSON field names
/// match the struct field names.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    id: String,
    description: String,
    amount: Amount,
    category: String,
    date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a new transaction with a generated ID and both timestamps set to `now`.
    pub fn create(
        description: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: generate_transaction_id(),
            description: description.into(),
            amount,
            category: category.into(),
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy with new field values, the same `id` and `created_at`, and `updated_at`
    /// bumped to `now`.
    pub fn update(
        &self,
        description: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: self.id.clone(),
            description: description.into(),
            amount,
            category: category.into(),
            date,
            created_at: self.created_at,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// The raw, not-yet-validated user input for a transaction. All fields are kept as the strings
/// the user typed; the validator decides whether they are acceptable.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl TransactionDraft {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }
}

/// Generates a unique transaction ID with a `txn-` prefix.
fn generate_transaction_id() -> String {
    format!("txn-{}", Uuid::new_v4().simple())
}
