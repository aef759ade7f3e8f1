//! Command handlers for the fintrack CLI.
//!
//! This module contains implementations for all CLI subcommands. Each handler loads what it
//! needs from the [`Store`](crate::Store), runs the pure core functions over it, persists any
//! mutation before reporting success, and returns an [`Out`] for the CLI to print.

mod add;
mod clear;
mod dashboard;
mod delete;
mod export;
mod import;
mod list;
mod settings;
mod update;

use crate::model::{Amount, TransactionDraft};
use crate::validate::validate;
use crate::Result;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, info};

pub use add::add;
pub use clear::clear;
pub use dashboard::dashboard;
pub use delete::delete;
pub use export::export;
pub use import::import;
pub use list::list;
pub use settings::{convert, set_budget, set_rates, show_settings};
pub use update::update;

/// The output type for a command. This allows the command to return a consistent message and,
/// optionally, structured data.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to `info!` and the structured data (if it exists) as JSON to `debug!`.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// The field values of a draft that passed validation, parsed into their model types.
#[derive(Debug, Clone)]
pub(crate) struct Accepted {
    pub(crate) description: String,
    pub(crate) amount: Amount,
    pub(crate) category: String,
    pub(crate) date: NaiveDate,
}

/// Runs the validator over a draft and parses the fields on success. A rejected draft becomes
/// an error listing every field message, which is the CLI rendering of the per-field error map.
pub(crate) fn accept(draft: &TransactionDraft, today: NaiveDate) -> Result<Accepted> {
    let errors = validate(draft, today);
    if !errors.is_empty() {
        bail!("Please fix the following, then try again:\n{errors}");
    }
    // The validator guarantees both parses below succeed.
    let amount = Amount::from_str(&draft.amount).context("Unable to parse the amount")?;
    let date = NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d")
        .context("Unable to parse the date")?;
    Ok(Accepted {
        description: draft.description.clone(),
        amount,
        category: draft.category.clone(),
        date,
    })
}

/// The evaluation date for "today": future-date validation and the trailing-week window.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_parses_valid_draft() {
        let draft = TransactionDraft::new("Morning coffee", "3.50", "Food", "2025-06-01");
        let accepted = accept(&draft, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).unwrap();
        assert_eq!(accepted.description, "Morning coffee");
        assert_eq!(accepted.amount.plain(), "3.50");
        assert_eq!(accepted.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_accept_reports_every_field() {
        let draft = TransactionDraft::new("", "nope", "", "2024-02-30");
        let err = accept(&draft, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("description: Description required"));
        assert!(text.contains("amount: Invalid format (e.g., 12.50)"));
        assert!(text.contains("category: Category required"));
        assert!(text.contains("date: Invalid date"));
    }
}
