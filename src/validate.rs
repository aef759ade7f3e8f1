//! Field validation for candidate transactions.
//!
//! [`validate`] checks a [`TransactionDraft`] against the format and semantic rules for each
//! field and returns a map of field-keyed error messages. An empty map means the draft is
//! acceptable. Validation never fails with an error of its own; every rule is a total function
//! of the input.

use crate::model::TransactionDraft;
use chrono::NaiveDate;
use once_cell::sync::OnceCell;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The largest accepted amount.
const MAX_AMOUNT: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

/// The fields of a transaction draft that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Description,
    Amount,
    Category,
    Date,
}

serde_plain::derive_display_from_serialize!(Field);
serde_plain::derive_fromstr_from_deserialize!(Field);

/// Per-field error messages produced by [`validate`]. Empty means the draft was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ix, (field, message)) in self.iter().enumerate() {
            if ix > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Validates a candidate transaction.
///
/// Each field is evaluated independently and the first failing rule per field wins, so a draft
/// with several bad fields reports one message for each of them. `today` is the evaluation date
/// for the future-date rule.
pub fn validate(draft: &TransactionDraft, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    // Description
    if draft.description.trim().is_empty() {
        errors.insert(Field::Description, "Description required");
    } else if draft.description != draft.description.trim() {
        errors.insert(Field::Description, "Remove extra spaces");
    } else if has_repeated_word(&draft.description) {
        errors.insert(Field::Description, "Duplicate words detected");
    } else if draft.description.chars().count() < 3 {
        errors.insert(Field::Description, "Min 3 characters");
    } else if draft.description.chars().count() > 100 {
        errors.insert(Field::Description, "Max 100 characters");
    }

    // Amount
    if draft.amount.trim().is_empty() {
        errors.insert(Field::Amount, "Amount required");
    } else if !amount_format_re().is_match(&draft.amount) {
        errors.insert(Field::Amount, "Invalid format (e.g., 12.50)");
    } else {
        match Decimal::from_str(&draft.amount) {
            Ok(value) if value <= Decimal::ZERO => {
                errors.insert(Field::Amount, "Must be greater than 0");
            }
            Ok(value) if value > MAX_AMOUNT => {
                errors.insert(Field::Amount, "Amount too large");
            }
            Ok(_) => {}
            // The format pattern admits nothing Decimal cannot parse.
            Err(_) => {
                errors.insert(Field::Amount, "Invalid format (e.g., 12.50)");
            }
        }
    }

    // Category
    if draft.category.trim().is_empty() {
        errors.insert(Field::Category, "Category required");
    }

    // Date
    if draft.date.trim().is_empty() {
        errors.insert(Field::Date, "Date required");
    } else if !date_format_re().is_match(&draft.date) {
        errors.insert(Field::Date, "Format: YYYY-MM-DD");
    } else {
        match NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d") {
            Ok(date) if date > today => {
                errors.insert(Field::Date, "Cannot be in future");
            }
            Ok(_) => {}
            // The format pattern is lenient about day-of-month, e.g. Feb 30 reaches this arm.
            Err(_) => {
                errors.insert(Field::Date, "Invalid date");
            }
        }
    }

    errors
}

/// Returns true if `text` contains a word immediately followed by the same word again,
/// case-insensitively, with nothing but whitespace between the two.
///
/// The regex engine here has no back-references, so this is an explicit scan over word runs
/// comparing adjacent pairs.
fn has_repeated_word(text: &str) -> bool {
    let mut previous: Option<(usize, &str)> = None;
    for word in word_re().find_iter(text) {
        if let Some((prev_end, prev_word)) = previous {
            let gap = &text[prev_end..word.start()];
            if gap.chars().all(char::is_whitespace)
                && prev_word.to_lowercase() == word.as_str().to_lowercase()
            {
                return true;
            }
        }
        previous = Some((word.end(), word.as_str()));
    }
    false
}

/// An unsigned integer or a decimal with 1-2 fraction digits, no leading zeros except "0".
fn amount_format_re() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"^(0|[1-9][0-9]*)(\.[0-9]{1,2})?$").unwrap())
}

/// `YYYY-MM-DD` with month 01-12 and day 01-31. Format-only; real calendar checking happens
/// at the parse stage.
fn date_format_re() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").unwrap()
    })
}

fn word_re() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"\w+").unwrap())
}
