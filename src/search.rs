//! Regex search, ordering, and match highlighting over the transaction collection.
//!
//! Search patterns are untrusted user text. [`compile`] turns one into a reusable matcher or
//! signals failure with `None` instead of an error, so a bad pattern can never take the
//! application down. Filtering matches against the concatenation of description, category, and
//! the plain string form of the amount, which is what the user sees in the transaction list.

use crate::model::Transaction;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// ANSI emphasis wrapped around every match span by [`highlight`].
pub const HIGHLIGHT_START: &str = "\u{1b}[1;33m";
pub const HIGHLIGHT_END: &str = "\u{1b}[0m";

/// Compiles a user-supplied search pattern into a matcher.
///
/// Returns `None` for whitespace-only input, meaning "no filter", and `None` for a syntactically
/// invalid pattern. Callers that have already ruled out empty input can therefore treat `None`
/// as "invalid pattern" and surface it as a notice.
pub fn compile(raw: &str, case_sensitive: bool) -> Option<Regex> {
    if raw.trim().is_empty() {
        return None;
    }
    RegexBuilder::new(raw)
        .case_insensitive(!case_sensitive)
        .build()
        .ok()
}

/// Keeps the transactions the matcher tests positively against, preserving input order.
/// A `None` matcher passes everything through unfiltered.
pub fn filter(transactions: &[Transaction], matcher: Option<&Regex>) -> Vec<Transaction> {
    match matcher {
        None => transactions.to_vec(),
        Some(re) => transactions
            .iter()
            .filter(|txn| re.is_match(&haystack(txn)))
            .cloned()
            .collect(),
    }
}

/// The text a search pattern is tested against for one transaction.
fn haystack(txn: &Transaction) -> String {
    format!(
        "{} {} {}",
        txn.description(),
        txn.category(),
        txn.amount().plain()
    )
}

/// Selects the comparison field and direction for [`sort`].
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest first.
    #[default]
    DateDesc,
    /// Oldest first.
    DateAsc,
    /// Description A to Z.
    DescAsc,
    /// Description Z to A.
    DescDesc,
    /// Largest amount first.
    AmountDesc,
    /// Smallest amount first.
    AmountAsc,
}

serde_plain::derive_display_from_serialize!(SortKey);
serde_plain::derive_fromstr_from_deserialize!(SortKey);

/// Returns a reordered copy of the transactions. The sort is stable, so ties keep their
/// input order.
pub fn sort(transactions: &[Transaction], key: SortKey) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    match key {
        SortKey::DateDesc => sorted.sort_by(|a, b| b.date().cmp(&a.date())),
        SortKey::DateAsc => sorted.sort_by(|a, b| a.date().cmp(&b.date())),
        SortKey::DescAsc => {
            sorted.sort_by(|a, b| fold_case(a.description()).cmp(&fold_case(b.description())))
        }
        SortKey::DescDesc => {
            sorted.sort_by(|a, b| fold_case(b.description()).cmp(&fold_case(a.description())))
        }
        SortKey::AmountDesc => sorted.sort_by(|a, b| b.amount().cmp(&a.amount())),
        SortKey::AmountAsc => sorted.sort_by(|a, b| a.amount().cmp(&b.amount())),
    }
    sorted
}

/// Case-folded comparison key for description ordering.
fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Wraps every non-overlapping match span in `text` with the highlight markers. Without a
/// matcher the text passes through unmodified.
pub fn highlight(text: &str, matcher: Option<&Regex>) -> String {
    let Some(re) = matcher else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in re.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        out.push_str(HIGHLIGHT_START);
        out.push_str(m.as_str());
        out.push_str(HIGHLIGHT_END);
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
