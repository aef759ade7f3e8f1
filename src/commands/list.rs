//! The `list` command handler: regex search, ordering, and the rendered table.

use crate::args::ListArgs;
use crate::commands::Out;
use crate::model::Transaction;
use crate::search::{compile, filter, highlight, sort};
use crate::{Result, Store};
use regex::Regex;
use tracing::warn;

/// Lists transactions, filtered by an optional regex search and ordered by the sort key.
///
/// An invalid search pattern is a notice, not a failure: the listing proceeds unfiltered, which
/// leaves the previous "no filter" state in effect.
pub async fn list(store: &Store, args: ListArgs) -> Result<Out<Vec<Transaction>>> {
    let transactions = store.load().await;

    let mut searching = false;
    let matcher: Option<Regex> = match args.search() {
        None => None,
        Some(raw) if raw.trim().is_empty() => None,
        Some(raw) => match compile(raw, args.case_sensitive()) {
            Some(re) => {
                searching = true;
                Some(re)
            }
            None => {
                warn!("Invalid regex pattern: {raw}");
                None
            }
        },
    };

    let visible = sort(&filter(&transactions, matcher.as_ref()), args.sort());

    let mut message = if searching {
        format!("Found {} matching transaction(s)", visible.len())
    } else {
        format!("{} transaction(s)", visible.len())
    };
    if !visible.is_empty() {
        message.push('\n');
        message.push_str(&render_table(&visible, matcher.as_ref()));
    }

    Ok(Out::new(message, visible))
}

/// Renders the listing as a plain text table. Matches in the description and category columns
/// are wrapped in the highlight markers; padding is computed on the unhighlighted text so the
/// invisible markers do not skew the columns.
fn render_table(transactions: &[Transaction], matcher: Option<&Regex>) -> String {
    let desc_width = column_width(transactions.iter().map(|t| t.description()), 11);
    let cat_width = column_width(transactions.iter().map(|t| t.category()), 8);

    let mut out = format!(
        "{:<10}  {:<desc_width$}  {:<cat_width$}  {:>12}  {}\n",
        "DATE", "DESCRIPTION", "CATEGORY", "AMOUNT", "ID"
    );
    for txn in transactions {
        out.push_str(&format!(
            "{}  {}  {}  {:>12}  {}\n",
            txn.date(),
            pad_highlighted(txn.description(), matcher, desc_width),
            pad_highlighted(txn.category(), matcher, cat_width),
            txn.amount().to_string(),
            txn.id(),
        ));
    }
    out.pop();
    out
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0).max(min)
}

fn pad_highlighted(text: &str, matcher: Option<&Regex>, width: usize) -> String {
    let mut padded = highlight(text, matcher);
    padded.push_str(&" ".repeat(width.saturating_sub(text.chars().count())));
    padded
}
