//! Dashboard aggregation and currency conversion.
//!
//! [`summarize`] computes every dashboard statistic from the transaction collection and the
//! settings record. It is pure and cheap enough to recompute on every render, so nothing here
//! is cached.

use crate::model::{Currency, Settings, Transaction};
use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of trailing calendar days (including today) covered by [`Summary::week_spent`].
const TRAILING_WINDOW_DAYS: i64 = 7;

/// A category and the sum of amounts recorded against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryTotal {
    name: String,
    total: Decimal,
}

impl CategoryTotal {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

/// The dashboard statistics for one evaluation moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    count: usize,
    total_spent: Decimal,
    week_spent: Decimal,
    /// Ordered by descending total; categories with equal totals keep first-encountered order.
    category_totals: Vec<CategoryTotal>,
    budget_cap: Decimal,
    budget_remaining: Decimal,
    budget_used_percent: f64,
}

impl Summary {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn total_spent(&self) -> Decimal {
        self.total_spent
    }

    pub fn week_spent(&self) -> Decimal {
        self.week_spent
    }

    pub fn category_totals(&self) -> &[CategoryTotal] {
        &self.category_totals
    }

    /// The category with the largest summed amount, or `None` when there are no transactions.
    pub fn top_category(&self) -> Option<&str> {
        self.category_totals.first().map(CategoryTotal::name)
    }

    pub fn budget_cap(&self) -> Decimal {
        self.budget_cap
    }

    /// `budget_cap - total_spent`; negative means over budget.
    pub fn budget_remaining(&self) -> Decimal {
        self.budget_remaining
    }

    /// Spend as a percentage of the cap, clamped to 100 for display.
    pub fn budget_used_percent(&self) -> f64 {
        self.budget_used_percent
    }

    /// The largest category total, used as the full-width reference for chart bars.
    pub fn max_category_total(&self) -> Option<Decimal> {
        self.category_totals.first().map(CategoryTotal::total)
    }
}

/// Computes the dashboard statistics.
///
/// `today` is the evaluation date for the trailing-week window.
pub fn summarize(transactions: &[Transaction], settings: &Settings, today: NaiveDate) -> Summary {
    let week_start = today - Duration::days(TRAILING_WINDOW_DAYS);
    let mut total_spent = Decimal::ZERO;
    let mut week_spent = Decimal::ZERO;
    let mut category_totals: Vec<CategoryTotal> = Vec::new();

    for txn in transactions {
        let amount = txn.amount().value();
        total_spent += amount;
        if txn.date() > week_start {
            week_spent += amount;
        }
        match category_totals
            .iter_mut()
            .find(|c| c.name == txn.category())
        {
            Some(entry) => entry.total += amount,
            None => category_totals.push(CategoryTotal {
                name: txn.category().to_string(),
                total: amount,
            }),
        }
    }

    // Stable sort: equal totals keep the order in which the categories were first seen.
    category_totals.sort_by(|a, b| b.total.cmp(&a.total));

    let budget_cap = settings.budget_cap();
    Summary {
        count: transactions.len(),
        total_spent,
        week_spent,
        category_totals,
        budget_cap,
        budget_remaining: budget_cap - total_spent,
        budget_used_percent: budget_used_percent(total_spent, budget_cap),
    }
}

/// `min(total / cap * 100, 100)`. A zero cap has no meaningful ratio, so any spending counts
/// as fully used and no spending as unused.
fn budget_used_percent(total_spent: Decimal, budget_cap: Decimal) -> f64 {
    if budget_cap.is_zero() {
        return if total_spent > Decimal::ZERO { 100.0 } else { 0.0 };
    }
    let percent = (total_spent / budget_cap).to_f64().unwrap_or_default() * 100.0;
    percent.min(100.0)
}

/// The character width of one category chart bar, scaled so the largest total always spans
/// the full `width`.
pub fn bar_width(total: Decimal, max: Decimal, width: usize) -> usize {
    if max <= Decimal::ZERO {
        return 0;
    }
    let fraction = (total / max).to_f64().unwrap_or_default();
    (fraction * width as f64).round() as usize
}

/// Converts a base amount into each configured currency, rounded to 2 decimal places for
/// display. The stored data is never converted.
pub fn convert(base: Decimal, rates: &BTreeMap<Currency, Decimal>) -> Vec<(Currency, Decimal)> {
    rates
        .iter()
        .map(|(currency, rate)| (*currency, (base * rate).round_dp(2)))
        .collect()
}
