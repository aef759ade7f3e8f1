//! The `dashboard` command handler.

use crate::commands::{today, Out};
use crate::model::Amount;
use crate::report::{bar_width, summarize, Summary};
use crate::{Result, Store};
use rust_decimal::Decimal;

/// Width of the longest category chart bar, in characters.
const CHART_WIDTH: usize = 30;

/// Renders the dashboard statistics: counts, totals, the trailing week, the budget line, and
/// the category chart. The statistics are recomputed from the stored collection on every call.
pub async fn dashboard(store: &Store) -> Result<Out<Summary>> {
    let transactions = store.load().await;
    let settings = store.load_settings().await;
    let summary = summarize(&transactions, &settings, today());
    let message = render(&summary);
    Ok(Out::new(message, summary))
}

fn render(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Transactions:     {}\n", summary.count()));
    out.push_str(&format!(
        "Total spent:      {}\n",
        Amount::new(summary.total_spent())
    ));
    out.push_str(&format!(
        "Last 7 days:      {}\n",
        Amount::new(summary.week_spent())
    ));
    out.push_str(&format!(
        "Budget cap:       {}\n",
        Amount::new(summary.budget_cap())
    ));
    if summary.budget_remaining() < Decimal::ZERO {
        out.push_str(&format!(
            "Over budget by:   {}\n",
            Amount::new(-summary.budget_remaining())
        ));
    } else {
        out.push_str(&format!(
            "Budget remaining: {}\n",
            Amount::new(summary.budget_remaining())
        ));
    }
    out.push_str(&format!(
        "Budget used:      {:.1}%\n",
        summary.budget_used_percent()
    ));
    out.push_str(&format!(
        "Top category:     {}",
        summary.top_category().unwrap_or("—")
    ));

    if let Some(max) = summary.max_category_total() {
        let name_width = summary
            .category_totals()
            .iter()
            .map(|c| c.name().chars().count())
            .max()
            .unwrap_or(0);
        out.push('\n');
        for category in summary.category_totals() {
            let bar = "█".repeat(bar_width(category.total(), max, CHART_WIDTH));
            out.push_str(&format!(
                "\n{:<name_width$}  {bar} {}",
                category.name(),
                Amount::new(category.total())
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::AddArgs;
    use crate::commands::add;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_dashboard_empty_store() {
        let env = TestEnv::new().await;
        let out = dashboard(env.store()).await.unwrap();
        let summary = out.structure().unwrap();
        assert_eq!(summary.count(), 0);
        assert_eq!(summary.top_category(), None);
        assert!(out.message().contains("Transactions:     0"));
        assert!(out.message().contains("Top category:     —"));
    }

    #[tokio::test]
    async fn test_dashboard_reflects_stored_transactions() {
        let env = TestEnv::new().await;
        add(
            env.store(),
            AddArgs::new("Morning coffee", "3.50", "Food", None),
        )
        .await
        .unwrap();
        add(env.store(), AddArgs::new("Bus ticket", "2.75", "Transport", None))
            .await
            .unwrap();

        let out = dashboard(env.store()).await.unwrap();
        let summary = out.structure().unwrap();
        assert_eq!(summary.count(), 2);
        assert_eq!(summary.top_category(), Some("Food"));
        assert!(out.message().contains("Total spent:      6.25"));
        assert!(out.message().contains("Budget remaining: 493.75"));
        // The top category bar spans the full chart width
        assert!(out.message().contains(&"█".repeat(CHART_WIDTH)));
    }
}
