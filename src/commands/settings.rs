//! Handlers for the `settings` and `convert` commands.

use crate::args::{BudgetArgs, ConvertArgs, RatesArgs};
use crate::commands::Out;
use crate::model::{Amount, Currency, Settings};
use crate::report;
use crate::{Result, Store};
use rust_decimal::Decimal;

/// Prints the current settings record.
pub async fn show_settings(store: &Store) -> Result<Out<Settings>> {
    let settings = store.load_settings().await;
    let mut message = format!("Budget cap: {}", Amount::new(settings.budget_cap()));
    for (currency, rate) in settings.rates() {
        message.push_str(&format!("\nRate {currency}: {rate}"));
    }
    Ok(Out::new(message, settings))
}

/// Sets the budget cap and saves the settings record wholesale.
pub async fn set_budget(store: &Store, args: BudgetArgs) -> Result<Out<Settings>> {
    let mut settings = store.load_settings().await;
    settings.set_budget_cap(args.cap())?;
    store.save_settings(&settings).await?;
    let message = format!("Budget cap saved: {}", Amount::new(settings.budget_cap()));
    Ok(Out::new(message, settings))
}

/// Sets the currency conversion rates and saves the settings record wholesale.
pub async fn set_rates(store: &Store, args: RatesArgs) -> Result<Out<Settings>> {
    let mut settings = store.load_settings().await;
    settings.set_rates(args.eur(), args.gbp())?;
    store.save_settings(&settings).await?;
    Ok(Out::new("Exchange rates saved", settings))
}

/// Converts a base amount into each configured currency. Display only; nothing is stored.
pub async fn convert(store: &Store, args: ConvertArgs) -> Result<Out<Vec<(Currency, Decimal)>>> {
    let settings = store.load_settings().await;
    let converted = report::convert(args.amount(), settings.rates());
    let message = converted
        .iter()
        .map(|(currency, amount)| format!("{currency}: {}", Amount::new(*amount)))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(Out::new(message, converted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[tokio::test]
    async fn test_show_settings_defaults() {
        let env = TestEnv::new().await;
        let out = show_settings(env.store()).await.unwrap();
        assert_eq!(out.structure(), Some(&Settings::default()));
        assert!(out.message().contains("Budget cap: 500.00"));
        assert!(out.message().contains("Rate EUR: 0.92"));
        assert!(out.message().contains("Rate GBP: 0.79"));
    }

    #[tokio::test]
    async fn test_set_budget_persists() {
        let env = TestEnv::new().await;
        set_budget(env.store(), BudgetArgs::new(dec("750")))
            .await
            .unwrap();
        assert_eq!(env.store().load_settings().await.budget_cap(), dec("750"));
    }

    #[tokio::test]
    async fn test_set_budget_rejects_negative() {
        let env = TestEnv::new().await;
        let err = set_budget(env.store(), BudgetArgs::new(dec("-1")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid budget amount"));
        // The stored record is untouched
        assert_eq!(env.store().load_settings().await, Settings::default());
    }

    #[tokio::test]
    async fn test_set_rates_persists() {
        let env = TestEnv::new().await;
        set_rates(env.store(), RatesArgs::new(dec("0.95"), dec("0.81")))
            .await
            .unwrap();
        let settings = env.store().load_settings().await;
        assert_eq!(settings.rates().get(&Currency::Eur), Some(&dec("0.95")));
        assert_eq!(settings.rates().get(&Currency::Gbp), Some(&dec("0.81")));
    }

    #[tokio::test]
    async fn test_set_rates_rejects_zero() {
        let env = TestEnv::new().await;
        let err = set_rates(env.store(), RatesArgs::new(dec("0"), dec("0.81")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid exchange rates"));
    }

    #[tokio::test]
    async fn test_convert_uses_stored_rates() {
        let env = TestEnv::new().await;
        let out = convert(env.store(), ConvertArgs::new(dec("100")))
            .await
            .unwrap();
        assert_eq!(
            out.structure(),
            Some(&vec![
                (Currency::Eur, dec("92.00")),
                (Currency::Gbp, dec("79.00"))
            ])
        );
        assert!(out.message().contains("EUR: 92.00"));
        assert!(out.message().contains("GBP: 79.00"));
    }
}
