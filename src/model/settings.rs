use crate::Result;
use anyhow::bail;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The currencies a base amount can be converted into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Gbp,
}

serde_plain::derive_display_from_serialize!(Currency);
serde_plain::derive_fromstr_from_deserialize!(Currency);

/// The process-wide settings record: a budget cap and the conversion rates from the base unit
/// into each supported currency. Loaded once at startup and replaced wholesale on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Monthly spending ceiling used for the dashboard budget line.
    #[serde(default = "default_budget_cap")]
    budget_cap: Decimal,

    /// Conversion factor per currency, applied as `base * rate`.
    #[serde(default = "default_rates")]
    rates: BTreeMap<Currency, Decimal>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            budget_cap: default_budget_cap(),
            rates: default_rates(),
        }
    }
}

fn default_budget_cap() -> Decimal {
    Decimal::new(500, 0)
}

fn default_rates() -> BTreeMap<Currency, Decimal> {
    BTreeMap::from([
        (Currency::Eur, Decimal::new(92, 2)),
        (Currency::Gbp, Decimal::new(79, 2)),
    ])
}

impl Settings {
    pub fn budget_cap(&self) -> Decimal {
        self.budget_cap
    }

    pub fn rates(&self) -> &BTreeMap<Currency, Decimal> {
        &self.rates
    }

    /// Replaces the budget cap. The cap may be zero but never negative.
    pub fn set_budget_cap(&mut self, cap: Decimal) -> Result<()> {
        if cap.is_sign_negative() {
            bail!("Invalid budget amount: the cap must not be negative");
        }
        self.budget_cap = cap;
        Ok(())
    }

    /// Replaces the conversion rates. Every rate must be strictly positive.
    pub fn set_rates(&mut self, eur: Decimal, gbp: Decimal) -> Result<()> {
        if eur <= Decimal::ZERO || gbp <= Decimal::ZERO {
            bail!("Invalid exchange rates: every rate must be greater than zero");
        }
        self.rates = BTreeMap::from([(Currency::Eur, eur), (Currency::Gbp, gbp)]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.budget_cap(), Decimal::from(500));
        assert_eq!(
            settings.rates().get(&Currency::Eur),
            Some(&Decimal::from_str("0.92").unwrap())
        );
        assert_eq!(
            settings.rates().get(&Currency::Gbp),
            Some(&Decimal::from_str("0.79").unwrap())
        );
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Gbp.to_string(), "GBP");
        assert_eq!("GBP".parse::<Currency>().unwrap(), Currency::Gbp);
    }

    #[test]
    fn test_set_budget_cap_rejects_negative() {
        let mut settings = Settings::default();
        assert!(settings.set_budget_cap(Decimal::from(-1)).is_err());
        assert!(settings.set_budget_cap(Decimal::ZERO).is_ok());
        assert_eq!(settings.budget_cap(), Decimal::ZERO);
    }

    #[test]
    fn test_set_rates_rejects_non_positive() {
        let mut settings = Settings::default();
        assert!(settings
            .set_rates(Decimal::ZERO, Decimal::from(1))
            .is_err());
        assert!(settings
            .set_rates(Decimal::from(1), Decimal::from(-2))
            .is_err());
        assert!(settings.set_rates(Decimal::from(1), Decimal::from(2)).is_ok());
    }

    #[test]
    fn test_partial_settings_file_gets_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"budget_cap": "250"}"#).unwrap();
        assert_eq!(settings.budget_cap(), Decimal::from(250));
        assert_eq!(settings.rates(), Settings::default().rates());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings
            .set_rates(
                Decimal::from_str("0.95").unwrap(),
                Decimal::from_str("0.81").unwrap(),
            )
            .unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        let read: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, read);
    }
}
