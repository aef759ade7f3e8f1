//! The persistence gateway: JSON files under the fintrack home directory.
//!
//! Transactions live in `transactions.json` and the settings record in `settings.json`. Reads
//! never fail the caller: a missing or unreadable file falls back to an empty collection or to
//! default settings, with the problem logged. Writes do fail the caller, because a mutating
//! command must not report success when nothing was persisted.

use crate::home::Home;
use crate::model::{Settings, Transaction};
use crate::{utils, Result};
use anyhow::Context;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

/// Load/save access to the transaction collection and settings record.
#[derive(Debug, Clone)]
pub struct Store {
    home: Home,
}

impl Store {
    /// Opens the store at `fintrack_home`, creating the directory if needed.
    pub async fn open(fintrack_home: impl Into<PathBuf>) -> Result<Self> {
        let home = Home::new(fintrack_home).await?;
        Ok(Self { home })
    }

    pub fn home(&self) -> &Home {
        &self.home
    }

    /// Loads the transaction collection in its persisted (insertion) order.
    ///
    /// Returns an empty collection when no file exists yet or when the stored data cannot be
    /// read or parsed. Corruption is logged and never propagated.
    pub async fn load(&self) -> Vec<Transaction> {
        let path = self.home.transactions();
        if !path.is_file() {
            return Vec::new();
        }
        match utils::deserialize::<Vec<Transaction>>(path).await {
            Ok(transactions) => transactions,
            Err(e) => {
                warn!(
                    "Stored transactions could not be read, starting from an empty \
                     collection: {e:#}"
                );
                Vec::new()
            }
        }
    }

    /// Saves the whole transaction collection, replacing the previous file.
    pub async fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let data =
            serde_json::to_string(transactions).context("Unable to serialize transactions")?;
        utils::write(self.home.transactions(), data)
            .await
            .context("Unable to write the transactions file")
    }

    /// Loads the settings record, falling back to defaults when the file is missing or corrupt.
    pub async fn load_settings(&self) -> Settings {
        let path = self.home.settings();
        if !path.is_file() {
            return Settings::default();
        }
        match utils::deserialize::<Settings>(path).await {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Stored settings could not be read, using defaults: {e:#}");
                Settings::default()
            }
        }
    }

    /// Saves the settings record, replacing the previous file wholesale.
    pub async fn save_settings(&self, settings: &Settings) -> Result<()> {
        let data = serde_json::to_string(settings).context("Unable to serialize settings")?;
        utils::write(self.home.settings(), data)
            .await
            .context("Unable to write the settings file")
    }

    /// Removes all transactions. Settings are left untouched.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(self.home.transactions()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("Unable to remove the transactions file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn txn(description: &str, amount: &str) -> Transaction {
        Transaction::create(
            description,
            Amount::from_str(amount).unwrap(),
            "Food",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_load_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("home")).await.unwrap();
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_load_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("home")).await.unwrap();
        let txns = vec![txn("Morning coffee", "3.50"), txn("Afternoon tea", "2.10")];
        store.save(&txns).await.unwrap();
        assert_eq!(store.load().await, txns);
    }

    #[tokio::test]
    async fn test_corrupt_transactions_fall_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("home")).await.unwrap();
        tokio::fs::write(store.home().transactions(), "not json at all")
            .await
            .unwrap();
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("home")).await.unwrap();
        let mut settings = Settings::default();
        settings.set_budget_cap(Decimal::from(750)).unwrap();
        store.save_settings(&settings).await.unwrap();
        assert_eq!(store.load_settings().await, settings);
    }

    #[tokio::test]
    async fn test_corrupt_settings_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("home")).await.unwrap();
        tokio::fs::write(store.home().settings(), "{\"budget_cap\": [1,2]}")
            .await
            .unwrap();
        assert_eq!(store.load_settings().await, Settings::default());
    }

    #[tokio::test]
    async fn test_clear_removes_transactions_keeps_settings() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("home")).await.unwrap();
        let mut settings = Settings::default();
        settings.set_budget_cap(Decimal::from(100)).unwrap();
        store.save_settings(&settings).await.unwrap();
        store.save(&[txn("Morning coffee", "3.50")]).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.load().await.is_empty());
        assert_eq!(store.load_settings().await, settings);
    }

    #[tokio::test]
    async fn test_clear_when_nothing_stored_is_ok() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("home")).await.unwrap();
        assert!(store.clear().await.is_ok());
    }
}
