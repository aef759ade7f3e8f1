//! The `add` command handler.

use crate::args::AddArgs;
use crate::commands::{accept, today, Out};
use crate::model::{Transaction, TransactionDraft};
use crate::{Result, Store};
use chrono::Utc;

/// Records a new transaction.
///
/// The raw argument strings are validated as a draft; a rejected draft returns an error that
/// lists one message per bad field. On success the transaction gets a generated ID and
/// timestamps, is appended to the collection, and the collection is saved before the result is
/// reported.
pub async fn add(store: &Store, args: AddArgs) -> Result<Out<Transaction>> {
    let today = today();
    let draft = TransactionDraft::new(
        args.description(),
        args.amount(),
        args.category(),
        args.date()
            .map(str::to_string)
            .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
    );
    let accepted = accept(&draft, today)?;

    let transaction = Transaction::create(
        accepted.description,
        accepted.amount,
        accepted.category,
        accepted.date,
        Utc::now(),
    );

    let mut transactions = store.load().await;
    transactions.push(transaction.clone());
    store.save(&transactions).await?;

    let message = format!(
        "Added \"{}\" ({}) with ID: {}",
        transaction.description(),
        transaction.amount(),
        transaction.id()
    );
    Ok(Out::new(message, transaction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_add_persists_the_transaction() {
        let env = TestEnv::new().await;
        let args = AddArgs::new("Morning coffee", "3.50", "Food", None);
        let out = add(env.store(), args).await.unwrap();

        let stored = env.store().load().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].description(), "Morning coffee");
        assert_eq!(stored[0], *out.structure().unwrap());
    }

    #[tokio::test]
    async fn test_add_defaults_date_to_today() {
        let env = TestEnv::new().await;
        let args = AddArgs::new("Morning coffee", "3.50", "Food", None);
        let out = add(env.store(), args).await.unwrap();
        assert_eq!(out.structure().unwrap().date(), today());
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_draft_and_persists_nothing() {
        let env = TestEnv::new().await;
        let args = AddArgs::new("coffee coffee", "3.50", "Food", None);
        let err = add(env.store(), args).await.unwrap_err();
        assert!(err.to_string().contains("Duplicate words detected"));
        assert!(env.store().load().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_appends_in_insertion_order() {
        let env = TestEnv::new().await;
        add(env.store(), AddArgs::new("First purchase", "1.00", "Misc", None))
            .await
            .unwrap();
        add(env.store(), AddArgs::new("Second purchase", "2.00", "Misc", None))
            .await
            .unwrap();
        let stored = env.store().load().await;
        let names: Vec<_> = stored.iter().map(|t| t.description()).collect();
        assert_eq!(names, vec!["First purchase", "Second purchase"]);
    }
}
