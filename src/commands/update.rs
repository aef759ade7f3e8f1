//! The `update` command handler.

use crate::args::UpdateArgs;
use crate::commands::{accept, today, Out};
use crate::model::{Transaction, TransactionDraft};
use crate::{Result, Store};
use anyhow::bail;
use chrono::Utc;

/// Changes the fields of an existing transaction.
///
/// Fields not given on the command line keep their current values. The merged draft goes
/// through the same validation as `add`, so an update can never make a stored transaction
/// invalid. On success `updated_at` is bumped and the collection is saved.
pub async fn update(store: &Store, args: UpdateArgs) -> Result<Out<Transaction>> {
    let mut transactions = store.load().await;
    let Some(position) = transactions.iter().position(|t| t.id() == args.id()) else {
        bail!("No transaction with ID: {}", args.id());
    };
    let existing = &transactions[position];

    let draft = TransactionDraft::new(
        args.description().unwrap_or(existing.description()),
        args.amount()
            .map(str::to_string)
            .unwrap_or_else(|| existing.amount().plain()),
        args.category().unwrap_or(existing.category()),
        args.date()
            .map(str::to_string)
            .unwrap_or_else(|| existing.date().format("%Y-%m-%d").to_string()),
    );
    let accepted = accept(&draft, today())?;

    let updated = existing.update(
        accepted.description,
        accepted.amount,
        accepted.category,
        accepted.date,
        Utc::now(),
    );
    transactions[position] = updated.clone();
    store.save(&transactions).await?;

    let message = format!("Updated transaction {}", updated.id());
    Ok(Out::new(message, updated))
}
