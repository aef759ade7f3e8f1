//! The `delete` command handler.

use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::{utils, Result, Store};
use anyhow::bail;

/// Deletes one transaction by ID.
///
/// Asks for confirmation naming the transaction's description unless `--yes` was given.
pub async fn delete(store: &Store, args: DeleteArgs) -> Result<Out<String>> {
    let mut transactions = store.load().await;
    let Some(position) = transactions.iter().position(|t| t.id() == args.id()) else {
        bail!("No transaction with ID: {}", args.id());
    };

    let description = transactions[position].description().to_string();
    if !args.yes() && !utils::confirm(&format!("Delete transaction \"{description}\"?"))? {
        return Ok(Out::new_message("Delete cancelled"));
    }

    let removed = transactions.remove(position);
    store.save(&transactions).await?;

    let message = format!("Deleted \"{}\" ({})", removed.description(), removed.id());
    Ok(Out::new(message, removed.id().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::AddArgs;
    use crate::commands::add;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_delete_removes_the_transaction() {
        let env = TestEnv::new().await;
        let added = add(
            env.store(),
            AddArgs::new("Morning coffee", "3.50", "Food", None),
        )
        .await
        .unwrap();
        let id = added.structure().unwrap().id().to_string();

        let out = delete(env.store(), DeleteArgs::new(&id, true)).await.unwrap();
        assert_eq!(out.structure(), Some(&id));
        assert!(env.store().load().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_an_error() {
        let env = TestEnv::new().await;
        let err = delete(env.store(), DeleteArgs::new("txn-missing", true))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No transaction with ID"));
    }

    #[tokio::test]
    async fn test_delete_keeps_the_rest_in_order() {
        let env = TestEnv::new().await;
        add(env.store(), AddArgs::new("First purchase", "1.00", "Misc", None))
            .await
            .unwrap();
        let second = add(
            env.store(),
            AddArgs::new("Second purchase", "2.00", "Misc", None),
        )
        .await
        .unwrap();
        add(env.store(), AddArgs::new("Third purchase", "3.00", "Misc", None))
            .await
            .unwrap();

        let id = second.structure().unwrap().id().to_string();
        delete(env.store(), DeleteArgs::new(&id, true)).await.unwrap();

        let stored = env.store().load().await;
        let names: Vec<_> = stored.iter().map(|t| t.description()).collect();
        assert_eq!(names, vec!["First purchase", "Third purchase"]);
    }
}
