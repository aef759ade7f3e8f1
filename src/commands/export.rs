//! The `export` command handler.

use crate::args::ExportArgs;
use crate::commands::{today, Out};
use crate::{utils, Result, Store};
use anyhow::Context;
use std::path::PathBuf;

/// Writes every transaction to a pretty-printed JSON file.
///
/// The default file name carries the current date, e.g. `transactions-2025-06-15.json`. An
/// empty collection produces a notice and no file.
pub async fn export(store: &Store, args: ExportArgs) -> Result<Out<PathBuf>> {
    let transactions = store.load().await;
    if transactions.is_empty() {
        return Ok(Out::new_message("No transactions to export"));
    }

    let path = match args.out() {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!("transactions-{}.json", today())),
    };
    let data = serde_json::to_string_pretty(&transactions)
        .context("Unable to serialize transactions")?;
    utils::write(&path, data).await?;

    let message = format!(
        "Exported {} transaction(s) to {}",
        transactions.len(),
        path.display()
    );
    Ok(Out::new(message, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::AddArgs;
    use crate::commands::add;
    use crate::model::Transaction;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_export_empty_writes_nothing() {
        let env = TestEnv::new().await;
        let path = env.scratch_path("export.json");
        let out = export(env.store(), ExportArgs::new(Some(path.clone())))
            .await
            .unwrap();
        assert_eq!(out.message(), "No transactions to export");
        assert!(out.structure().is_none());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_export_writes_pretty_json_array() {
        let env = TestEnv::new().await;
        add(
            env.store(),
            AddArgs::new("Morning coffee", "3.50", "Food", None),
        )
        .await
        .unwrap();

        let path = env.scratch_path("export.json");
        let out = export(env.store(), ExportArgs::new(Some(path.clone())))
            .await
            .unwrap();
        assert_eq!(out.structure(), Some(&path));

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        // Pretty-printed, so multi-line
        assert!(content.contains('\n'));
        let read: Vec<Transaction> = serde_json::from_str(&content).unwrap();
        assert_eq!(read, env.store().load().await);
    }
}
