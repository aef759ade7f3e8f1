//! The `import` command handler.

use crate::args::ImportArgs;
use crate::commands::Out;
use crate::model::Transaction;
use crate::{utils, Result, Store};
use anyhow::{bail, Context};

/// Replaces the whole transaction collection with the contents of a JSON export file.
///
/// The file must contain a JSON array of transactions; anything else is rejected before any
/// data changes. The replacement is confirmed with the record count unless `--yes` was given,
/// and is saved in full before the result is reported, so no partial state is ever observable.
/// Imported records are trusted round-trip data and are not re-validated field by field.
pub async fn import(store: &Store, args: ImportArgs) -> Result<Out<usize>> {
    let content = utils::read(args.file()).await?;
    let value: serde_json::Value = serde_json::from_str(&content).with_context(|| {
        format!("The file {} is not valid JSON", args.file().display())
    })?;
    if !value.is_array() {
        bail!(
            "The file {} must contain a JSON array of transactions",
            args.file().display()
        );
    }
    let transactions: Vec<Transaction> = serde_json::from_value(value).with_context(|| {
        format!(
            "The file {} does not look like a fintrack export",
            args.file().display()
        )
    })?;

    let count = transactions.len();
    if !args.yes()
        && !utils::confirm(&format!(
            "Import {count} transaction(s)? This will replace all current data."
        ))?
    {
        return Ok(Out::new_message("Import cancelled"));
    }

    store.save(&transactions).await?;
    Ok(Out::new(format!("Imported {count} transaction(s)"), count))
}
