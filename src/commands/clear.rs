//! The `clear` command handler.

use crate::args::ClearArgs;
use crate::commands::Out;
use crate::{utils, Result, Store};

/// Deletes every transaction after confirmation. The settings record survives.
pub async fn clear(store: &Store, args: ClearArgs) -> Result<Out<usize>> {
    let count = store.load().await.len();
    if !args.yes()
        && !utils::confirm(
            "Are you sure you want to delete ALL transactions? This cannot be undone.",
        )?
    {
        return Ok(Out::new_message("Clear cancelled"));
    }

    store.clear().await?;
    Ok(Out::new(
        format!("All transactions deleted ({count} removed)"),
        count,
    ))
}
