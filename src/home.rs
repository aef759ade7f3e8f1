use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;

/// The `Home` object represents the file paths of the `$FINTRACK_HOME` directory and the fixed
/// file names within it, such as `$FINTRACK_HOME/transactions.json`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Home {
    root: PathBuf,
    transactions: PathBuf,
    settings: PathBuf,
}

impl Home {
    /// This will create the `fintrack_home` directory, if it does not exist, and canonicalize
    /// itself.
    pub async fn new(fintrack_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = fintrack_home.into();
        make_dir(&maybe_relative)
            .await
            .context("Unable to create fintrack home directory")?;
        let root = fs::canonicalize(&maybe_relative).await.with_context(|| {
            format!(
                "Unable to canonicalize the path {}",
                maybe_relative.to_string_lossy()
            )
        })?;
        Ok(Self {
            transactions: root.join("transactions.json"),
            settings: root.join("settings.json"),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn transactions(&self) -> &Path {
        &self.transactions
    }

    pub fn settings(&self) -> &Path {
        &self.settings
    }
}

async fn make_dir(p: &Path) -> Result<()> {
    fs::create_dir_all(p)
        .await
        .with_context(|| format!("Unable to create directory at {}", p.to_string_lossy()))
}

#[tokio::test]
async fn test_home() {
    use tempfile::TempDir;
    let dir = TempDir::new().unwrap();
    let home_dir = dir.path().join("fintrack");
    let home = Home::new(home_dir).await.unwrap();
    assert!(fs::read_dir(home.root()).await.is_ok());
    assert!(home.transactions().ends_with("transactions.json"));
    assert!(home.settings().ends_with("settings.json"));
}
