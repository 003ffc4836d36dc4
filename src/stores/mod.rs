//! # Persisted Stores
//!
//! JSON file backed state. Each store owns exactly one file and is its only
//! writer.
//!
//! - `phrases` - user-submitted teasing phrases, read-modify-write per call
//! - `stats` - tease counters, authoritative in memory, snapshot on every change

pub mod phrases;
pub mod stats;

pub use phrases::{CustomPhrase, CustomPhraseStore, PhraseRejection, MIN_PHRASE_LENGTH};
pub use stats::StatsStore;

use anyhow::Result;
use log::debug;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Create the parent directory of `path` when it is missing.
async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !tokio::fs::try_exists(parent).await? {
            debug!("Creating data directory {}", parent.display());
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

/// Write `value` as pretty JSON, replacing the whole file. The body goes to a
/// sibling temp file first and is renamed into place, so readers never see a
/// partial file. Callers serialise writes to the same path.
async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path).await?;
    let body = serde_json::to_string_pretty(value)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, body).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
