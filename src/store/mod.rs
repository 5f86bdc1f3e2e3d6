//! Flat-file stores for display metadata and ordering.
//!
//! Reads degrade to empty defaults so a missing or damaged store never takes
//! the read path down. Writes report failures to the caller and go through a
//! write-temp-then-rename step so an interrupted write cannot leave a
//! truncated file behind. There is no locking: the stores assume a single
//! administrative writer and last-write-wins.

pub mod metadata;
pub mod order;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize `value` as pretty JSON and atomically replace `path` with it.
///
/// The payload is written to a sibling temp file first and renamed into place,
/// which is atomic on the same filesystem.
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let payload = serde_json::to_string_pretty(value).context("failed to serialize store JSON")?;

    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = Path::new(&temp);

    fs::write(temp, payload).with_context(|| format!("failed to write {}", temp.display()))?;
    fs::rename(temp, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
