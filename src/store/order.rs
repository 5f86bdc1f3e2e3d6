//! Persisted display order for the project list.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::store::write_json_atomic;

/// On-disk shape of the order store: `{ "order": ["Title", ...] }`.
#[derive(Debug, Default, Deserialize, Serialize)]
struct OrderFile {
    #[serde(default)]
    order: Vec<String>,
}

/// Load the persisted display order.
///
/// Missing, unreadable or malformed files degrade to an empty order, which the
/// merge treats as "keep natural filesystem order".
pub fn load_display_order(path: &Path) -> Vec<String> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str::<OrderFile>(&content)
        .map(|file| file.order)
        .unwrap_or_default()
}

/// Overwrite the persisted display order with the given titles.
pub fn save_display_order(path: &Path, titles: &[String]) -> Result<()> {
    write_json_atomic(path, &OrderFile {
        order: titles.to_vec(),
    })
}
