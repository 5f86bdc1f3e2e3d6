//! Per-project title/subtitle overrides stored as a single JSON object.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::models::ProjectMetadata;
use crate::naming::normalize_title;
use crate::store::write_json_atomic;

/// Full contents of the metadata store, keyed by base name or normalized key.
pub type ProjectMetadataMap = BTreeMap<String, ProjectMetadata>;

/// Load the metadata store, degrading to an empty map when the file is
/// missing or unreadable. A damaged store must never break the read path.
pub fn load_metadata(path: &Path) -> ProjectMetadataMap {
    let Ok(content) = fs::read_to_string(path) else {
        return ProjectMetadataMap::new();
    };
    serde_json::from_str(&content).unwrap_or_default()
}

/// Look up the record for a document, trying the raw base name before the
/// normalized key. Records may have been saved under either form.
pub fn lookup<'a>(map: &'a ProjectMetadataMap, base_name: &str) -> Option<&'a ProjectMetadata> {
    if let Some(meta) = map.get(base_name) {
        return Some(meta);
    }
    map.get(&normalize_title(base_name))
}

/// Patch a single record, read-modify-write.
///
/// `Some` fields of the patch overwrite the stored value; `None` fields leave
/// it untouched, so setting a subtitle does not clear an existing title.
pub fn set_project_metadata(path: &Path, key: &str, patch: &ProjectMetadata) -> Result<()> {
    let mut map = load_metadata(path);
    let entry = map.entry(key.to_string()).or_default();
    if let Some(title) = &patch.title {
        entry.title = Some(title.clone());
    }
    if let Some(subtitle) = &patch.subtitle {
        entry.subtitle = Some(subtitle.clone());
    }
    save_metadata(path, &map)
}

/// Overwrite the whole store.
pub fn save_metadata(path: &Path, map: &ProjectMetadataMap) -> Result<()> {
    write_json_atomic(path, map)
}
