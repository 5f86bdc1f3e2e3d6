//! Site configuration describing where documents, rendered artifacts and the
//! flat-file stores live.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "portfolio.config.json";

/// Discoverable configuration for the on-disk layout of the site.
///
/// All directory and file values are interpreted relative to the site root.
/// Directories under `public_root` are served at the matching URL path, so
/// `public/projects-jpg` is reachable as `/projects-jpg`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Directory holding the uploaded project PDFs.
    pub documents_dir: String,
    /// Directory holding full-size rendered images.
    pub images_dir: String,
    /// Directory holding admin-uploaded thumbnails.
    pub thumbnails_dir: String,
    /// Older thumbnail directory still probed as a fallback.
    pub legacy_thumbnails_dir: String,
    /// JSON file holding per-project title/subtitle overrides.
    pub metadata_file: String,
    /// JSON file holding the display-order list.
    pub order_file: String,
    /// Directory whose contents are served at the site's URL root.
    pub public_root: String,
    /// URL prefix the whole site is mounted under, usually empty.
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            documents_dir: "public/projects".into(),
            images_dir: "public/projects-jpg".into(),
            thumbnails_dir: "public/projects-thumbnails".into(),
            legacy_thumbnails_dir: "public/thumbnails".into(),
            metadata_file: "src/content/data/projects-metadata.json".into(),
            order_file: "src/content/data/projects-order.json".into(),
            public_root: "public".into(),
            base_path: String::new(),
        }
    }
}

impl SiteConfig {
    /// Attempt to load configuration from the provided site root.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so callers can continue with the layout the
    /// original site shipped with.
    pub fn discover(site_root: &Path) -> Self {
        let candidate = site_root.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Resolve the configuration against a site root into absolute paths.
    pub fn into_layout(self, site_root: &Path) -> StorageLayout {
        let directory = |dir: &str| {
            AssetDirectory::new(
                site_root.join(dir),
                format!("{}{}", self.base_path, public_prefix(&self.public_root, dir)),
            )
        };

        StorageLayout {
            documents: directory(&self.documents_dir),
            images: directory(&self.images_dir),
            thumbnails: directory(&self.thumbnails_dir),
            legacy_thumbnails: directory(&self.legacy_thumbnails_dir),
            metadata_file: site_root.join(&self.metadata_file),
            order_file: site_root.join(&self.order_file),
        }
    }
}

/// Derive the URL path a configured directory is served under.
///
/// A directory that is the public root itself serves files at the URL root,
/// so its prefix is empty rather than `/`.
fn public_prefix(public_root: &str, dir: &str) -> String {
    let relative = dir
        .strip_prefix(public_root)
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        .unwrap_or(dir)
        .trim_start_matches('/');
    if relative.is_empty() {
        String::new()
    } else {
        format!("/{relative}")
    }
}

/// One probed directory: its filesystem root plus the URL prefix its files are
/// served under (base path included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDirectory {
    root: PathBuf,
    href_prefix: String,
}

impl AssetDirectory {
    /// Build a directory handle from a filesystem root and its URL prefix.
    pub fn new(root: PathBuf, href_prefix: String) -> Self {
        Self { root, href_prefix }
    }

    /// Filesystem root of the directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path of a file inside the directory.
    pub fn join(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Public URL of a file inside the directory.
    pub fn href_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.href_prefix, file_name)
    }
}

/// Absolute filesystem layout the resolver and stores operate on.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    /// Uploaded project PDFs; the canonical list of which projects exist.
    pub documents: AssetDirectory,
    /// Full-size rendered images.
    pub images: AssetDirectory,
    /// Admin-uploaded thumbnails; probed before the legacy directory.
    pub thumbnails: AssetDirectory,
    /// Legacy thumbnail directory kept for files that were never migrated.
    pub legacy_thumbnails: AssetDirectory,
    /// Metadata store location.
    pub metadata_file: PathBuf,
    /// Order store location.
    pub order_file: PathBuf,
}
