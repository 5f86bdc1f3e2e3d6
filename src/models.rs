//! Data structures produced and consumed by the resolution pipeline.

use serde::{Deserialize, Serialize};

/// What a resolved asset path actually points at.
///
/// A project with no rendered image yet falls back to its own PDF, and whether
/// a PDF is renderable in an image slot depends on the caller (browser vs.
/// native shell). The tag makes that decision explicit instead of leaving
/// callers to sniff the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// A rendered raster image (jpg, png, webp, avif, ...).
    Raster,
    /// The source PDF standing in for a missing rendered artifact.
    Pdf,
}

/// A resolved asset reference: the public URL plus what it points at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolvedAsset {
    /// Public URL path, including the configured base path.
    pub href: String,
    /// Kind of resource the URL resolves to.
    pub kind: AssetKind,
}

/// Fully assembled display record for one project document.
///
/// Built fresh on every resolution call from the current filesystem state plus
/// the metadata and order stores; never persisted. `image` and `thumbnail` are
/// always populated: a missing rendered image falls back to the document
/// itself, and a missing thumbnail falls back to the resolved image.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    /// Display name; the document's base name unless metadata overrides it.
    pub title: String,
    /// Optional subtitle supplied by metadata.
    pub subtitle: Option<String>,
    /// Public URL of the source PDF.
    pub document_href: String,
    /// Best available full-size image.
    pub image: ResolvedAsset,
    /// Best available small preview.
    pub thumbnail: ResolvedAsset,
}

/// Per-project overrides stored in the metadata file.
///
/// Keyed by the document's base name or its normalized key. `None` fields mean
/// "no override"; when patching a record, absent fields leave the stored value
/// untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectMetadata {
    /// Display title override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Subtitle shown under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// One uploaded PDF as enumerated from the document directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// File name without the `.pdf` extension, as originally uploaded.
    pub base_name: String,
    /// Full file name within the document directory.
    pub file_name: String,
}
