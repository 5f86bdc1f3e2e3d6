//! Read-side resolution: enumerate uploaded documents and assemble
//! display-ready project items from whatever artifacts exist on disk.
//!
//! The resolver is stateless and re-scans the filesystem on every call, so it
//! always reflects the current state without any cache invalidation. Document
//! counts are expected in the tens, which keeps the repeated probing cheap.
//! Read-path failures degrade rather than propagate: a missing directory or a
//! damaged store is rendered as an empty or partially styled list, never an
//! error.

mod ordering;
mod probe;

use std::fs;

use crate::config::{AssetDirectory, StorageLayout};
use crate::models::{AssetKind, ProjectItem, ResolvedAsset, SourceDocument};
use crate::naming::filename_variants;
use crate::store::metadata::{self, ProjectMetadataMap};
use crate::store::order;

pub use ordering::apply_display_order;
pub(crate) use probe::{IMAGE_EXTENSIONS, THUMBNAIL_EXTENSIONS, find_artifact};

/// Resolve every uploaded document into a display-ready item, metadata
/// applied and display order merged in.
pub fn resolve_project_items(layout: &StorageLayout) -> Vec<ProjectItem> {
    let documents = enumerate_documents(&layout.documents);
    let metadata = metadata::load_metadata(&layout.metadata_file);

    let items = documents
        .iter()
        .map(|document| resolve_item(document, &metadata, layout))
        .collect();

    let display_order = order::load_display_order(&layout.order_file);
    apply_display_order(items, &display_order)
}

/// List the uploaded PDF documents, sorted by file name.
///
/// A missing or unreadable document directory means "no projects yet" and
/// yields an empty list.
pub fn enumerate_documents(documents: &AssetDirectory) -> Vec<SourceDocument> {
    let Ok(entries) = fs::read_dir(documents.root()) else {
        return Vec::new();
    };

    let mut found: Vec<SourceDocument> = entries
        .flatten()
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_file()))
        .filter_map(|entry| {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let stem_len = file_name
                .len()
                .checked_sub(".pdf".len())
                .filter(|&len| file_name.is_char_boundary(len))?;
            if !file_name[stem_len..].eq_ignore_ascii_case(".pdf") {
                return None;
            }
            Some(SourceDocument {
                base_name: file_name[..stem_len].to_string(),
                file_name,
            })
        })
        .collect();

    found.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    found
}

/// Resolve one document against the current filesystem state.
fn resolve_item(
    document: &SourceDocument,
    metadata: &ProjectMetadataMap,
    layout: &StorageLayout,
) -> ProjectItem {
    let meta = metadata::lookup(metadata, &document.base_name);
    let meta_title = meta
        .and_then(|meta| meta.title.as_deref())
        .filter(|title| !title.is_empty());

    let variants = filename_variants(&document.base_name, meta_title);
    let document_href = layout.documents.href_for(&document.file_name);

    // Full-size image, falling back to the PDF itself.
    let image = match find_artifact(&variants, &[&layout.images], &IMAGE_EXTENSIONS) {
        Some((directory, file_name)) => ResolvedAsset {
            href: directory.href_for(&file_name),
            kind: AssetKind::Raster,
        },
        None => ResolvedAsset {
            href: document_href.clone(),
            kind: AssetKind::Pdf,
        },
    };

    // Thumbnail: custom uploads first, then the legacy directory, then
    // whatever the image slot resolved to.
    let thumbnail = match find_artifact(
        &variants,
        &[&layout.thumbnails, &layout.legacy_thumbnails],
        &THUMBNAIL_EXTENSIONS,
    ) {
        Some((directory, file_name)) => ResolvedAsset {
            href: directory.href_for(&file_name),
            kind: AssetKind::Raster,
        },
        None => image.clone(),
    };

    ProjectItem {
        title: meta_title.unwrap_or(&document.base_name).to_string(),
        subtitle: meta.and_then(|meta| meta.subtitle.clone()),
        document_href,
        image,
        thumbnail,
    }
}
