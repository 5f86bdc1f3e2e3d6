//! Write-side operations behind the admin panel: storing uploads, replacing
//! thumbnails and deleting projects.
//!
//! Unlike the read path, failures here propagate to the caller so the admin
//! can be told what went wrong. Invalid titles are rejected before any I/O.
//! Rendering an uploaded PDF into an image happens out-of-band; until that
//! process finishes, resolution serves the PDF-kind fallback.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::catalog::{IMAGE_EXTENSIONS, THUMBNAIL_EXTENSIONS, find_artifact};
use crate::config::StorageLayout;
use crate::naming::{filename_variants, normalize_title};

/// Store an uploaded project PDF under its original file name.
///
/// The file name must end in `.pdf` (any case), contain no path separators,
/// and have a stem that normalizes to a usable key; otherwise the upload is
/// rejected before anything touches the filesystem.
pub fn store_document(layout: &StorageLayout, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    if file_name.contains(['/', '\\']) {
        bail!("invalid document name {file_name:?}: path separators are not allowed");
    }

    let Some(base_name) = strip_pdf_extension(file_name) else {
        bail!("invalid document name {file_name:?}: only PDF files are allowed");
    };
    if normalize_title(base_name).is_empty() {
        bail!("invalid title {base_name:?}: nothing usable remains after normalization");
    }

    fs::create_dir_all(layout.documents.root()).with_context(|| {
        format!(
            "failed to create document directory {}",
            layout.documents.root().display()
        )
    })?;

    let path = layout.documents.join(file_name);
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Replace the custom thumbnail for a project title.
///
/// Any thumbnail already stored under any candidate variant of the title is
/// removed first, then the new file is written under the normalized title.
/// That normalized name is the durable contract future lookups rely on.
pub fn replace_thumbnail(
    layout: &StorageLayout,
    title: &str,
    extension: &str,
    bytes: &[u8],
) -> Result<PathBuf> {
    let extension = extension.trim_start_matches('.').to_lowercase();
    if !THUMBNAIL_EXTENSIONS.contains(&extension.as_str()) {
        bail!("invalid thumbnail extension {extension:?}: expected one of {THUMBNAIL_EXTENSIONS:?}");
    }

    let key = normalize_title(title);
    if key.is_empty() {
        bail!("invalid title {title:?}: nothing usable remains after normalization");
    }

    fs::create_dir_all(layout.thumbnails.root()).with_context(|| {
        format!(
            "failed to create thumbnail directory {}",
            layout.thumbnails.root().display()
        )
    })?;

    for variant in filename_variants(title, None) {
        for known in THUMBNAIL_EXTENSIONS {
            let existing = layout.thumbnails.join(&format!("{variant}.{known}"));
            if existing.is_file() {
                fs::remove_file(&existing)
                    .with_context(|| format!("failed to remove {}", existing.display()))?;
            }
        }
    }

    let path = layout.thumbnails.join(&format!("{key}.{extension}"));
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Delete a project: its PDF plus the first matching derived image and
/// thumbnail, found with the same candidate probing resolution uses.
///
/// A document that is already gone is not an error; removing leftovers of a
/// half-deleted project must stay possible.
pub fn delete_project(layout: &StorageLayout, base_name: &str) -> Result<()> {
    let pdf = layout.documents.join(&format!("{base_name}.pdf"));
    if pdf.is_file() {
        fs::remove_file(&pdf).with_context(|| format!("failed to remove {}", pdf.display()))?;
    }

    let variants = filename_variants(base_name, None);

    if let Some((directory, file_name)) =
        find_artifact(&variants, &[&layout.images], &IMAGE_EXTENSIONS)
    {
        let path = directory.join(&file_name);
        fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))?;
    }

    if let Some((directory, file_name)) = find_artifact(
        &variants,
        &[&layout.thumbnails, &layout.legacy_thumbnails],
        &THUMBNAIL_EXTENSIONS,
    ) {
        let path = directory.join(&file_name);
        fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))?;
    }

    Ok(())
}

fn strip_pdf_extension(file_name: &str) -> Option<&str> {
    let stem_len = file_name
        .len()
        .checked_sub(".pdf".len())
        .filter(|&len| file_name.is_char_boundary(len))?;
    file_name[stem_len..]
        .eq_ignore_ascii_case(".pdf")
        .then(|| &file_name[..stem_len])
        .filter(|stem| !stem.is_empty())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::{TempDir, tempdir};

    use super::*;
    use crate::config::SiteConfig;

    fn layout(temp: &TempDir) -> StorageLayout {
        SiteConfig::default().into_layout(temp.path())
    }

    fn write(temp: &TempDir, relative: &str, content: &[u8]) {
        let path = temp.path().join(relative);
        fs::create_dir_all(path.parent().unwrap_or(Path::new("/"))).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn stores_documents_under_their_original_name() {
        let temp = tempdir().unwrap();
        let path = store_document(&layout(&temp), "My Project.pdf", b"%PDF").unwrap();

        assert_eq!(path, temp.path().join("public/projects/My Project.pdf"));
        assert_eq!(fs::read(path).unwrap(), b"%PDF");
    }

    #[test]
    fn rejects_bad_document_names_before_touching_disk() {
        let temp = tempdir().unwrap();
        let layout = layout(&temp);

        assert!(store_document(&layout, "notes.txt", b"x").is_err());
        assert!(store_document(&layout, ".pdf", b"x").is_err());
        assert!(store_document(&layout, "!!!.pdf", b"x").is_err());
        assert!(store_document(&layout, "../escape.pdf", b"x").is_err());
        assert!(!temp.path().join("public/projects").exists());
    }

    #[test]
    fn replacing_a_thumbnail_removes_every_variant_first() {
        let temp = tempdir().unwrap();
        write(&temp, "public/projects-thumbnails/My Project.png", b"old-raw");
        write(&temp, "public/projects-thumbnails/my-project.jpg", b"old-jpg");

        let path = replace_thumbnail(&layout(&temp), "My Project", "webp", b"new").unwrap();

        assert_eq!(
            path,
            temp.path().join("public/projects-thumbnails/my-project.webp")
        );
        assert!(!temp
            .path()
            .join("public/projects-thumbnails/My Project.png")
            .exists());
        assert!(!temp
            .path()
            .join("public/projects-thumbnails/my-project.jpg")
            .exists());
        assert_eq!(fs::read(path).unwrap(), b"new");
    }

    #[test]
    fn rejects_unknown_thumbnail_extensions_and_unusable_titles() {
        let temp = tempdir().unwrap();
        let layout = layout(&temp);

        assert!(replace_thumbnail(&layout, "Bridge", "gif", b"x").is_err());
        assert!(replace_thumbnail(&layout, "!!!", "png", b"x").is_err());
        assert!(replace_thumbnail(&layout, "Bridge", ".PNG", b"x").is_ok());
    }

    #[test]
    fn deleting_a_project_removes_document_image_and_thumbnail() {
        let temp = tempdir().unwrap();
        write(&temp, "public/projects/My Project.pdf", b"%PDF");
        write(&temp, "public/projects-jpg/my-project.jpg", b"img");
        write(&temp, "public/thumbnails/my-project.png", b"thumb");

        delete_project(&layout(&temp), "My Project").unwrap();

        assert!(!temp.path().join("public/projects/My Project.pdf").exists());
        assert!(!temp.path().join("public/projects-jpg/my-project.jpg").exists());
        assert!(!temp.path().join("public/thumbnails/my-project.png").exists());
    }

    #[test]
    fn deleting_an_absent_project_is_not_an_error() {
        let temp = tempdir().unwrap();
        assert!(delete_project(&layout(&temp), "Never Uploaded").is_ok());
    }
}
