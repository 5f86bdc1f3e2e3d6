use crate::config::AssetDirectory;

/// Full-size image extensions in probe order, most space-efficient and
/// ubiquitous first.
pub(crate) const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "avif"];

/// Thumbnail extensions in probe order. Admin-uploaded thumbnails were
/// historically saved as PNG, so it is probed first here.
pub(crate) const THUMBNAIL_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "avif"];

/// Probe for the first existing artifact file.
///
/// The nesting is the tie-break rule: every directory and extension is tried
/// for a variant before the next variant is considered, so an exact raw-name
/// match always beats a normalized-name match, and within one variant an
/// earlier directory beats a later one.
pub(crate) fn find_artifact<'a>(
    variants: &[String],
    directories: &[&'a AssetDirectory],
    extensions: &[&str],
) -> Option<(&'a AssetDirectory, String)> {
    for variant in variants {
        for directory in directories {
            for extension in extensions {
                let file_name = format!("{variant}.{extension}");
                if directory.join(&file_name).is_file() {
                    return Some((directory, file_name));
                }
            }
        }
    }
    None
}
