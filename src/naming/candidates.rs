use std::collections::BTreeSet;

use crate::naming::{normalize_title, strip_numbered_suffix};

/// Generate the ordered, de-duplicated set of filename stems to probe for a
/// project's rendered assets.
///
/// Historical uploads, the conversion tooling and manual admin uploads have
/// each written artifacts under slightly different rules, so resolution probes
/// several forms instead of requiring a migration of existing files. Order is
/// the priority order: an earlier variant always beats a later one.
pub fn filename_variants(base_name: &str, metadata_title: Option<&str>) -> Vec<String> {
    let mut builder = VariantBuilder::new();

    builder.push(base_name.to_string());

    let normalized = normalize_title(base_name);
    builder.push(normalized.clone());
    builder.push(strip_numbered_suffix(&normalized).to_string());

    if let Some(title) = metadata_title
        && title != base_name
    {
        builder.push(title.to_string());
        builder.push(normalize_title(title));
    }

    builder.finish()
}

struct VariantBuilder {
    seen: BTreeSet<String>,
    result: Vec<String>,
}

impl VariantBuilder {
    fn new() -> Self {
        Self {
            seen: BTreeSet::new(),
            result: Vec::new(),
        }
    }

    fn push(&mut self, variant: String) {
        if variant.is_empty() {
            return;
        }
        if self.seen.insert(variant.clone()) {
            self.result.push(variant);
        }
    }

    fn finish(self) -> Vec<String> {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::filename_variants;

    #[test]
    fn raw_base_name_comes_first() {
        let variants = filename_variants("Harbour Masterplan", None);
        assert_eq!(variants, vec![
            "Harbour Masterplan".to_string(),
            "harbour-masterplan".to_string(),
        ]);
    }

    #[test]
    fn already_normalized_names_collapse_to_one_variant() {
        assert_eq!(filename_variants("bridge-study", None), vec![
            "bridge-study".to_string()
        ]);
    }

    #[test]
    fn numbered_duplicates_probe_the_stripped_stem() {
        let variants = filename_variants("Bridge Study 2", None);
        assert_eq!(variants, vec![
            "Bridge Study 2".to_string(),
            "bridge-study-2".to_string(),
            "bridge-study".to_string(),
        ]);
    }

    #[test]
    fn differing_metadata_title_contributes_variants() {
        let variants = filename_variants("scan-0042", Some("Harbour Masterplan"));
        assert_eq!(variants, vec![
            "scan-0042".to_string(),
            "scan".to_string(),
            "Harbour Masterplan".to_string(),
            "harbour-masterplan".to_string(),
        ]);
    }

    #[test]
    fn matching_metadata_title_adds_nothing() {
        let variants = filename_variants("Bridge Study", Some("Bridge Study"));
        assert_eq!(variants, vec![
            "Bridge Study".to_string(),
            "bridge-study".to_string(),
        ]);
    }

    #[test]
    fn unusable_base_name_keeps_the_raw_variant_but_no_normalized_one() {
        assert_eq!(filename_variants("!!!", None), vec!["!!!".to_string()]);
        assert_eq!(filename_variants("!!!", Some("Real Title")), vec![
            "!!!".to_string(),
            "Real Title".to_string(),
            "real-title".to_string(),
        ]);
    }
}
