use std::sync::OnceLock;

use regex::Regex;

fn whitespace_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("invalid whitespace regex"))
}

fn invalid_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-z0-9-]+").expect("invalid character-class regex"))
}

fn hyphen_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"-{2,}").expect("invalid hyphen regex"))
}

fn numbered_suffix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"-\d+$").expect("invalid suffix regex"))
}

/// Normalize a project title into its canonical, filesystem-safe key.
///
/// Lowercases and trims the input, turns whitespace runs into single hyphens,
/// replaces any run of characters outside `[a-z0-9-]` with a single hyphen,
/// collapses repeated hyphens and strips hyphens from both ends. The result is
/// idempotent: normalizing an already-normalized key returns it unchanged.
///
/// An empty result means the input had no usable characters ("!!!", "  ");
/// write paths must reject such titles before touching the filesystem.
pub fn normalize_title(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = whitespace_run().replace_all(lowered.trim(), "-");
    let cleaned = invalid_run().replace_all(&hyphenated, "-");
    let collapsed = hyphen_run().replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

/// Strip one trailing `-<digits>` run from a normalized key.
///
/// Numbered duplicates ("harbour-masterplan-2") share the rendered assets of
/// their base name; candidate generation probes the stripped form after the
/// exact one.
pub fn strip_numbered_suffix(key: &str) -> &str {
    match numbered_suffix().find(key) {
        Some(found) => &key[..found.start()],
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_title, strip_numbered_suffix};

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(normalize_title("My  Project!!"), "my-project");
        assert_eq!(normalize_title("Harbour Masterplan"), "harbour-masterplan");
    }

    #[test]
    fn collapses_symbol_runs_into_single_hyphens() {
        assert_eq!(normalize_title("a / b & c"), "a-b-c");
        assert_eq!(normalize_title("Design—Review (v2)"), "design-review-v2");
    }

    #[test]
    fn replaces_underscores() {
        assert_eq!(normalize_title("bridge_study_final"), "bridge-study-final");
    }

    #[test]
    fn strips_leading_and_trailing_hyphens() {
        assert_eq!(normalize_title("--edge case--"), "edge-case");
        assert_eq!(normalize_title("  padded  "), "padded");
    }

    #[test]
    fn unusable_input_normalizes_to_empty() {
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("!!!"), "");
        assert_eq!(normalize_title("   "), "");
    }

    #[test]
    fn is_idempotent() {
        for input in ["My  Project!!", "a_b c-d", "--x--", "Już 2024", "plain"] {
            let once = normalize_title(input);
            assert_eq!(normalize_title(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn strips_numbered_suffixes() {
        assert_eq!(strip_numbered_suffix("project-2"), "project");
        assert_eq!(strip_numbered_suffix("project-10"), "project");
        assert_eq!(strip_numbered_suffix("project"), "project");
        assert_eq!(strip_numbered_suffix("mark-3-study"), "mark-3-study");
    }
}
