//! Naming rules shared by the read and write paths.
//!
//! The normalizer defines the canonical on-disk key for a project title; the
//! candidate generator expands a base name into every filename form the upload
//! pipeline, the conversion tooling or a manual admin upload may have produced.
//! Both sides of the pipeline must agree on these rules: a file written under a
//! normalized name is only findable if later lookups reproduce the identical
//! transformation.

mod candidates;
mod normalize;

pub use candidates::filename_variants;
pub use normalize::{normalize_title, strip_numbered_suffix};
