#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod admin;
pub mod catalog;
pub mod config;
pub mod models;
pub mod naming;
pub mod store;

pub use catalog::resolve_project_items;
pub use config::{SiteConfig, StorageLayout};
pub use models::{AssetKind, ProjectItem, ProjectMetadata, ResolvedAsset};
pub use naming::{filename_variants, normalize_title};
