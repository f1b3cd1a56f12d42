//! # Domain
//!
//! Pure layout and aggregation engine: ignore filtering, folder
//! aggregation, circle packing and language tallies. Nothing in this
//! crate touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod filtering;
pub mod layout;
pub mod model;
pub mod rendering;

pub use analytics::{FolderAggregator, LanguageTally};
pub use config::{ColorPalette, GlobPattern, IgnorePattern, IgnoreSpec, LayoutConfig};
pub use filtering::PathFilter;
pub use layout::CirclePacker;
pub use model::{FilePlacement, FileRecord, FolderAggregate, FolderPlacement, LanguageCount, Report};
pub use rendering::{DiagramRenderer, embed_svg, language_table};

pub use repo_visualiser_shared_kernel::value_objects;
