// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use repo_visualiser_domain::FileRecord;
use repo_visualiser_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters controlling source traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePlan {
    pub root: PathBuf,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
}

impl SourcePlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            respect_gitignore: false,
            include_hidden: true,
            follow_links: false,
            max_depth: None,
        }
    }
}

/// Port producing counted, classified file records for a source tree.
///
/// Implementations must return records in a reproducible order.
pub trait FileSource: Send + Sync {
    fn collect(&self, plan: &SourcePlan) -> Result<Vec<FileRecord>>;
}
