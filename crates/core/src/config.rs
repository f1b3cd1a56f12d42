// crates/core/src/config.rs
use std::path::PathBuf;

use repo_visualiser_infra::ConfigFileLoader;
use repo_visualiser_ports::filesystem::SourcePlan;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_OUTPUT;

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunConfig {
    pub root: PathBuf,
    /// Explicit config file; when absent a well-known file under `root` is used if present.
    pub config_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Markdown run-summary file to append to.
    pub summary: Option<PathBuf>,
    pub stdout: bool,
    pub default_ignores: bool,
    pub ignore: Vec<String>,
    pub respect_gitignore: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            config_file: None,
            output: None,
            summary: None,
            stdout: false,
            default_ignores: true,
            ignore: Vec::new(),
            respect_gitignore: false,
        }
    }
}

impl RunConfig {
    pub fn source_plan(&self) -> SourcePlan {
        SourcePlan { respect_gitignore: self.respect_gitignore, ..SourcePlan::new(&self.root) }
    }

    pub fn config_loader(&self) -> ConfigFileLoader {
        match &self.config_file {
            Some(path) => ConfigFileLoader::explicit(path),
            None => ConfigFileLoader::discover(&self.root),
        }
    }

    /// Where the SVG file goes. Printing to stdout alone suppresses the default file.
    pub fn output_path(&self) -> Option<PathBuf> {
        match (&self.output, self.stdout) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => None,
            (None, false) => Some(PathBuf::from(DEFAULT_OUTPUT)),
        }
    }
}
