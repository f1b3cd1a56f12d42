// crates/infra/src/config_file.rs
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use repo_visualiser_domain::{IgnoreSpec, LayoutConfig};
use repo_visualiser_ports::config::IgnoreSpecSource;
use repo_visualiser_shared_kernel::{ErrorContext, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::persistence::FileReader;

/// File names looked up in the scanned root, in priority order.
pub const DISCOVERED_CONFIG_FILES: &[&str] =
    &[".repo-visualiser.json", ".repo-visualiser.yaml", ".repo-visualiser.yml", "ignore.json"];

/// On-disk configuration. `{"ignore": [...]}` alone is a valid file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub ignore: Vec<String>,
    pub layout: LayoutConfig,
    pub colors: BTreeMap<String, String>,
}

/// Loads a [`ConfigFile`] from an explicit or discovered location.
#[derive(Debug, Clone)]
pub struct ConfigFileLoader {
    path: Option<PathBuf>,
}

impl ConfigFileLoader {
    /// Loader for a file the user named; a missing file is an error.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    /// Loader for the first well-known config file under `root`, if any.
    pub fn discover(root: &Path) -> Self {
        let dir = if root.is_dir() { root } else { root.parent().unwrap_or(Path::new(".")) };
        let path = DISCOVERED_CONFIG_FILES.iter().map(|name| dir.join(name)).find(|p| p.is_file());
        if let Some(found) = &path {
            debug!(path = %found.display(), "discovered config file");
        }
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let Some(path) = &self.path else {
            return Ok(ConfigFile::default());
        };
        let text = FileReader::read_to_string(path)?;
        let config = parse(path, &text).with_context(|| format!("parsing {}", path.display()))?;
        config
            .layout
            .validate()
            .with_context(|| format!("validating layout in {}", path.display()))?;
        Ok(config)
    }
}

impl IgnoreSpecSource for ConfigFile {
    fn load_ignore_spec(&self) -> Result<IgnoreSpec> {
        Ok(IgnoreSpec::new(&self.ignore))
    }
}

fn parse(path: &Path, text: &str) -> Result<ConfigFile> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "yaml" | "yml" => parse_yaml(text),
        _ => Ok(serde_json::from_str(text)?),
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(text: &str) -> Result<ConfigFile> {
    // an empty YAML document deserialises as unit, not as a map
    if text.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_text: &str) -> Result<ConfigFile> {
    Err(repo_visualiser_shared_kernel::InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: "built without the `yaml` feature".to_string(),
    }
    .into())
}
