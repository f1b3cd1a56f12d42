// crates/ports/src/config.rs
use repo_visualiser_domain::IgnoreSpec;
use repo_visualiser_shared_kernel::Result;

/// Port supplying user-configured ignore patterns.
pub trait IgnoreSpecSource: Send + Sync {
    fn load_ignore_spec(&self) -> Result<IgnoreSpec>;
}

/// A fixed pattern list, e.g. from the command line.
#[derive(Debug, Clone, Default)]
pub struct StaticIgnoreSpec {
    patterns: Vec<String>,
}

impl StaticIgnoreSpec {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }
}

impl IgnoreSpecSource for StaticIgnoreSpec {
    fn load_ignore_spec(&self) -> Result<IgnoreSpec> {
        Ok(IgnoreSpec::new(&self.patterns))
    }
}
