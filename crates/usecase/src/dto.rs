use repo_visualiser_domain::{ColorPalette, LayoutConfig};

/// Settings for one visualisation run.
#[derive(Debug, Clone)]
pub struct VisualiseOptions {
    pub layout: LayoutConfig,
    pub palette: ColorPalette,
    /// Prepend the built-in ignore list to the configured patterns.
    pub default_ignores: bool,
}

impl Default for VisualiseOptions {
    fn default() -> Self {
        Self { layout: LayoutConfig::default(), palette: ColorPalette::default(), default_ignores: true }
    }
}
