pub mod glob_pattern;
pub mod ignore_spec;
pub mod layout;
pub mod palette;

pub use glob_pattern::GlobPattern;
pub use ignore_spec::{DEFAULT_IGNORE_PATTERNS, IgnorePattern, IgnoreSpec};
pub use layout::LayoutConfig;
pub use palette::ColorPalette;
