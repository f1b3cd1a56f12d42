pub mod value_objects;

pub use value_objects::{ColorPalette, GlobPattern, IgnorePattern, IgnoreSpec, LayoutConfig};
