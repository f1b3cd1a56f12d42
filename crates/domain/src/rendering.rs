pub mod markdown;
pub mod svg;

pub use markdown::{embed_svg, language_table};
pub use svg::DiagramRenderer;
