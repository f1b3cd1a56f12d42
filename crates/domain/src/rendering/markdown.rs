//! Markdown fragments for run summaries and comments.

use std::fmt::Write;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::model::LanguageCount;

pub const SECTION_HEADING: &str = "## Repository Visualiser";

/// Heading plus the diagram as an inline `data:` image.
pub fn embed_svg(svg: &str) -> String {
    format!("{SECTION_HEADING}\n![SVG Image](data:image/svg+xml;base64,{})", STANDARD.encode(svg))
}

/// One-row table of file counts per language, in the order given.
///
/// Returns an empty string for an empty tally.
pub fn language_table(counts: &[LanguageCount]) -> String {
    if counts.is_empty() {
        return String::new();
    }
    let headers: Vec<&str> = counts.iter().map(|c| c.language.as_str()).collect();
    let values: Vec<String> = counts.iter().map(|c| c.count.to_string()).collect();

    let mut table = String::new();
    let _ = writeln!(table, "|         | {} |", headers.join(" | "));
    let _ = writeln!(table, "|---------|{}", "---------|".repeat(counts.len()));
    let _ = writeln!(table, "| Files   | {} |", values.join(" | "));
    table
}
