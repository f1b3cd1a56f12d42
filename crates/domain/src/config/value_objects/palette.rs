use std::collections::BTreeMap;

use repo_visualiser_shared_kernel::Language;
use serde::{Deserialize, Serialize};

const DEFAULT_COLOR: &str = "grey";

/// Language name to SVG fill color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    pub colors: BTreeMap<String, String>,
    pub fallback: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        let colors = [
            ("Go", "lightblue"),
            ("JavaScript", "yellow"),
            ("HTML", "orange"),
            ("Rust", "#dea584"),
            ("Python", "#3572a5"),
            ("TypeScript", "#3178c6"),
        ]
        .into_iter()
        .map(|(lang, color)| (lang.to_string(), color.to_string()))
        .collect();
        Self { colors, fallback: DEFAULT_COLOR.to_string() }
    }
}

impl ColorPalette {
    pub fn color_for(&self, language: &Language) -> &str {
        match language {
            Language::Named(name) => self.colors.get(name).map_or(self.fallback.as_str(), String::as_str),
            Language::Unknown => &self.fallback,
        }
    }

    /// Add or replace colors; existing entries not named in `overrides` are kept.
    pub fn merge(&mut self, overrides: BTreeMap<String, String>) {
        self.colors.extend(overrides);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_languages_get_their_hue() {
        let palette = ColorPalette::default();
        assert_eq!(palette.color_for(&Language::from("Go")), "lightblue");
        assert_eq!(palette.color_for(&Language::from("JavaScript")), "yellow");
        assert_eq!(palette.color_for(&Language::from("HTML")), "orange");
    }

    #[test]
    fn unrecognised_languages_fall_back() {
        let palette = ColorPalette::default();
        assert_eq!(palette.color_for(&Language::from("COBOL")), "grey");
        assert_eq!(palette.color_for(&Language::Unknown), "grey");
    }

    #[test]
    fn merge_overrides_single_entry() {
        let mut palette = ColorPalette::default();
        palette.merge(BTreeMap::from([("Go".to_string(), "teal".to_string())]));
        assert_eq!(palette.color_for(&Language::from("Go")), "teal");
        assert_eq!(palette.color_for(&Language::from("HTML")), "orange");
    }
}
