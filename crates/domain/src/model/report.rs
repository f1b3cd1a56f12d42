use serde::Serialize;

use super::records::LanguageCount;

/// Everything a delivery sink needs from one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub svg: String,
    pub languages: Vec<LanguageCount>,
    pub folders: usize,
    pub files: usize,
    pub ignored: usize,
}
