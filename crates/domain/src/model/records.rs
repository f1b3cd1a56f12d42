use repo_visualiser_shared_kernel::{FilePath, Language, LineCount};
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// A counted source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: FilePath,
    pub lines: LineCount,
    #[serde(default)]
    pub language: Language,
}

impl FileRecord {
    pub fn new(path: impl Into<FilePath>, lines: usize) -> Self {
        Self { path: path.into(), lines: LineCount::new(lines), language: Language::Unknown }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<Language>) -> Self {
        self.language = language.into();
        self
    }
}

/// Files sharing a parent directory, with their summed line count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderAggregate {
    pub folder: String,
    pub total_lines: LineCount,
    pub files: Vec<FileRecord>,
    pub radius: f64,
}

impl FolderAggregate {
    /// Sum `files` and size the folder circle according to `layout`.
    pub fn new(folder: impl Into<String>, files: Vec<FileRecord>, layout: &LayoutConfig) -> Self {
        let total_lines: LineCount = files.iter().map(|f| f.lines).sum();
        let radius = layout.folder_radius(total_lines);
        Self { folder: folder.into(), total_lines, files, radius }
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

/// Number of files detected for a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub language: Language,
    pub count: usize,
}

impl LanguageCount {
    pub fn new(language: impl Into<Language>, count: usize) -> Self {
        Self { language: language.into(), count }
    }
}
