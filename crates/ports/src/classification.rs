// crates/ports/src/classification.rs
use repo_visualiser_shared_kernel::FilePath;

/// Port mapping a file to a programming language name.
pub trait LanguageClassifier: Send + Sync {
    /// `None` when the language is not recognised.
    fn classify(&self, path: &FilePath, content: &[u8]) -> Option<String>;
}
