//! Test fixture management

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// A throwaway source tree.
#[allow(dead_code)]
pub struct TempWorkspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new(prefix: &str) -> Self {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
        Self { dir }
    }

    /// Create `path` (and its parents) with `content`.
    pub fn create_file(&mut self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Create a file counted as exactly `lines` lines.
    pub fn create_lines(&mut self, path: &str, lines: usize) -> PathBuf {
        let content = "x\n".repeat(lines.saturating_sub(1));
        self.create_file(path, &content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }
}
