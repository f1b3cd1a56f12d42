// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    borrow::Borrow,
    fmt,
    path::{Component, Path},
};

use serde::{Deserialize, Serialize};

/// Relative, `/`-separated path as produced by the traversal layer.
///
/// Paths are kept as UTF-8 strings so that folder grouping and ignore
/// matching are pure functions of the string structure. `.` and `..`
/// segments are preserved as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FilePath(String);

impl FilePath {
    /// Wrap `path`, converting any `\` separators to `/`.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.contains('\\') { Self(path.replace('\\', "/")) } else { Self(path) }
    }

    /// Build a path relative to `root`, falling back to the full path when
    /// `path` does not live beneath it.
    pub fn relative_to(path: &Path, root: &Path) -> Self {
        let rel = path.strip_prefix(root).unwrap_or(path);
        let parts: Vec<String> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                Component::ParentDir => Some("..".to_string()),
                _ => None,
            })
            .collect();
        Self(parts.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Directory portion of the path.
    ///
    /// Top-level entries live in `"."`; entries directly below an absolute
    /// root live in `"/"`.
    pub fn parent_dir(&self) -> &str {
        match self.0.rfind('/') {
            None => ".",
            Some(0) => "/",
            Some(idx) => &self.0[..idx],
        }
    }

    /// Last path segment.
    pub fn file_name(&self) -> &str {
        base_name(&self.0)
    }

    /// Lowercased extension of the last segment, without the dot.
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name();
        let idx = name.rfind('.')?;
        if idx == 0 || idx + 1 == name.len() {
            return None;
        }
        Some(name[idx + 1..].to_ascii_lowercase())
    }

    /// Whether the path equals `prefix` or lives anywhere beneath it.
    pub fn is_within(&self, prefix: &str) -> bool {
        self.0 == prefix
            || self
                .0
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Last segment of a `/`-separated path; `"/"` and `"."` are returned unchanged.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" };
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FilePath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl AsRef<str> for FilePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FilePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn parent_dir_follows_path_structure() {
        assert_eq!(FilePath::from("/a/x.go").parent_dir(), "/a");
        assert_eq!(FilePath::from("src/ui/view.rs").parent_dir(), "src/ui");
        assert_eq!(FilePath::from("main.go").parent_dir(), ".");
        assert_eq!(FilePath::from("/root.go").parent_dir(), "/");
    }

    #[test]
    fn backslashes_become_slashes() {
        let path = FilePath::new("src\\bin\\tool.rs");
        assert_eq!(path.as_str(), "src/bin/tool.rs");
        assert_eq!(path.parent_dir(), "src/bin");
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(FilePath::from("docs/README.MD").extension().as_deref(), Some("md"));
        assert_eq!(FilePath::from(".gitignore").extension(), None);
        assert_eq!(FilePath::from("Makefile").extension(), None);
    }

    #[test]
    fn is_within_requires_separator_boundary() {
        let path = FilePath::from("vendor/sub/lib.go");
        assert!(path.is_within("vendor"));
        assert!(path.is_within("vendor/sub"));
        assert!(!FilePath::from("vendor.go").is_within("vendor"));
        assert!(FilePath::from("vendor").is_within("vendor"));
    }

    #[test]
    fn relative_to_strips_root() {
        let root = PathBuf::from("/work/repo");
        let file = root.join("src").join("lib.rs");
        assert_eq!(FilePath::relative_to(&file, &root).as_str(), "src/lib.rs");
    }

    #[test]
    fn base_name_handles_roots() {
        assert_eq!(base_name("/a"), "a");
        assert_eq!(base_name("."), ".");
        assert_eq!(base_name("/"), "/");
        assert_eq!(base_name("src/ui/"), "ui");
    }
}
