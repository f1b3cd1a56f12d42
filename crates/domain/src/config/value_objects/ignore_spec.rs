use std::fmt;

use repo_visualiser_shared_kernel::{DomainError, FilePath};
use tracing::warn;

use super::glob_pattern::GlobPattern;

/// Patterns excluded unless the caller opts out of the built-in list.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git",
    "node_modules",
    "vendor",
    "target",
    "*.log",
    "*.tmp",
    "*.swp",
    ".DS_Store",
    "*.exe",
    "*.dll",
    "*.so",
    "*.o",
    "*.a",
    "*.pyc",
    "*.class",
    "*.jar",
    "*.war",
    "*.zip",
    "*.tar.gz",
    "*.7z",
    "*.bak",
    "*.old",
    "*.orig",
];

const WILDCARD_CHARS: &[char] = &['*', '?', '[', ']'];

/// A single entry of an ignore specification.
#[derive(Debug, Clone)]
pub enum IgnorePattern {
    /// Shell glob matched against the full path.
    Glob(GlobPattern),
    /// Literal path; also excludes everything beneath it.
    Prefix(String),
    /// Glob that failed to compile. Never matches.
    Invalid { pattern: String, details: String },
}

impl IgnorePattern {
    /// Classify and compile `raw`, taken exactly as written. Empty input
    /// yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        if raw.contains(WILDCARD_CHARS) {
            return Some(match GlobPattern::new(raw) {
                Ok(glob) => Self::Glob(glob),
                Err(err) => {
                    let err = DomainError::InvalidPattern {
                        pattern: raw.to_string(),
                        details: err.to_string(),
                        source: Some(Box::new(err)),
                    };
                    warn!("{err}; pattern will never match");
                    Self::Invalid { pattern: raw.to_string(), details: err.to_string() }
                }
            });
        }
        Some(Self::Prefix(raw.to_string()))
    }

    pub fn matches(&self, path: &FilePath) -> bool {
        match self {
            Self::Glob(glob) => glob.matches(path.as_str()),
            Self::Prefix(prefix) => path.is_within(prefix),
            Self::Invalid { .. } => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Glob(glob) => glob.pattern(),
            Self::Prefix(prefix) => prefix,
            Self::Invalid { pattern, .. } => pattern,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid { .. })
    }
}

impl fmt::Display for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of ignore patterns; the first matching pattern wins.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSpec {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreSpec {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut spec = Self::empty();
        spec.extend(patterns);
        spec
    }

    pub fn empty() -> Self {
        Self { patterns: Vec::new() }
    }

    /// The built-in exclusions (VCS metadata, dependency folders, binaries).
    pub fn defaults() -> Self {
        Self::new(DEFAULT_IGNORE_PATTERNS)
    }

    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patterns
            .extend(patterns.into_iter().filter_map(|p| IgnorePattern::parse(p.as_ref())));
    }

    /// First pattern excluding `path`, if any.
    pub fn first_match(&self, path: &FilePath) -> Option<&IgnorePattern> {
        self.patterns.iter().find(|p| p.matches(path))
    }

    pub fn is_ignored(&self, path: &FilePath) -> bool {
        self.first_match(path).is_some()
    }

    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
