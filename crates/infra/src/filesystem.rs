// crates/infra/src/filesystem.rs
use std::path::Path;

use ignore::WalkBuilder;
use repo_visualiser_domain::FileRecord;
use repo_visualiser_ports::{
    classification::LanguageClassifier,
    filesystem::{FileSource, SourcePlan},
};
use repo_visualiser_shared_kernel::{FilePath, InfrastructureError, Language, Result, path::logical_absolute};
use tracing::{debug, trace, warn};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `FileSource` port with `ignore::WalkBuilder`.
#[derive(Debug, Default)]
pub struct WalkFileSource<C> {
    classifier: C,
}

impl<C: LanguageClassifier> WalkFileSource<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    fn record_for(&self, path: &Path, root: &Path) -> Option<FileRecord> {
        let bytes = match FileReader::read_to_end(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable file");
                return None;
            }
        };
        let mut rel = FilePath::relative_to(path, root);
        if rel.as_str().is_empty() {
            // root itself is a file
            rel = FilePath::new(path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default());
        }
        let lines = count_lines(&bytes);
        let language = Language::from_classification(self.classifier.classify(&rel, &bytes).as_deref());
        trace!(path = %rel, lines, language = %language, "counted");
        Some(FileRecord::new(rel, lines).with_language(language))
    }
}

impl<C: LanguageClassifier> FileSource for WalkFileSource<C> {
    fn collect(&self, plan: &SourcePlan) -> Result<Vec<FileRecord>> {
        let root = plan.root.as_path();
        if !root.exists() {
            return Err(InfrastructureError::Walk {
                root: logical_absolute(root),
                details: "path does not exist".to_string(),
            }
            .into());
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .follow_links(plan.follow_links)
            .hidden(!plan.include_hidden)
            .parents(plan.respect_gitignore)
            .ignore(plan.respect_gitignore)
            .git_ignore(plan.respect_gitignore)
            .git_global(plan.respect_gitignore)
            .git_exclude(plan.respect_gitignore)
            .max_depth(plan.max_depth);

        let mut records = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "walk error");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if let Some(record) = self.record_for(entry.path(), root) {
                records.push(record);
            }
        }

        records.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(root = %logical_absolute(root).display(), files = records.len(), "collected source files");
        Ok(records)
    }
}

/// Newline count plus one; an empty file is one line.
pub fn count_lines(bytes: &[u8]) -> usize {
    bytecount::count(bytes, b'\n') + 1
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::classification::ExtensionClassifier;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn count_lines_is_newlines_plus_one() {
        assert_eq!(count_lines(b""), 1);
        assert_eq!(count_lines(b"one"), 1);
        assert_eq!(count_lines(b"one\ntwo\n"), 3);
    }

    #[test]
    fn collects_sorted_relative_classified_records() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/main.go", "package main\n\nfunc main() {}\n");
        write(dir.path(), "README.md", "# hi\n");
        write(dir.path(), "a/b/c.py", "print(1)\n");

        let source = WalkFileSource::new(ExtensionClassifier::new());
        let records = source.collect(&SourcePlan::new(dir.path())).unwrap();

        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["README.md", "a/b/c.py", "src/main.go"]);
        assert_eq!(records[2].lines.value(), 4);
        assert_eq!(records[2].language.as_str(), "Go");
        assert_eq!(records[1].language.as_str(), "Python");
    }

    #[test]
    fn hidden_files_are_included_by_default() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), ".github/workflows/ci.yml", "on: push\n");
        let records = WalkFileSource::new(ExtensionClassifier).collect(&SourcePlan::new(dir.path())).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path.as_str(), ".github/workflows/ci.yml");
    }

    #[test]
    fn gitignore_is_honoured_only_on_request() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), ".ignore", "build/\n");
        write(dir.path(), "build/out.js", "x\n");
        write(dir.path(), "lib.js", "x\n");
        let source = WalkFileSource::new(ExtensionClassifier);

        let all = source.collect(&SourcePlan::new(dir.path())).unwrap();
        assert!(all.iter().any(|r| r.path.as_str() == "build/out.js"));

        let plan = SourcePlan { respect_gitignore: true, ..SourcePlan::new(dir.path()) };
        let filtered = source.collect(&plan).unwrap();
        assert!(filtered.iter().all(|r| r.path.as_str() != "build/out.js"));
        assert!(filtered.iter().any(|r| r.path.as_str() == "lib.js"));
    }

    #[test]
    fn unknown_files_are_unknown_language() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "data.xyz", "1\n2\n");
        let records = WalkFileSource::new(ExtensionClassifier).collect(&SourcePlan::new(dir.path())).unwrap();
        assert!(records[0].language.is_unknown());
    }

    #[test]
    fn missing_root_is_a_walk_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WalkFileSource::new(ExtensionClassifier)
            .collect(&SourcePlan::new(dir.path().join("nope")))
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn single_file_root_uses_its_name() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "solo.rs", "fn main() {}\n");
        let records = WalkFileSource::new(ExtensionClassifier)
            .collect(&SourcePlan::new(dir.path().join("solo.rs")))
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path.as_str(), "solo.rs");
    }
}
