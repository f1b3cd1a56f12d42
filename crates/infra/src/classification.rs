// crates/infra/src/classification.rs
//! Language detection from file names, extensions and shebang lines.

use repo_visualiser_ports::classification::LanguageClassifier;
use repo_visualiser_shared_kernel::FilePath;

/// Classifier based on well-known names, extensions and `#!` interpreters.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtensionClassifier;

impl ExtensionClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageClassifier for ExtensionClassifier {
    fn classify(&self, path: &FilePath, content: &[u8]) -> Option<String> {
        from_file_name(path.file_name())
            .or_else(|| path.extension().as_deref().and_then(from_extension))
            .or_else(|| from_shebang(content))
            .map(str::to_string)
    }
}

fn from_file_name(name: &str) -> Option<&'static str> {
    let lang = match name {
        "Makefile" | "GNUmakefile" | "makefile" => "Makefile",
        "Dockerfile" | "Containerfile" => "Dockerfile",
        "CMakeLists.txt" => "CMake",
        "Rakefile" | "Gemfile" => "Ruby",
        "Cargo.lock" => "TOML",
        "go.mod" | "go.sum" => "Go Module",
        "Justfile" | "justfile" => "Just",
        _ => return None,
    };
    Some(lang)
}

fn from_extension(ext: &str) -> Option<&'static str> {
    let lang = match ext {
        "go" => "Go",
        "rs" => "Rust",
        "js" | "mjs" | "cjs" | "jsx" => "JavaScript",
        "ts" | "tsx" | "mts" | "cts" => "TypeScript",
        "html" | "htm" | "xhtml" => "HTML",
        "css" => "CSS",
        "scss" | "sass" => "SCSS",
        "py" | "pyw" | "pyi" => "Python",
        "rb" | "rake" | "gemspec" => "Ruby",
        "java" => "Java",
        "kt" | "kts" => "Kotlin",
        "scala" | "sc" => "Scala",
        "swift" => "Swift",
        "c" | "h" => "C",
        "cpp" | "cc" | "cxx" | "c++" | "hpp" | "hh" | "hxx" => "C++",
        "cs" => "C#",
        "m" | "mm" => "Objective-C",
        "php" => "PHP",
        "pl" | "pm" => "Perl",
        "lua" => "Lua",
        "hs" => "Haskell",
        "ml" | "mli" => "OCaml",
        "ex" | "exs" => "Elixir",
        "erl" | "hrl" => "Erlang",
        "dart" => "Dart",
        "zig" => "Zig",
        "sh" | "bash" | "zsh" => "Shell",
        "ps1" | "psm1" => "PowerShell",
        "bat" | "cmd" => "Batchfile",
        "sql" => "SQL",
        "md" | "markdown" => "Markdown",
        "json" | "jsonc" => "JSON",
        "yml" | "yaml" => "YAML",
        "toml" => "TOML",
        "xml" => "XML",
        "svg" => "SVG",
        "proto" => "Protocol Buffer",
        "vue" => "Vue",
        "svelte" => "Svelte",
        _ => return None,
    };
    Some(lang)
}

fn from_shebang(content: &[u8]) -> Option<&'static str> {
    let first = content.split(|&b| b == b'\n').next()?;
    let line = std::str::from_utf8(first).ok()?.strip_prefix("#!")?.trim();
    // `#!/usr/bin/env python3 -u` -> `python3`
    let mut words = line.split_whitespace();
    let mut interpreter = words.next()?.rsplit('/').next()?;
    if interpreter == "env" {
        interpreter = words.find(|w| !w.starts_with('-'))?;
    }
    let interpreter = interpreter.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    let lang = match interpreter {
        "sh" | "bash" | "zsh" | "dash" | "ksh" => "Shell",
        "python" => "Python",
        "node" | "nodejs" => "JavaScript",
        "ruby" => "Ruby",
        "perl" => "Perl",
        "php" => "PHP",
        "lua" => "Lua",
        _ => return None,
    };
    Some(lang)
}
