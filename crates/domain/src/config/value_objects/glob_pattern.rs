use globset::{GlobBuilder, GlobMatcher};

/// Wrapper around `globset` matchers with plain shell semantics: `*` and `?`
/// never match across a `/`, `**` is just `*`, and braces are literal.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    original: String,
    matcher: GlobMatcher,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self, globset::Error> {
        let glob = GlobBuilder::new(&shell_glob(pattern))
            .literal_separator(true)
            .backslash_escape(true)
            .build()?;
        let matcher = glob.compile_matcher();
        Ok(Self {
            original: pattern.to_string(),
            matcher,
        })
    }

    pub fn matches(&self, value: &str) -> bool {
        self.matcher.is_match(value)
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }
}

/// Rewrite `pattern` so `globset` extensions behave like a plain shell glob.
///
/// Outside character classes, runs of `*` collapse to one and `{`, `}`, `,`
/// become single-character classes. Escapes and class contents pass through.
fn shell_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                out.push(ch);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            _ if in_class => {
                out.push(ch);
                if ch == ']' {
                    in_class = false;
                }
            }
            '[' => {
                out.push(ch);
                in_class = true;
                // negation marker and a leading `]` belong to the class body
                if let Some(&next) = chars.peek()
                    && (next == '!' || next == '^')
                {
                    out.push(next);
                    chars.next();
                }
                if chars.peek() == Some(&']') {
                    out.push(']');
                    chars.next();
                }
            }
            '*' => {
                out.push('*');
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
            }
            '{' | '}' | ',' => {
                out.push('[');
                out.push(ch);
                out.push(']');
            }
            _ => out.push(ch),
        }
    }
    out
}
