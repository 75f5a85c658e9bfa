//! Wildcard exclusion patterns.
//!
//! Patterns are literal text plus `*` as the only wildcard. Every string is
//! a legal pattern: the whole pattern is regex-escaped first, and only then
//! is the escaped wildcard substituted, so no metacharacter in the pattern
//! can leak through. Matches are anchored over the entire path.

use std::path::Path;

use regex::Regex;

/// A compiled set of exclusion patterns.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    matchers: Vec<Regex>,
}

impl ExcludeSet {
    /// Compile patterns into anchored matchers. An empty set excludes
    /// nothing.
    pub fn compile<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matchers = patterns
            .into_iter()
            .map(|pattern| compile_pattern(pattern.as_ref()))
            .collect();
        Self { matchers }
    }

    /// Whether the path matches at least one pattern in full.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let candidate = path.to_string_lossy();
        self.matchers.iter().any(|m| m.is_match(&candidate))
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

fn compile_pattern(pattern: &str) -> Regex {
    let escaped = regex::escape(pattern);
    let body = escaped.replace(r"\*", "(.+)");
    Regex::new(&format!("^{body}$")).expect("escaped pattern is always a valid regex")
}
