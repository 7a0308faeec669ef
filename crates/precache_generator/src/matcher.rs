//! Matching paths against lists of positive and `!`-negated patterns.

use precache_common::glob_to_regex;
use precache_config::Glob;
use regex::Regex;

use crate::error::GenerateError;
use crate::manifest::NavigationUrl;

/// Label used in errors for patterns that belong to no group.
pub(crate) const NAVIGATION_URLS: &str = "navigationUrls";

/// A compiled list of include and exclude patterns.
///
/// A path matches when at least one positive pattern matches it and no
/// negative pattern does. The order patterns were declared in is irrelevant.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    positive: Vec<Regex>,
    negative: Vec<Regex>,
}

impl PatternSet {
    /// Compiles file globs (`?` as a wildcard), anchored to whole paths.
    ///
    /// Characters that are regex syntax but not glob syntax (`{`, `(`, `[`,
    /// ...) match themselves, so every glob compiles.
    pub fn from_globs(group: &str, globs: &[Glob]) -> Result<Self, GenerateError> {
        let mut set = Self::default();
        for glob in globs {
            let (positive, body) = split_negation(glob);
            let fragment = glob_to_regex(&escape_regex_syntax(body), false);
            let regex = compile(group, glob, &format!("^{fragment}$"))?;
            set.push(positive, regex);
        }
        Ok(set)
    }

    /// Compiles already-resolved navigation patterns.
    pub fn from_navigation_urls(urls: &[NavigationUrl]) -> Result<Self, GenerateError> {
        let mut set = Self::default();
        for url in urls {
            let regex = compile(NAVIGATION_URLS, &url.regex, &url.regex)?;
            set.push(url.positive, regex);
        }
        Ok(set)
    }

    /// Whether `path` is included by this set.
    pub fn is_match(&self, path: &str) -> bool {
        self.positive.iter().any(|r| r.is_match(path))
            && !self.negative.iter().any(|r| r.is_match(path))
    }

    /// Whether the set has no patterns at all.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    fn push(&mut self, positive: bool, regex: Regex) {
        if positive {
            self.positive.push(regex);
        } else {
            self.negative.push(regex);
        }
    }
}

/// Splits a leading `!` off a pattern, returning `(positive, body)`.
pub(crate) fn split_negation(pattern: &str) -> (bool, &str) {
    match pattern.strip_prefix('!') {
        Some(body) => (false, body),
        None => (true, pattern),
    }
}

/// Backslash-escapes regex metacharacters that `glob_to_regex` passes through.
fn escape_regex_syntax(glob: &str) -> String {
    let mut escaped = String::with_capacity(glob.len());
    for ch in glob.chars() {
        if matches!(ch, '\\' | '^' | '$' | '|' | '(' | ')' | '[' | ']' | '{' | '}') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Compiles `regex`, attributing failures to `pattern` as written.
fn compile(group: &str, pattern: &str, regex: &str) -> Result<Regex, GenerateError> {
    Regex::new(regex).map_err(|source| GenerateError::InvalidPattern {
        group: group.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}
