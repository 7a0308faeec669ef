//! URL pattern compilation for asset-group URLs, data groups, and navigation.

use precache_common::{glob_to_regex, join_urls};
use precache_config::Glob;

use crate::manifest::NavigationUrl;
use crate::matcher::split_negation;

/// Navigation patterns used when the configuration declares none.
///
/// Everything is a navigation request except paths whose last segment has a
/// file extension and paths containing `__` in any segment.
pub const DEFAULT_NAVIGATION_URLS: [&str; 4] = ["/**", "!/**/*.*", "!/**/*__*", "!/**/*__*/**"];

/// Compiles a URL glob into an unanchored regex fragment.
///
/// Relative patterns (no leading `/` and no `://` scheme) are joined onto
/// `base_href` first.
pub fn url_to_regex(url: &str, base_href: &str, literal_question_mark: bool) -> String {
    if !url.starts_with('/') && !url.contains("://") {
        glob_to_regex(&join_urls(base_href, url), literal_question_mark)
    } else {
        glob_to_regex(url, literal_question_mark)
    }
}

/// Compiles a group's URL globs with `?` taken literally.
///
/// Fragments are emitted as-is for the runtime to compile; they are not
/// checked against this crate's regex dialect.
pub(crate) fn url_patterns(base_href: &str, urls: &[Glob]) -> Vec<String> {
    urls.iter()
        .map(|url| url_to_regex(url, base_href, true))
        .collect()
}

/// Resolves navigation patterns, falling back to [`DEFAULT_NAVIGATION_URLS`].
///
/// A leading `!` marks a pattern negative. Each regex is anchored with
/// `^...$` and compiled with `?` as a wildcard.
pub fn process_navigation_urls(base_href: &str, urls: Option<&[Glob]>) -> Vec<NavigationUrl> {
    let resolve = |url: &str| {
        let (positive, body) = split_negation(url);
        NavigationUrl {
            positive,
            regex: format!("^{}$", url_to_regex(body, base_href, false)),
        }
    };

    match urls {
        Some(urls) => urls.iter().map(|url| resolve(url)).collect(),
        None => DEFAULT_NAVIGATION_URLS.iter().map(|url| resolve(url)).collect(),
    }
}
