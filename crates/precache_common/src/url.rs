//! URL joining shared by every path the manifest emits.

/// Joins a base href and a path so that exactly one `/` sits at the seam.
///
/// ```
/// use precache_common::join_urls;
///
/// assert_eq!(join_urls("/app/", "/main.js"), "/app/main.js");
/// assert_eq!(join_urls("/app", "main.js"), "/app/main.js");
/// assert_eq!(join_urls("/app/", "main.js"), "/app/main.js");
/// ```
pub fn join_urls(a: &str, b: &str) -> String {
    match (a.ends_with('/'), b.starts_with('/')) {
        (true, true) => format!("{a}{}", &b[1..]),
        (false, false) => format!("{a}/{b}"),
        _ => format!("{a}{b}"),
    }
}
