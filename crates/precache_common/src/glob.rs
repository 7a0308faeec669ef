//! Glob-to-regex compilation for file paths and URL patterns.
//!
//! A glob is split on `/` and compiled segment by segment:
//!
//! | Glob            | Regex fragment |
//! |-----------------|----------------|
//! | `**` (inner)    | `(?:.+\/)?`    |
//! | `**` (last)     | `.*`           |
//! | `*`             | `[^/]*`        |
//! | `?` (wildcard)  | `[^/]`         |
//! | `?` (literal)   | `\?`           |
//! | `.` / `+`       | `\.` / `\+`    |
//!
//! The output is an unanchored fragment. Callers wrap it in `^...$` where a
//! whole-string match is needed.

/// Matches exactly one character within a path segment.
const QUESTION_MARK: &str = "[^/]";

/// Matches any run of characters within a path segment.
const WILD_SINGLE: &str = "[^/]*";

/// An optional run of whole segments, each ending in `/`.
const WILD_OPEN: &str = "(?:.+\\/)?";

/// A trailing `**` together with the separator in front of it.
const WILD_TAIL: &str = "(?:\\/.*)?";

/// Any remaining suffix.
const WILD_REST: &str = ".*";

/// Literal segment separator.
const SEPARATOR: &str = "\\/";

/// Compiles a glob into a regular-expression fragment.
///
/// With `literal_question_mark` set, `?` matches only itself; this is the mode
/// used for URL patterns where `?` introduces the query string. Otherwise `?`
/// matches any single character except `/`.
///
/// Every input compiles; empty segments (from `//`) pass through as empty
/// strings between separators.
pub fn glob_to_regex(glob: &str, literal_question_mark: bool) -> String {
    let segments: Vec<&str> = glob.split('/').collect();
    let mut regex = String::with_capacity(glob.len() * 2);

    for (i, segment) in segments.iter().enumerate() {
        let is_last = i + 1 == segments.len();

        if *segment == "**" {
            regex.push_str(if is_last { WILD_REST } else { WILD_OPEN });
            continue;
        }

        escape_segment(segment, literal_question_mark, &mut regex);

        if is_last {
            continue;
        }
        // `a/**` must also match `a` itself, so the final separator is optional.
        if i + 2 == segments.len() && segments[i + 1] == "**" {
            regex.push_str(WILD_TAIL);
            break;
        }
        regex.push_str(SEPARATOR);
    }

    regex
}

/// Appends the escaped form of a single non-`**` segment to `out`.
fn escape_segment(segment: &str, literal_question_mark: bool, out: &mut String) {
    for ch in segment.chars() {
        match ch {
            '.' => out.push_str("\\."),
            '+' => out.push_str("\\+"),
            '*' => out.push_str(WILD_SINGLE),
            '?' if literal_question_mark => out.push_str("\\?"),
            '?' => out.push_str(QUESTION_MARK),
            other => out.push(other),
        }
    }
}
