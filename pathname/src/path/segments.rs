//! Last-segment string primitives: dirname, basename and extension.
//!
//! These work purely on the string and never consult the filesystem.
//! Redundant and trailing separators are tolerated the same way the host's
//! path syntax tolerates them.

use super::syntax::{is_separator, root_of};

/// Strip trailing separators, but never eat into the root.
fn trim_trailing(path: &str) -> &str {
    let root = root_of(path);
    let rest = path[root.len()..].trim_end_matches(is_separator);
    &path[..root.len() + rest.len()]
}

/// The final segment of `path`, ignoring trailing separators.
///
/// A root-only or empty path has an empty final segment.
#[must_use]
pub fn last_segment(path: &str) -> &str {
    let trimmed = trim_trailing(path);
    let root = root_of(trimmed);
    let rest = &trimmed[root.len()..];
    match rest.rfind(is_separator) {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    }
}

/// Everything but the last segment of `path`.
///
/// # Examples
///
/// ```
/// use pathname::path::segments::dirname;
///
/// assert_eq!(dirname("foo/bar"), "foo");
/// assert_eq!(dirname("foo"), ".");
/// # #[cfg(unix)]
/// assert_eq!(dirname("/foo"), "/");
/// ```
#[must_use]
pub fn dirname(path: &str) -> &str {
    let root = root_of(path);
    let rest = &path[root.len()..];

    // Walk back over trailing separators, then the last segment, and stop at
    // the separator in front of it.
    let mut end = None;
    let mut in_trailing_separators = true;
    for (idx, c) in rest.char_indices().rev() {
        if is_separator(c) {
            if !in_trailing_separators {
                end = Some(idx);
                break;
            }
        } else {
            in_trailing_separators = false;
        }
    }

    match end {
        None if root.is_empty() => ".",
        None => root,
        Some(end) if rest[..end].chars().all(is_separator) && !root.is_empty() => root,
        Some(end) => &path[..root.len() + end],
    }
}

/// The last segment of `path`, with `suffix` removed when it trails it.
///
/// The suffix is kept when it is the whole segment, whether or not the
/// segment is preceded by a directory.
///
/// # Examples
///
/// ```
/// use pathname::path::segments::basename;
///
/// assert_eq!(basename("foo/bar.baz", ""), "bar.baz");
/// assert_eq!(basename("foo/bar.baz", ".baz"), "bar");
/// assert_eq!(basename("foo/.baz", ".baz"), ".baz");
/// ```
#[must_use]
pub fn basename<'a>(path: &'a str, suffix: &str) -> &'a str {
    let segment = last_segment(path);
    if !suffix.is_empty() && segment != suffix {
        if let Some(stripped) = segment.strip_suffix(suffix) {
            return stripped;
        }
    }
    segment
}

/// The extension of the last segment, including its leading dot.
///
/// Dotfiles such as `.bashrc` and the segment `..` have no extension.
///
/// # Examples
///
/// ```
/// use pathname::path::segments::extname;
///
/// assert_eq!(extname("foo.bar"), ".bar");
/// assert_eq!(extname("archive.tar.gz"), ".gz");
/// assert_eq!(extname(".bashrc"), "");
/// assert_eq!(extname("foo"), "");
/// ```
#[must_use]
pub fn extname(path: &str) -> &str {
    let segment = last_segment(path);
    match segment.rfind('.') {
        None | Some(0) => "",
        Some(_) if segment == ".." => "",
        Some(idx) => &segment[idx..],
    }
}
