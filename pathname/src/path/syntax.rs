//! Platform path syntax: separators and roots.
//!
//! Everything else in the path algebra is written against these few
//! primitives, so the string algorithms stay platform-independent while the
//! host decides what a separator is and where a root ends.

use std::path::{Component, Path};

/// The separator used when the library builds a path.
pub const SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// [`SEPARATOR`] as a string slice.
pub const SEPARATOR_STR: &str = std::path::MAIN_SEPARATOR_STR;

/// Whether `c` separates path segments on this platform.
#[must_use]
pub fn is_separator(c: char) -> bool {
    std::path::is_separator(c)
}

/// Count the separator characters in `path`.
#[must_use]
pub fn separator_count(path: &str) -> usize {
    path.chars().filter(|&c| is_separator(c)).count()
}

/// The syntactic root of `path`: the platform prefix (if any) followed by the
/// root separator (if any).
///
/// Returns `""` for relative paths.
///
/// # Examples
///
/// ```
/// use pathname::path::syntax::root_of;
///
/// # #[cfg(unix)] {
/// assert_eq!(root_of("/usr/lib"), "/");
/// assert_eq!(root_of("usr/lib"), "");
/// # }
/// ```
#[must_use]
pub fn root_of(path: &str) -> &str {
    let mut len = 0;
    for component in Path::new(path).components() {
        match component {
            Component::Prefix(prefix) => len += prefix.as_os_str().len(),
            Component::RootDir => {
                len += path[len..].chars().next().map_or(0, char::len_utf8);
                break;
            }
            _ => break,
        }
    }
    &path[..len]
}

/// Whether the root of `path` ends in a separator, i.e. `..` cannot climb
/// above it.
#[must_use]
pub fn has_root_dir(path: &str) -> bool {
    Path::new(path).has_root()
}

/// Split the part of `path` after its root into non-empty segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    let root = root_of(path);
    path[root.len()..]
        .split(is_separator)
        .filter(|segment| !segment.is_empty())
}
