//! Lexical normalization and the operations built on it.
//!
//! This module provides:
//! - Cleaning a path (`.` removal, `..` resolution, separator collapsing)
//! - Joining segments and cleaning the result as one string
//! - Resolving a path to absolute form against a base directory
//! - Computing one path relative to another
//! - Expanding tilde (~) to the home directory
//!
//! Only [`expand_tilde`] and the current-directory lookup touch the
//! environment; nothing here touches the filesystem.

use std::env;
use std::path::PathBuf;

use super::syntax::{has_root_dir, is_separator, root_of, segments, SEPARATOR, SEPARATOR_STR};
use crate::error::{Error, Result};

/// Resolve `.` and `..` in the segments of a path body.
///
/// Leading `..` segments are kept unless `above_root_allowed` is false, in
/// which case they are dropped (the root is its own parent).
fn resolve_segments<'a>(
    parts: impl Iterator<Item = &'a str>,
    above_root_allowed: bool,
) -> Vec<&'a str> {
    let mut stack: Vec<&str> = Vec::new();
    for part in parts {
        match part {
            "." => {}
            ".." => match stack.last() {
                Some(&last) if last != ".." => {
                    stack.pop();
                }
                _ if above_root_allowed => stack.push(".."),
                _ => {}
            },
            _ => stack.push(part),
        }
    }
    stack
}

/// Lexically clean a path.
///
/// Redundant separators are collapsed, `.` segments are dropped and `..`
/// segments are resolved against their predecessor. A trailing separator is
/// preserved. An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use pathname::path::normalize::clean;
///
/// assert_eq!(clean("./foo/bar/./../baz/.."), "foo");
/// assert_eq!(clean("../a/../../b"), "../../b");
/// assert_eq!(clean(""), ".");
/// # #[cfg(unix)] {
/// assert_eq!(clean("/a/./b/../c"), "/a/c");
/// assert_eq!(clean("/../a"), "/a");
/// assert_eq!(clean("a//b/"), "a/b/");
/// # }
/// ```
#[must_use]
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let root = root_of(path);
    let rooted = has_root_dir(path);
    let trailing = path[root.len()..].ends_with(is_separator);
    let parts = resolve_segments(segments(path), !rooted);

    let mut body = parts.join(SEPARATOR_STR);
    if body.is_empty() {
        if !root.is_empty() {
            return root.to_string();
        }
        body.push('.');
    }
    if trailing {
        body.push(SEPARATOR);
    }

    let mut result = String::with_capacity(root.len() + body.len());
    result.push_str(root);
    result.push_str(&body);
    result
}

/// Join `base` and `parts` with the separator and clean the result.
///
/// Empty parts are skipped. Joining nothing onto an empty base yields `.`.
///
/// # Examples
///
/// ```
/// use pathname::path::normalize::join;
///
/// assert_eq!(join("foo", &["bar", "baz"]), "foo/bar/baz");
/// assert_eq!(join("foo/bar", &[".."]), "foo");
/// assert_eq!(join::<&str>("foo", &[]), "foo");
/// ```
#[must_use]
pub fn join<S: AsRef<str>>(base: &str, parts: &[S]) -> String {
    let mut joined = String::from(base);
    for part in parts.iter().map(AsRef::as_ref).filter(|p| !p.is_empty()) {
        if !joined.is_empty() {
            joined.push(SEPARATOR);
        }
        joined.push_str(part);
    }
    if joined.is_empty() {
        return ".".to_string();
    }
    clean(&joined)
}

/// The current working directory as a string.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or is not
/// valid UTF-8.
pub fn current_dir() -> Result<String> {
    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: PathBuf::from("."),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    cwd.into_os_string()
        .into_string()
        .map_err(|raw| Error::InvalidPath {
            path: PathBuf::from(raw),
            reason: "Current directory contains invalid UTF-8".to_string(),
        })
}

/// Resolve `path` to an absolute, cleaned path.
///
/// A relative `path` is placed under `base`; a relative `base` is in turn
/// placed under the current directory. Trailing separators are dropped.
/// The current directory is only looked up when it is needed.
///
/// # Errors
///
/// Returns an error if the current directory is needed and cannot be read.
///
/// # Examples
///
/// ```
/// use pathname::path::normalize::resolve;
///
/// # #[cfg(unix)] {
/// assert_eq!(resolve("foo/bar", "/hoge").unwrap(), "/hoge/foo/bar");
/// assert_eq!(resolve("/abs/./x/", "/ignored").unwrap(), "/abs/x");
/// # }
/// ```
pub fn resolve(path: &str, base: &str) -> Result<String> {
    let mut chain: Vec<String> = vec![path.to_string()];
    if !has_root_dir(path) {
        chain.push(base.to_string());
        if !has_root_dir(base) {
            let cwd = current_dir()?;
            log::debug!("resolving {path} against current directory {cwd}");
            chain.push(cwd);
        }
    }
    chain.retain(|p| !p.is_empty());
    chain.reverse();

    // The first entry is the absolute anchor (unless every input was empty,
    // which the current directory rules out).
    let anchor = chain.first().cloned().unwrap_or_default();
    let root = root_of(&anchor).to_string();
    let mut all_segments: Vec<&str> = Vec::new();
    for entry in &chain {
        all_segments.extend(segments(entry));
    }
    let parts = resolve_segments(all_segments.into_iter(), root.is_empty());

    let body = parts.join(SEPARATOR_STR);
    if root.is_empty() && body.is_empty() {
        return Ok(".".to_string());
    }
    Ok(format!("{root}{body}"))
}

/// Express `to` relative to `from`.
///
/// Both paths are first resolved against the current directory. Identical
/// paths yield the empty string. Paths on different roots (e.g. different
/// drives) cannot be related and `to` is returned in resolved form.
///
/// # Errors
///
/// Returns an error if a relative input requires the current directory and
/// it cannot be read.
///
/// # Examples
///
/// ```
/// use pathname::path::normalize::relative;
///
/// # #[cfg(unix)] {
/// assert_eq!(relative("/hoge", "/hoge/foo/bar").unwrap(), "foo/bar");
/// assert_eq!(relative("/a/b/c", "/a/d").unwrap(), "../../d");
/// assert_eq!(relative("/a", "/a").unwrap(), "");
/// # }
/// ```
pub fn relative(from: &str, to: &str) -> Result<String> {
    let needs_cwd = !has_root_dir(from) || !has_root_dir(to);
    let cwd = if needs_cwd { current_dir()? } else { String::new() };

    let from = resolve(from, &cwd)?;
    let to = resolve(to, &cwd)?;
    if from == to {
        return Ok(String::new());
    }
    if root_of(&from) != root_of(&to) {
        return Ok(to);
    }

    let from_parts: Vec<&str> = segments(&from).collect();
    let to_parts: Vec<&str> = segments(&to).collect();
    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat("..").take(from_parts.len() - common);
    let downs = to_parts[common..].iter().copied();
    let result: Vec<&str> = ups.chain(downs).collect();
    Ok(result.join(SEPARATOR_STR))
}

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
/// Paths that do not start with `~` are returned unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - The home directory cannot be determined or is not valid UTF-8
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use pathname::path::normalize::expand_tilde;
///
/// let expanded = expand_tilde("~/project").unwrap();
/// assert!(expanded.ends_with("project"));
///
/// assert_eq!(expand_tilde("/absolute").unwrap(), "/absolute");
/// ```
pub fn expand_tilde(path: &str) -> Result<String> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(path.to_string());
    };

    if !(rest.is_empty() || rest.starts_with(is_separator)) {
        return Err(Error::InvalidPath {
            path: PathBuf::from(path),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        });
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: PathBuf::from(path),
        reason: "Cannot determine home directory".to_string(),
    })?;
    let home = home.into_os_string().into_string().map_err(|raw| Error::InvalidPath {
        path: PathBuf::from(raw),
        reason: "Home directory contains invalid UTF-8".to_string(),
    })?;

    log::debug!("expanding {path} against home directory {home}");
    let rest = rest.trim_start_matches(is_separator);
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(join(&home, &[rest]))
    }
}
