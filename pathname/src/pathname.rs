//! The `Pathname` value type and its pure path algebra.
//!
//! A `Pathname` holds a path string exactly as it was given. Every
//! transformation returns a new `Pathname`; nothing here touches the
//! filesystem. Filesystem queries live in [`crate::fs`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::normalize::{self, clean};
use crate::path::segments;
use crate::path::syntax::{is_separator, root_of, separator_count};
use crate::path::PathRelationship;

/// An immutable wrapper over a path string.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
///
/// let config = Pathname::new("project/src/../config/app.toml");
/// assert_eq!(config.cleanpath().to_string(), "project/config/app.toml");
/// assert_eq!(config.extname(), ".toml");
/// assert_eq!(config.basename().to_string(), "app.toml");
/// assert_eq!(config.sub_ext(".yaml").to_string(), "project/config/app.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pathname {
    raw: String,
}

impl Pathname {
    /// Wrap a path string. The string is kept exactly as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// assert_eq!(Pathname::new("a//b/./").as_str(), "a//b/./");
    /// ```
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The raw path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The raw path string as a [`Path`].
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.raw)
    }

    /// Consume the value and return the raw string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }

    /// The last segment of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// assert_eq!(Pathname::new("foo/bar").basename().to_string(), "bar");
    /// ```
    #[must_use]
    pub fn basename(&self) -> Self {
        self.basename_without("")
    }

    /// The last segment of the path with `suffix` removed if it trails it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let path = Pathname::new("foo/bar.baz");
    /// assert_eq!(path.basename_without(".baz").to_string(), "bar");
    /// assert_eq!(path.basename_without(&path.extname()).to_string(), "bar");
    /// ```
    #[must_use]
    pub fn basename_without(&self, suffix: &str) -> Self {
        Self::new(segments::basename(&self.raw, suffix))
    }

    /// All but the last segment of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// assert_eq!(Pathname::new("foo/bar").dirname().to_string(), "foo");
    /// assert_eq!(Pathname::new("foo").dirname().to_string(), ".");
    /// ```
    #[must_use]
    pub fn dirname(&self) -> Self {
        Self::new(segments::dirname(&self.raw))
    }

    /// The extension of the last segment, including its dot, or `""`.
    #[must_use]
    pub fn extname(&self) -> String {
        segments::extname(&self.raw).to_string()
    }

    /// The lexically cleaned path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let path = Pathname::new("./foo/bar/./../baz/..");
    /// assert_eq!(path.cleanpath().to_string(), "foo");
    /// ```
    #[must_use]
    pub fn cleanpath(&self) -> Self {
        Self::new(clean(&self.raw))
    }

    /// Join segments onto this path and clean the result as a whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let base = Pathname::new("foo");
    /// assert_eq!(base.join(["bar", "baz"]).to_string(), "foo/bar/baz");
    /// assert_eq!(Pathname::new("foo/bar").join([".."]).to_string(), "foo");
    /// ```
    #[must_use]
    pub fn join<I, S>(&self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parts: Vec<S> = parts.into_iter().collect();
        Self::new(normalize::join(&self.raw, &parts))
    }

    /// The parent directory, i.e. `join([".."])`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// assert_eq!(Pathname::new("foo/bar").parent().to_string(), "foo");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        self.join([".."])
    }

    /// The `(dirname, basename)` pair.
    #[must_use]
    pub fn split(&self) -> (Self, Self) {
        (self.dirname(), self.basename())
    }

    /// Replace the extension, or append one when there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// # #[cfg(unix)] {
    /// assert_eq!(Pathname::new("/foo.txt").sub_ext(".csv").to_string(), "/foo.csv");
    /// assert_eq!(Pathname::new("/foo").sub_ext(".csv").to_string(), "/foo.csv");
    /// # }
    /// ```
    #[must_use]
    pub fn sub_ext(&self, new_ext: &str) -> Self {
        let stem = self.basename_without(&self.extname());
        self.dirname().join([format!("{stem}{new_ext}")])
    }

    /// Replace the first literal occurrence of `pattern` in the raw string.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let path = Pathname::new("src/old/old.rs");
    /// assert_eq!(path.sub("old", "new").to_string(), "src/new/old.rs");
    /// ```
    #[must_use]
    pub fn sub(&self, pattern: &str, replacement: &str) -> Self {
        Self::new(self.raw.replacen(pattern, replacement, 1))
    }

    /// Replace the first match of `pattern` in the raw string.
    ///
    /// Group references in `replacement` are expanded. A numbered reference
    /// such as `$1` ends at its last digit, so `$1x` is group 1 followed by
    /// `x`. Braced (`${1}`, `${name}`) and named (`$name`) references and the
    /// `$$` escape behave as in [`Regex::replace`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    /// use regex::Regex;
    ///
    /// let version = Regex::new(r"v(\d+)").unwrap();
    /// let path = Pathname::new("docs/v1/v2");
    /// assert_eq!(path.sub_regex(&version, "release-$1").to_string(), "docs/release-1/v2");
    /// assert_eq!(path.sub_regex(&version, "$1x").to_string(), "docs/1x/v2");
    /// ```
    #[must_use]
    pub fn sub_regex(&self, pattern: &Regex, replacement: &str) -> Self {
        let replacement = brace_numbered_groups(replacement);
        Self::new(pattern.replace(&self.raw, replacement.as_str()).into_owned())
    }

    /// Whether the path is absolute under the platform's rules.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.as_path().has_root()
    }

    /// Whether the path is relative under the platform's rules.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Whether the cleaned path is exactly its own root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// # #[cfg(unix)] {
    /// assert!(Pathname::new("/").is_root());
    /// assert!(Pathname::new("//.").is_root());
    /// assert!(!Pathname::new("/foo").is_root());
    /// # }
    /// assert!(!Pathname::new(".").is_root());
    /// ```
    #[must_use]
    pub fn is_root(&self) -> bool {
        clean(&self.raw) == root_of(&self.raw)
    }

    /// The path followed by each successive parent, child first.
    ///
    /// At most one entry more than there are separators in the path is
    /// produced, and the walk stops as soon as a root has been emitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let chain: Vec<String> = Pathname::new("foo/bar/baz")
    ///     .ascend()
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    /// assert_eq!(chain, ["foo/bar/baz", "foo/bar", "foo"]);
    /// ```
    #[must_use]
    pub fn ascend(&self) -> Vec<Self> {
        let limit = separator_count(&self.raw) + 1;
        let mut chain = Vec::with_capacity(limit);
        let mut current = self.clone();
        for _ in 0..limit {
            let at_root = current.is_root();
            chain.push(current.clone());
            if at_root {
                break;
            }
            current = current.parent();
        }
        chain
    }

    /// [`ascend`](Self::ascend) in reverse: root (or top) first.
    #[must_use]
    pub fn descend(&self) -> Vec<Self> {
        let mut chain = self.ascend();
        chain.reverse();
        chain
    }

    /// Call `visit` with each non-empty segment of the raw string, left to
    /// right.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let mut names = Vec::new();
    /// Pathname::new("foo//bar/").each_filename(|name| names.push(name.to_string()));
    /// assert_eq!(names, ["foo", "bar"]);
    /// ```
    pub fn each_filename<F>(&self, visit: F)
    where
        F: FnMut(&str),
    {
        self.raw
            .split(is_separator)
            .filter(|segment| !segment.is_empty())
            .for_each(visit);
    }

    /// This path expressed relative to `base`.
    ///
    /// # Errors
    ///
    /// Returns an error only when one of the paths is relative and the
    /// current directory cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// # #[cfg(unix)] {
    /// let path = Pathname::new("/hoge/foo/bar");
    /// let base = Pathname::new("/hoge");
    /// assert_eq!(path.relative_path_from(&base).unwrap().to_string(), "foo/bar");
    /// # }
    /// ```
    pub fn relative_path_from(&self, base: &Self) -> Result<Self> {
        normalize::relative(&base.raw, &self.raw).map(Self::new)
    }

    /// The absolute form of this path, relative paths being resolved against
    /// the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read.
    pub fn expand_path(&self) -> Result<Self> {
        self.expand_path_from(&normalize::current_dir()?)
    }

    /// The absolute form of this path, relative paths being resolved against
    /// `default_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error only when `default_dir` is itself relative and the
    /// current directory cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// # #[cfg(unix)] {
    /// let path = Pathname::new("foo/bar");
    /// assert_eq!(path.expand_path_from("/hoge").unwrap().to_string(), "/hoge/foo/bar");
    /// # }
    /// ```
    pub fn expand_path_from(&self, default_dir: impl AsRef<str>) -> Result<Self> {
        normalize::resolve(&self.raw, default_dir.as_ref()).map(Self::new)
    }

    /// This path with a leading `~` replaced by the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error for `~user` syntax or when the home directory cannot
    /// be determined.
    pub fn expand_tilde(&self) -> Result<Self> {
        normalize::expand_tilde(&self.raw).map(Self::new)
    }

    /// How this path relates to `other` in the directory hierarchy.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::{PathRelationship, Pathname};
    ///
    /// let project = Pathname::new("work/project");
    /// let src = project.join(["src"]);
    /// assert_eq!(project.relationship_to(&src), PathRelationship::Ancestor);
    /// ```
    #[must_use]
    pub fn relationship_to(&self, other: &Self) -> PathRelationship {
        PathRelationship::between(&self.raw, &other.raw)
    }

    /// Whether this path strictly contains `other`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.relationship_to(other) == PathRelationship::Ancestor
    }

    /// Whether this path lies strictly below `other`.
    #[must_use]
    pub fn is_descendant_of(&self, other: &Self) -> bool {
        self.relationship_to(other) == PathRelationship::Descendant
    }
}

/// Rewrite bare `$N` group references as `${N}`.
///
/// The regex crate reads `$1x` as the group named `1x`; here the digits
/// alone name the group. `$$` escapes are copied through untouched.
fn brace_numbered_groups(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                out.push_str("$$");
            }
            Some(d) if d.is_ascii_digit() => {
                out.push_str("${");
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    out.push(d);
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push('$'),
        }
    }
    out
}

impl fmt::Display for Pathname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Pathname {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Pathname {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Pathname {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<Pathname> for String {
    fn from(path: Pathname) -> Self {
        path.raw
    }
}

impl AsRef<str> for Pathname {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl AsRef<Path> for Pathname {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(paths: &[Pathname]) -> Vec<&str> {
        paths.iter().map(Pathname::as_str).collect()
    }

    #[test]
    fn test_new_keeps_raw_string() {
        for raw in ["", ".", "a//b", "./x/../", "~/y"] {
            assert_eq!(Pathname::new(raw).to_string(), raw);
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_ascend_absolute() {
        let path = Pathname::new("/foo/bar/baz");
        assert_eq!(
            strings(&path.ascend()),
            ["/foo/bar/baz", "/foo/bar", "/foo", "/"]
        );
    }

    #[test]
    fn test_ascend_single_segment() {
        assert_eq!(strings(&Pathname::new(".").ascend()), ["."]);
        assert_eq!(strings(&Pathname::new("foo").ascend()), ["foo"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_ascend_stops_at_root() {
        assert_eq!(strings(&Pathname::new("/").ascend()), ["/"]);
        // Redundant separators raise the bound, but the root ends the walk.
        assert_eq!(
            strings(&Pathname::new("//foo//").ascend()),
            ["//foo//", "/"]
        );
    }

    #[test]
    fn test_ascend_first_entry_is_unmodified() {
        let path = Pathname::new("./a/./b/");
        assert_eq!(path.ascend()[0], path);
    }

    #[test]
    #[cfg(unix)]
    fn test_descend_reverses_ascend() {
        let path = Pathname::new("/foo/bar/baz");
        let mut ascended = path.ascend();
        ascended.reverse();
        assert_eq!(path.descend(), ascended);
        assert_eq!(
            strings(&path.descend()),
            ["/", "/foo", "/foo/bar", "/foo/bar/baz"]
        );
    }

    #[test]
    fn test_split_matches_parts() {
        let path = Pathname::new("a/b/c.txt");
        assert_eq!(path.split(), (path.dirname(), path.basename()));
    }

    #[test]
    fn test_sub_ext_relative() {
        assert_eq!(Pathname::new("foo.txt").sub_ext(".csv").as_str(), "foo.csv");
        assert_eq!(
            Pathname::new("a/b.tar.gz").sub_ext(".zst").as_str(),
            "a/b.tar.zst"
        );
        assert_eq!(Pathname::new(".bashrc").sub_ext(".bak").as_str(), ".bashrc.bak");
    }

    #[test]
    fn test_sub_literal_first_match_only() {
        let path = Pathname::new("a.b.c");
        assert_eq!(path.sub(".", "/").as_str(), "a/b.c");
        assert_eq!(path.sub("x", "y").as_str(), "a.b.c");
    }

    #[test]
    fn test_sub_regex_first_match_only() {
        let digits = Regex::new(r"\d+").unwrap();
        let path = Pathname::new("log/2024/01/app.log");
        assert_eq!(path.sub_regex(&digits, "YYYY").as_str(), "log/YYYY/01/app.log");
    }

    #[test]
    fn test_sub_regex_group_followed_by_identifier() {
        let digits = Regex::new(r"(\d+)").unwrap();
        let path = Pathname::new("v12");
        assert_eq!(path.sub_regex(&digits, "$1x").as_str(), "v12x");
        assert_eq!(path.sub_regex(&digits, "${1}x").as_str(), "v12x");
        assert_eq!(path.sub_regex(&digits, "<$1>").as_str(), "v<12>");
    }

    #[test]
    fn test_sub_regex_escapes_and_named_groups() {
        let named = Regex::new(r"(?P<num>\d+)").unwrap();
        let path = Pathname::new("v12");
        assert_eq!(path.sub_regex(&named, "$$1").as_str(), "v$1");
        assert_eq!(path.sub_regex(&named, "$num-").as_str(), "v12-");
        assert_eq!(path.sub_regex(&named, "cost$").as_str(), "vcost$");
    }

    #[test]
    fn test_brace_numbered_groups() {
        assert_eq!(brace_numbered_groups("$1x"), "${1}x");
        assert_eq!(brace_numbered_groups("$12$3"), "${12}${3}");
        assert_eq!(brace_numbered_groups("${1}x"), "${1}x");
        assert_eq!(brace_numbered_groups("$$1"), "$$1");
        assert_eq!(brace_numbered_groups("no refs"), "no refs");
    }

    #[test]
    fn test_is_root_relative() {
        assert!(!Pathname::new("foo").is_root());
        assert!(!Pathname::new("").is_root());
        assert!(!Pathname::new("..").is_root());
    }

    #[test]
    fn test_relationship_helpers() {
        let a = Pathname::new("a");
        let ab = Pathname::new("a/b");
        assert!(a.is_ancestor_of(&ab));
        assert!(ab.is_descendant_of(&a));
        assert!(!a.is_ancestor_of(&a));
        assert!(!a.is_descendant_of(&a));
    }

    #[test]
    fn test_conversions() {
        let path: Pathname = "x/y".parse().unwrap();
        assert_eq!(path, Pathname::from("x/y"));
        assert_eq!(path, Pathname::from(String::from("x/y")));
        let raw: String = path.clone().into();
        assert_eq!(raw, "x/y");
        let as_path: &Path = path.as_ref();
        assert_eq!(as_path, Path::new("x/y"));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let path = Pathname::new("conf/app.toml");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"conf/app.toml\"");
        let back: Pathname = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
