//! Path relationship checking.
//!
//! This module determines whether one path lies above, below or beside
//! another. The comparison is lexical: both paths are cleaned and compared
//! segment by segment, without resolving symlinks or consulting the current
//! directory.

use std::fmt;

use super::normalize::clean;
use super::syntax::{root_of, segments};

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathname::path::PathRelationship;
///
/// assert_eq!(
///     PathRelationship::between("/home/user", "/home/user/project"),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths clean to the same string.
    Same,

    /// Neither path contains the other.
    ///
    /// This includes an absolute path compared with a relative one, and
    /// relative paths that climb out with different numbers of `..`.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::path::PathRelationship;
    ///
    /// assert_eq!(PathRelationship::between("a", "a/b"), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between("a/b", "a"), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between("a/./b", "a/b/"), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between("a", "b"), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &str, path2: &str) -> Self {
        let p1 = clean(path1);
        let p2 = clean(path2);

        if root_of(&p1) != root_of(&p2) {
            return Self::Unrelated;
        }

        let s1 = comparable_segments(&p1);
        let s2 = comparable_segments(&p2);

        if s1 == s2 {
            Self::Same
        } else if s2.starts_with(&s1) {
            Self::Ancestor
        } else if s1.starts_with(&s2) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    #[must_use]
    pub fn is_within(path: &str, directory: &str) -> bool {
        matches!(Self::between(path, directory), Self::Descendant | Self::Same)
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &str, other: &str) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::path::PathRelationship;
    ///
    /// let desc = PathRelationship::Ancestor.description("/a", "/a/b");
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &str, path2: &str) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

impl fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
            Self::Same => write!(f, "same"),
            Self::Unrelated => write!(f, "unrelated"),
        }
    }
}

/// Segments of a cleaned path, with the lone `.` of an empty relative path
/// treated as no segments at all.
fn comparable_segments(cleaned: &str) -> Vec<&str> {
    segments(cleaned).filter(|s| *s != ".").collect()
}
