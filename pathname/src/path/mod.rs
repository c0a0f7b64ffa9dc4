//! String-level path algebra.
//!
//! These modules implement the pure half of [`Pathname`](crate::Pathname)
//! on plain `&str` values:
//!
//! - [`syntax`]: what counts as a separator and where a root ends
//! - [`segments`]: dirname, basename and extension of a path string
//! - [`normalize`]: cleaning, joining, resolving and relating paths
//! - [`relationship`]: ancestor/descendant comparison
//!
//! # Examples
//!
//! ```
//! use pathname::path::{normalize, segments};
//!
//! let joined = normalize::join("foo/bar", &["..", "baz.txt"]);
//! assert_eq!(joined, "foo/baz.txt");
//! assert_eq!(segments::extname(&joined), ".txt");
//! ```

pub mod normalize;
pub mod relationship;
pub mod segments;
pub mod syntax;

#[cfg(all(test, unix, feature = "property-tests"))]
mod proptests;

pub use relationship::PathRelationship;
