#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathname
//!
//! An immutable path value with pure path algebra and filesystem queries.
//!
//! A [`Pathname`] wraps a path string without touching the filesystem.
//! Its transformations (cleaning, joining, splitting, extension handling,
//! relative and absolute forms) are purely lexical and always return a new
//! value. Filesystem queries (metadata, type predicates, permission checks)
//! come in a blocking form and, with the `async` feature, a non-blocking
//! `*_async` form that always agrees with it.
//!
//! ## Core Types
//!
//! - [`Pathname`]: The path value itself
//! - [`PathRelationship`]: Ancestor/descendant comparison of two paths
//! - [`AccessMode`]: The permission asked for by an access check
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathname::Pathname;
//!
//! let path = Pathname::new("src/lib/../main.rs");
//! assert_eq!(path.cleanpath().to_string(), "src/main.rs");
//! assert_eq!(path.basename().to_string(), "main.rs");
//! assert_eq!(path.extname(), ".rs");
//! assert!(path.is_relative());
//! ```

pub mod error;
pub mod fs;
pub mod logging;
pub mod path;
mod pathname;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use fs::AccessMode;
pub use logging::{init_logger, LogLevel, Logger};
pub use path::PathRelationship;
pub use pathname::Pathname;
