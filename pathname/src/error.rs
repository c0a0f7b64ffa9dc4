//! Error types for the pathname library.
//!
//! Filesystem failures keep the original [`std::io::Error`] as their source,
//! so callers can always recover the exact [`std::io::ErrorKind`] reported by
//! the operating system. The only thing this module adds is the path that was
//! being queried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathname error.
///
/// # Examples
///
/// ```
/// use pathname::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathname library.
#[derive(Debug, Error)]
pub enum Error {
    /// The path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was queried.
        path: PathBuf,
        /// The error reported by the operating system.
        #[source]
        source: io::Error,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
        /// The error reported by the operating system.
        #[source]
        source: io::Error,
    },

    /// Any other I/O error reported for a path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path that was queried.
        path: PathBuf,
        /// The error reported by the operating system.
        #[source]
        source: io::Error,
    },

    /// A path could not be produced or interpreted.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A non-blocking query never produced a result because its task died.
    #[cfg(feature = "async")]
    #[error("filesystem task failed: {source}")]
    TaskFailed {
        /// The join error reported by the runtime.
        #[source]
        source: tokio::task::JoinError,
    },
}

impl Error {
    /// Wrap an I/O error raised while querying `path`.
    ///
    /// The error is filed under the variant matching its kind; the original
    /// error is kept untouched as the source.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let err = Pathname::new("/nonexistent/pathname/test").stat().unwrap_err();
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// The underlying operating system error, if this error carries one.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::PathNotFound { source, .. }
            | Self::PermissionDenied { source, .. }
            | Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The kind of the underlying I/O error.
    ///
    /// Errors that did not come from the operating system report
    /// [`io::ErrorKind::Other`].
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.io_error().map_or(io::ErrorKind::Other, io::Error::kind)
    }
}
