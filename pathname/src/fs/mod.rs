//! Filesystem queries on a [`Pathname`].
//!
//! Every query is performed fresh on each call; nothing is cached. Errors
//! are reported as [`Error`] values carrying the operating system's error
//! unchanged.
//!
//! With the `async` feature enabled, each query also has a non-blocking
//! `*_async` form (see [`nonblocking`]).
//!
//! # Examples
//!
//! ```no_run
//! use pathname::Pathname;
//!
//! let manifest = Pathname::new("Cargo.toml");
//! if manifest.is_readable() {
//!     println!("{} is {} bytes", manifest, manifest.size()?);
//! }
//! # Ok::<(), pathname::Error>(())
//! ```

mod access;
#[cfg(feature = "async")]
pub mod nonblocking;

use std::fs::{self, Metadata};
use std::time::SystemTime;

pub use access::AccessMode;

use crate::error::{Error, Result};
use crate::pathname::Pathname;

/// Mask selecting the file type bits of a mode.
pub const S_IFMT: u32 = 0o170_000;

#[cfg(not(unix))]
const S_IFDIR: u32 = 0o040_000;
#[cfg(not(unix))]
const S_IFREG: u32 = 0o100_000;
#[cfg(not(unix))]
const S_IFLNK: u32 = 0o120_000;

#[cfg(unix)]
fn system_time_from_unix(secs: i64, nanos: i64) -> SystemTime {
    use std::time::{Duration, UNIX_EPOCH};

    // The nanosecond part is always a forward offset, even before the epoch.
    let nanos = Duration::from_nanos(u64::try_from(nanos).unwrap_or(0));
    let whole = Duration::from_secs(secs.unsigned_abs());
    if secs < 0 {
        UNIX_EPOCH - whole + nanos
    } else {
        UNIX_EPOCH + whole + nanos
    }
}

impl Pathname {
    fn io_error(&self, source: std::io::Error) -> Error {
        Error::from_io(self.as_str(), source)
    }

    #[cfg(not(unix))]
    fn unsupported(&self) -> Error {
        self.io_error(std::io::ErrorKind::Unsupported.into())
    }

    /// Metadata for the path, following a terminal symlink.
    ///
    /// # Errors
    ///
    /// Returns the operating system's error if the path cannot be stat'ed.
    pub fn stat(&self) -> Result<Metadata> {
        log::trace!("stat {self}");
        fs::metadata(self.as_path()).map_err(|e| self.io_error(e))
    }

    /// Metadata for the path itself, without following a terminal symlink.
    ///
    /// # Errors
    ///
    /// Returns the operating system's error if the path cannot be stat'ed.
    pub fn lstat(&self) -> Result<Metadata> {
        log::trace!("lstat {self}");
        fs::symlink_metadata(self.as_path()).map_err(|e| self.io_error(e))
    }

    /// Size of the file in bytes.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails.
    pub fn size(&self) -> Result<u64> {
        Ok(self.stat()?.len())
    }

    /// Last modification time.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails or the platform lacks the field.
    pub fn mtime(&self) -> Result<SystemTime> {
        self.stat()?.modified().map_err(|e| self.io_error(e))
    }

    /// Last access time.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails or the platform lacks the field.
    pub fn atime(&self) -> Result<SystemTime> {
        self.stat()?.accessed().map_err(|e| self.io_error(e))
    }

    /// Last status change time (inode change on Unix).
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails. Outside Unix there is no
    /// status change time and the error kind is
    /// [`Unsupported`](std::io::ErrorKind::Unsupported).
    pub fn ctime(&self) -> Result<SystemTime> {
        let metadata = self.stat()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(system_time_from_unix(metadata.ctime(), metadata.ctime_nsec()))
        }
        #[cfg(not(unix))]
        {
            let _ = metadata;
            Err(self.unsupported())
        }
    }

    /// Creation time.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails or the platform or filesystem
    /// does not record creation times.
    pub fn birthtime(&self) -> Result<SystemTime> {
        self.stat()?.created().map_err(|e| self.io_error(e))
    }

    /// Whether the path is a regular file.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails.
    pub fn is_file(&self) -> Result<bool> {
        Ok(self.stat()?.is_file())
    }

    /// Whether the path is a directory.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails.
    pub fn is_directory(&self) -> Result<bool> {
        Ok(self.stat()?.is_dir())
    }

    /// Whether the path itself is a symbolic link.
    ///
    /// # Errors
    ///
    /// Fails when [`lstat`](Self::lstat) fails.
    pub fn is_symbolic_link(&self) -> Result<bool> {
        Ok(self.lstat()?.file_type().is_symlink())
    }

    /// Whether the path is a block device.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails.
    pub fn is_block_device(&self) -> Result<bool> {
        let metadata = self.stat()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            Ok(metadata.file_type().is_block_device())
        }
        #[cfg(not(unix))]
        {
            let _ = metadata;
            Ok(false)
        }
    }

    /// Whether the path is a character device.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails.
    pub fn is_character_device(&self) -> Result<bool> {
        let metadata = self.stat()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            Ok(metadata.file_type().is_char_device())
        }
        #[cfg(not(unix))]
        {
            let _ = metadata;
            Ok(false)
        }
    }

    /// Whether the path is a FIFO (named pipe).
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails.
    pub fn is_fifo(&self) -> Result<bool> {
        let metadata = self.stat()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            Ok(metadata.file_type().is_fifo())
        }
        #[cfg(not(unix))]
        {
            let _ = metadata;
            Ok(false)
        }
    }

    /// Same as [`is_fifo`](Self::is_fifo).
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails.
    pub fn is_pipe(&self) -> Result<bool> {
        self.is_fifo()
    }

    /// Whether the path is a Unix domain socket.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails.
    pub fn is_socket(&self) -> Result<bool> {
        let metadata = self.stat()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            Ok(metadata.file_type().is_socket())
        }
        #[cfg(not(unix))]
        {
            let _ = metadata;
            Ok(false)
        }
    }

    /// The file type bits of the mode (`mode & S_IFMT`).
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails.
    pub fn file_type(&self) -> Result<u32> {
        let metadata = self.stat()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(metadata.mode() & S_IFMT)
        }
        #[cfg(not(unix))]
        {
            let file_type = metadata.file_type();
            Ok(if file_type.is_dir() {
                S_IFDIR
            } else if file_type.is_symlink() {
                S_IFLNK
            } else {
                S_IFREG
            })
        }
    }

    /// Whether the file is zero bytes long.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.size()? == 0)
    }

    /// Same as [`is_empty`](Self::is_empty).
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails.
    pub fn is_zero(&self) -> Result<bool> {
        self.is_empty()
    }

    /// Check `mode` access to the path, returning the refusal as an error.
    ///
    /// # Errors
    ///
    /// Returns the operating system's error when access is refused.
    pub fn check_access(&self, mode: AccessMode) -> Result<()> {
        log::trace!("access {self} ({mode:?})");
        access::access(self.as_str(), mode).map_err(|e| self.io_error(e))
    }

    /// Whether the path resolves to anything.
    #[must_use]
    pub fn is_exist(&self) -> bool {
        self.check_access(AccessMode::Exists).is_ok()
    }

    /// Whether the process may read the path.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.check_access(AccessMode::Read).is_ok()
    }

    /// Whether the process may write the path.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.check_access(AccessMode::Write).is_ok()
    }

    /// Whether the process may execute (or search) the path.
    #[must_use]
    pub fn is_executable(&self) -> bool {
        self.check_access(AccessMode::Execute).is_ok()
    }

    /// Whether the file is owned by the effective user of the process.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails. Outside Unix file ownership
    /// is not exposed and the error kind is
    /// [`Unsupported`](std::io::ErrorKind::Unsupported).
    pub fn is_owned(&self) -> Result<bool> {
        let metadata = self.stat()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(metadata.uid() == access::effective_uid())
        }
        #[cfg(not(unix))]
        {
            let _ = metadata;
            Err(self.unsupported())
        }
    }

    /// Whether the file's group is the effective group of the process.
    ///
    /// # Errors
    ///
    /// Fails when [`stat`](Self::stat) fails. Outside Unix file ownership
    /// is not exposed and the error kind is
    /// [`Unsupported`](std::io::ErrorKind::Unsupported).
    pub fn is_group_owned(&self) -> Result<bool> {
        let metadata = self.stat()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(metadata.gid() == access::effective_gid())
        }
        #[cfg(not(unix))]
        {
            let _ = metadata;
            Err(self.unsupported())
        }
    }

    /// The canonical absolute path, with every symlink resolved.
    ///
    /// # Errors
    ///
    /// Fails when the path does not exist, cannot be accessed, or resolves
    /// to a path that is not valid UTF-8.
    pub fn realpath(&self) -> Result<Self> {
        log::trace!("realpath {self}");
        let canonical = fs::canonicalize(self.as_path()).map_err(|e| self.io_error(e))?;
        canonical
            .into_os_string()
            .into_string()
            .map(Self::new)
            .map_err(|raw| Error::InvalidPath {
                path: raw.into(),
                reason: "Canonical path contains invalid UTF-8".to_string(),
            })
    }
}
