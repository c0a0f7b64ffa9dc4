//! Permission checks and process identity.
//!
//! On Unix these are thin wrappers over `access(2)`, `geteuid(2)` and
//! `getegid(2)`. Elsewhere the checks are approximated from metadata: read
//! access is granted to every existing path, write access follows the
//! read-only flag, and execute access is granted to directories and to
//! files ending in `.exe`, `.com`, `.bat` or `.cmd`.

use std::io;

/// The permission asked for by an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// The path resolves to something (`F_OK`).
    Exists,
    /// The process may read the path (`R_OK`).
    Read,
    /// The process may write the path (`W_OK`).
    Write,
    /// The process may execute or search the path (`X_OK`).
    Execute,
}

#[cfg(unix)]
mod imp {
    #![allow(unsafe_code)]

    use std::ffi::CString;
    use std::io;

    use super::AccessMode;

    impl AccessMode {
        fn bits(self) -> libc::c_int {
            match self {
                Self::Exists => libc::F_OK,
                Self::Read => libc::R_OK,
                Self::Write => libc::W_OK,
                Self::Execute => libc::X_OK,
            }
        }
    }

    pub fn access(path: &str, mode: AccessMode) -> io::Result<()> {
        let c_path = CString::new(path).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "path contains an interior NUL byte",
            )
        })?;
        // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
        let rc = unsafe { libc::access(c_path.as_ptr(), mode.bits()) };
        if rc == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }

    pub fn effective_uid() -> u32 {
        // SAFETY: geteuid has no preconditions and cannot fail.
        unsafe { libc::geteuid() }
    }

    pub fn effective_gid() -> u32 {
        // SAFETY: getegid has no preconditions and cannot fail.
        unsafe { libc::getegid() }
    }
}

#[cfg(not(unix))]
mod imp {
    use std::fs;
    use std::io;

    use super::{has_executable_extension, AccessMode};

    pub fn access(path: &str, mode: AccessMode) -> io::Result<()> {
        let metadata = fs::metadata(path)?;
        let refused = match mode {
            AccessMode::Exists | AccessMode::Read => None,
            AccessMode::Write if metadata.permissions().readonly() => Some("file is read-only"),
            AccessMode::Write => None,
            AccessMode::Execute if metadata.is_dir() || has_executable_extension(path) => None,
            AccessMode::Execute => Some("file does not have an executable extension"),
        };
        match refused {
            Some(reason) => Err(io::Error::new(io::ErrorKind::PermissionDenied, reason)),
            None => Ok(()),
        }
    }
}

/// Extensions treated as executable where there are no execute bits.
#[cfg(any(not(unix), test))]
const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "com", "bat", "cmd"];

/// Whether the last segment of `path` ends in an executable extension.
#[cfg(any(not(unix), test))]
fn has_executable_extension(path: &str) -> bool {
    let ext = crate::path::segments::extname(path);
    ext.strip_prefix('.').is_some_and(|ext| {
        EXECUTABLE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    })
}

/// Check whether the calling process has `mode` access to `path`.
///
/// The operating system error is returned unchanged when access is refused.
pub(crate) fn access(path: &str, mode: AccessMode) -> io::Result<()> {
    imp::access(path, mode)
}

#[cfg(unix)]
pub(crate) use imp::{effective_gid, effective_uid};
