//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for laying out small directory
//! trees under a temporary directory.

use std::fs;
use std::path::Path;

use pathname::Pathname;
use tempfile::TempDir;

/// A temporary directory tree that is removed when dropped.
pub struct Fixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl Fixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temporary directory"),
        }
    }

    /// The fixture root as a `Pathname`.
    pub fn root(&self) -> Pathname {
        Pathname::new(self.dir.path().to_str().expect("temp dir is not UTF-8"))
    }

    /// A path below the fixture root. Nothing is created.
    pub fn path(&self, relative: &str) -> Pathname {
        self.root().join([relative])
    }

    /// Writes `contents` to `relative`, creating parent directories.
    pub fn file(&self, relative: &str, contents: &str) -> Pathname {
        let path = self.path(relative);
        if let Some(parent) = Path::new(path.as_str()).parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories");
        }
        fs::write(path.as_str(), contents).expect("failed to write fixture file");
        path
    }

    /// Creates the directory `relative` and any missing parents.
    pub fn dir(&self, relative: &str) -> Pathname {
        let path = self.path(relative);
        fs::create_dir_all(path.as_str()).expect("failed to create fixture directory");
        path
    }

    /// Creates a symbolic link at `link` pointing to `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, link: &str) -> Pathname {
        let path = self.path(link);
        std::os::unix::fs::symlink(target, path.as_str()).expect("failed to create symlink");
        path
    }

    /// Sets the Unix permission bits of `path`.
    #[cfg(unix)]
    pub fn chmod(&self, path: &Pathname, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path.as_str(), fs::Permissions::from_mode(mode))
            .expect("failed to set permissions");
    }
}

/// Whether the tests run with root privileges, which bypass permission bits.
#[cfg(unix)]
#[allow(dead_code)]
pub fn running_as_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}
