//! Non-blocking forms of the filesystem queries.
//!
//! Each `*_async` method hands a copy of the path to tokio's blocking pool
//! and runs the very same blocking query there, so both forms always agree.
//! The returned future resolves exactly once, with either the query's value
//! or its error. Queries are never cancelled or timed out by this library.
//!
//! These methods must be awaited from within a tokio runtime.
//!
//! # Examples
//!
//! ```no_run
//! use pathname::Pathname;
//!
//! # async fn demo() -> pathname::Result<()> {
//! let log = Pathname::new("/var/log/syslog");
//! if log.is_readable_async().await {
//!     println!("{} bytes", log.size_async().await?);
//! }
//! # Ok(())
//! # }
//! ```

use std::fs::Metadata;
use std::time::SystemTime;

use super::AccessMode;
use crate::error::{Error, Result};
use crate::pathname::Pathname;

impl Pathname {
    /// Run `query` against a copy of this path on the blocking pool.
    async fn spawn_query<T, F>(&self, query: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Self) -> Result<T> + Send + 'static,
    {
        let path = self.clone();
        match tokio::task::spawn_blocking(move || query(&path)).await {
            Ok(result) => result,
            Err(source) => {
                log::warn!("filesystem task for {self} failed: {source}");
                Err(Error::TaskFailed { source })
            }
        }
    }

    /// Non-blocking [`stat`](Self::stat).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn stat_async(&self) -> Result<Metadata> {
        self.spawn_query(Self::stat).await
    }

    /// Non-blocking [`lstat`](Self::lstat).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn lstat_async(&self) -> Result<Metadata> {
        self.spawn_query(Self::lstat).await
    }

    /// Non-blocking [`size`](Self::size).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn size_async(&self) -> Result<u64> {
        self.spawn_query(Self::size).await
    }

    /// Non-blocking [`mtime`](Self::mtime).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn mtime_async(&self) -> Result<SystemTime> {
        self.spawn_query(Self::mtime).await
    }

    /// Non-blocking [`atime`](Self::atime).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn atime_async(&self) -> Result<SystemTime> {
        self.spawn_query(Self::atime).await
    }

    /// Non-blocking [`ctime`](Self::ctime).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn ctime_async(&self) -> Result<SystemTime> {
        self.spawn_query(Self::ctime).await
    }

    /// Non-blocking [`birthtime`](Self::birthtime).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn birthtime_async(&self) -> Result<SystemTime> {
        self.spawn_query(Self::birthtime).await
    }

    /// Non-blocking [`is_file`](Self::is_file).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_file_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_file).await
    }

    /// Non-blocking [`is_directory`](Self::is_directory).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_directory_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_directory).await
    }

    /// Non-blocking [`is_symbolic_link`](Self::is_symbolic_link).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_symbolic_link_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_symbolic_link).await
    }

    /// Non-blocking [`is_block_device`](Self::is_block_device).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_block_device_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_block_device).await
    }

    /// Non-blocking [`is_character_device`](Self::is_character_device).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_character_device_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_character_device).await
    }

    /// Non-blocking [`is_fifo`](Self::is_fifo).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_fifo_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_fifo).await
    }

    /// Non-blocking [`is_pipe`](Self::is_pipe).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_pipe_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_pipe).await
    }

    /// Non-blocking [`is_socket`](Self::is_socket).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_socket_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_socket).await
    }

    /// Non-blocking [`file_type`](Self::file_type).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn file_type_async(&self) -> Result<u32> {
        self.spawn_query(Self::file_type).await
    }

    /// Non-blocking [`is_empty`](Self::is_empty).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_empty_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_empty).await
    }

    /// Non-blocking [`is_zero`](Self::is_zero).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_zero_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_zero).await
    }

    /// Non-blocking [`is_owned`](Self::is_owned).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_owned_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_owned).await
    }

    /// Non-blocking [`is_group_owned`](Self::is_group_owned).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn is_group_owned_async(&self) -> Result<bool> {
        self.spawn_query(Self::is_group_owned).await
    }

    /// Non-blocking [`realpath`](Self::realpath).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn realpath_async(&self) -> Result<Self> {
        self.spawn_query(Self::realpath).await
    }

    /// Non-blocking [`check_access`](Self::check_access).
    ///
    /// # Errors
    ///
    /// Same as the blocking form, plus [`Error::TaskFailed`].
    pub async fn check_access_async(&self, mode: AccessMode) -> Result<()> {
        self.spawn_query(move |path| path.check_access(mode)).await
    }

    /// Non-blocking [`is_exist`](Self::is_exist).
    pub async fn is_exist_async(&self) -> bool {
        self.check_access_async(AccessMode::Exists).await.is_ok()
    }

    /// Non-blocking [`is_readable`](Self::is_readable).
    pub async fn is_readable_async(&self) -> bool {
        self.check_access_async(AccessMode::Read).await.is_ok()
    }

    /// Non-blocking [`is_writable`](Self::is_writable).
    pub async fn is_writable_async(&self) -> bool {
        self.check_access_async(AccessMode::Write).await.is_ok()
    }

    /// Non-blocking [`is_executable`](Self::is_executable).
    pub async fn is_executable_async(&self) -> bool {
        self.check_access_async(AccessMode::Execute).await.is_ok()
    }
}
