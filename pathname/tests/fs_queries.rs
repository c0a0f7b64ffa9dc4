//! Integration tests for the blocking filesystem queries.
//!
//! This test suite verifies that:
//! - Metadata queries report sizes and timestamps of real files
//! - Type predicates distinguish files, directories, links and special files
//! - Access predicates answer `false` rather than failing
//! - Missing paths surface as errors carrying the offending path

mod common;

use std::fs;
use std::time::{Duration, SystemTime};

use common::Fixture;
use pathname::{AccessMode, Pathname};

#[test]
fn test_stat_of_manifest() {
    let manifest = Pathname::new(env!("CARGO_MANIFEST_DIR")).join(["Cargo.toml"]);
    let metadata = manifest.stat().unwrap();
    assert!(metadata.is_file());
    assert_eq!(metadata.len(), manifest.size().unwrap());
}

#[test]
fn test_size_and_emptiness() {
    let fixture = Fixture::new();
    let full = fixture.file("full.txt", "hello");
    let empty = fixture.file("empty.txt", "");

    assert_eq!(full.size().unwrap(), 5);
    assert!(!full.is_empty().unwrap());
    assert!(empty.is_empty().unwrap());
    assert!(empty.is_zero().unwrap());
}

#[test]
fn test_timestamps_are_recent() {
    let fixture = Fixture::new();
    let file = fixture.file("stamp.txt", "x");
    let an_hour_ago = SystemTime::now() - Duration::from_secs(3600);

    assert!(file.mtime().unwrap() > an_hour_ago);
    assert!(file.atime().unwrap() > an_hour_ago);
    #[cfg(unix)]
    assert!(file.ctime().unwrap() > an_hour_ago);
    // Not every filesystem records a creation time.
    if let Ok(born) = file.birthtime() {
        assert!(born > an_hour_ago);
    }
}

#[test]
fn test_type_predicates_for_file_and_directory() {
    let fixture = Fixture::new();
    let file = fixture.file("a/b.txt", "data");
    let dir = fixture.dir("a");

    assert!(file.is_file().unwrap());
    assert!(!file.is_directory().unwrap());
    assert!(dir.is_directory().unwrap());
    assert!(!dir.is_file().unwrap());
    assert!(!file.is_symbolic_link().unwrap());
    assert!(!file.is_fifo().unwrap());
    assert!(!file.is_socket().unwrap());
    assert!(!file.is_block_device().unwrap());
    assert!(!file.is_character_device().unwrap());
}

#[test]
#[cfg(unix)]
fn test_file_type_bits() {
    let fixture = Fixture::new();
    let file = fixture.file("plain", "");
    let dir = fixture.dir("sub");

    assert_eq!(file.file_type().unwrap(), libc::S_IFREG as u32);
    assert_eq!(dir.file_type().unwrap(), libc::S_IFDIR as u32);
    assert_eq!(file.file_type().unwrap() & !pathname::fs::S_IFMT, 0);
}

#[test]
#[cfg(unix)]
fn test_symbolic_link_is_not_followed_by_lstat() {
    let fixture = Fixture::new();
    let target = fixture.file("target.txt", "payload");
    let link = fixture.symlink(target.as_str(), "link.txt");

    assert!(link.is_symbolic_link().unwrap());
    assert!(link.is_file().unwrap());
    assert!(link.lstat().unwrap().file_type().is_symlink());
    assert_eq!(link.size().unwrap(), 7);
}

#[test]
#[cfg(unix)]
fn test_dangling_symbolic_link() {
    let fixture = Fixture::new();
    let link = fixture.symlink("nowhere", "dangling");

    assert!(link.is_symbolic_link().unwrap());
    assert!(link.stat().unwrap_err().is_not_found());
    assert!(!link.is_exist());
}

#[test]
#[cfg(unix)]
fn test_realpath_resolves_links() {
    let fixture = Fixture::new();
    fixture.dir("real/inner");
    fixture.symlink("real", "alias");

    let resolved = fixture.path("alias/inner").realpath().unwrap();
    let expected = fixture.path("real/inner").realpath().unwrap();
    assert_eq!(resolved, expected);
    assert!(resolved.is_absolute());
}

#[test]
#[cfg(unix)]
fn test_character_device() {
    let null = Pathname::new("/dev/null");
    assert!(null.is_character_device().unwrap());
    assert!(!null.is_block_device().unwrap());
    assert!(!null.is_file().unwrap());
}

#[test]
#[cfg(unix)]
fn test_fifo_and_pipe() {
    use std::ffi::CString;

    let fixture = Fixture::new();
    let fifo = fixture.path("queue");
    let c_path = CString::new(fifo.as_str()).unwrap();
    let rc = unsafe { libc::mkfifo(c_path.as_ptr(), 0o600) };
    assert_eq!(rc, 0, "mkfifo failed");

    assert!(fifo.is_fifo().unwrap());
    assert!(fifo.is_pipe().unwrap());
    assert!(!fifo.is_file().unwrap());
}

#[test]
#[cfg(unix)]
fn test_socket() {
    let fixture = Fixture::new();
    let socket = fixture.path("app.sock");
    let _listener = std::os::unix::net::UnixListener::bind(socket.as_str()).unwrap();

    assert!(socket.is_socket().unwrap());
    assert!(!socket.is_fifo().unwrap());
}

#[test]
fn test_access_predicates_on_existing_file() {
    let fixture = Fixture::new();
    let file = fixture.file("rw.txt", "x");

    assert!(file.is_exist());
    assert!(file.is_readable());
    assert!(file.is_writable());
    assert!(file.check_access(AccessMode::Read).is_ok());
}

#[test]
fn test_access_predicates_on_missing_path_are_false() {
    let fixture = Fixture::new();
    let missing = fixture.path("missing");

    assert!(!missing.is_exist());
    assert!(!missing.is_readable());
    assert!(!missing.is_writable());
    assert!(!missing.is_executable());
}

#[test]
#[cfg(unix)]
fn test_access_predicates_follow_permission_bits() {
    let fixture = Fixture::new();
    let script = fixture.file("run.sh", "#!/bin/sh\n");
    let locked = fixture.file("locked", "secret");

    fixture.chmod(&script, 0o700);
    fixture.chmod(&locked, 0o000);

    assert!(script.is_executable());
    assert!(locked.is_exist());
    if !common::running_as_root() {
        assert!(!locked.is_readable());
        assert!(!locked.is_writable());
        let err = locked.check_access(AccessMode::Read).unwrap_err();
        assert!(err.is_permission_denied());
    }

    fixture.chmod(&locked, 0o600);
}

#[test]
#[cfg(unix)]
fn test_ownership_of_created_file() {
    let fixture = Fixture::new();
    let file = fixture.file("mine.txt", "");

    assert!(file.is_owned().unwrap());
    assert!(file.is_group_owned().is_ok());
}

#[test]
fn test_missing_path_errors_carry_path() {
    let fixture = Fixture::new();
    let missing = fixture.path("nope/never");

    let err = missing.size().unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("never"));

    assert!(missing.is_file().is_err());
    assert!(missing.is_directory().is_err());
    assert!(missing.mtime().is_err());
}

#[test]
fn test_queries_do_not_modify_path() {
    let fixture = Fixture::new();
    let file = fixture.file("keep.txt", "abc");
    let before = file.clone();

    let _ = file.stat();
    let _ = file.is_readable();
    assert_eq!(file, before);
    assert_eq!(fs::read_to_string(file.as_str()).unwrap(), "abc");
}
