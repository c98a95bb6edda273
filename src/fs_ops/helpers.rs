//! I/O error helpers.
//!
//! Turn a bare io::Error into a `SorterError` whose message names the operation,
//! the path and a platform-aware hint.
//!
//! Usage:
//!   fs::create_dir_all(dir).map_err(create_dir_error(dir))?;
//!   fs::rename(src, dest).map_err(move_error(src, dest))?;

use std::io;
use std::path::Path;

use crate::errors::SorterError;

/// Hint for a raw OS error code, if we know a useful one.
#[cfg(unix)]
fn os_code_hint(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
        libc::EXDEV => Some("cross-filesystem; input and output roots must share a device"),
        libc::EBUSY => Some("resource busy; ensure no other process is using it"),
        libc::ENOENT => Some("path not found; it may have been removed during the run"),
        libc::ENOSPC => Some("insufficient space on device"),
        libc::EROFS => Some("read-only filesystem; cannot write here"),
        libc::ENOTDIR => Some("a path component is not a directory"),
        libc::EISDIR => Some("destination is an existing directory"),
        libc::ENAMETOOLONG => Some("filename or path too long"),
        _ => None,
    }
}

// Common Win32 error codes.
#[cfg(windows)]
fn os_code_hint(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("access denied; check permissions"),
        17 => Some("not same device; input and output roots must share a device"),
        32 => Some("sharing violation; file is in use"),
        2 | 3 => Some("path not found; it may have been removed during the run"),
        112 => Some("insufficient disk space"),
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn os_code_hint(_code: i32) -> Option<&'static str> {
    None
}

/// Hint derived from the error kind when no OS code is available.
fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and write permissions")
        }
        io::ErrorKind::NotFound => Some("path not found; it may have been removed during the run"),
        io::ErrorKind::AlreadyExists => Some("already exists and is not a directory"),
        _ => None,
    }
}

/// Format "<op> '<path>': <error> (<hint>) [os code: N]".
pub(crate) fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => os_code_hint(code),
        None => kind_hint(e.kind()),
    };
    if let Some(hint) = hint {
        msg.push_str(&format!(" ({hint})"));
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Adapter for `.map_err(...)` on directory creation.
pub(crate) fn create_dir_error(path: &Path) -> impl FnOnce(io::Error) -> SorterError + '_ {
    move |e: io::Error| SorterError::CreateDir {
        path: path.to_path_buf(),
        message: build_message("create destination directory", path, &e),
        source: e,
    }
}

/// Adapter for `.map_err(...)` on the rename of a single file.
pub(crate) fn move_error<'a>(
    src: &'a Path,
    dest: &'a Path,
) -> impl FnOnce(io::Error) -> SorterError + 'a {
    move |e: io::Error| SorterError::Move {
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        message: build_message(&format!("move '{}' to", src.display()), dest, &e),
        source: e,
    }
}
