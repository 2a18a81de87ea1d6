//! Directory existence filter.
//!
//! Only used when the caller asks for existence checks. A failed check
//! drops the entry; it never ends the run.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::normalize::to_windows;
use crate::error::{Error, Result};

/// Reinterpret a normalized path as a native filesystem path.
///
/// On Windows the drive prefix and separators are converted back with
/// [`to_windows`]; elsewhere the Unix form already is native.
#[must_use]
pub fn native_path(normalized: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(to_windows(normalized))
    } else {
        PathBuf::from(normalized)
    }
}

/// Verify that `path` is an existing directory.
///
/// # Errors
///
/// - [`Error::PathNotFound`] if nothing exists at `path`
/// - [`Error::NotADirectory`] if it exists but is not a directory
/// - [`Error::Inaccessible`] if the stat call fails for any other reason
pub fn verify_directory(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Inaccessible {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Check a normalized `PATH` entry against the filesystem.
///
/// # Errors
///
/// See [`verify_directory`].
pub fn check_entry(normalized: &str) -> Result<()> {
    verify_directory(&native_path(normalized))
}
