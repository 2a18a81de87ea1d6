//! Error types for the regpath library.
//!
//! This module provides the error hierarchy for reading registry scopes and
//! converting their `PATH` entries, using `thiserror` for ergonomic error
//! handling.
//!
//! The entry-level variants ([`Error::UnresolvedVariable`],
//! [`Error::EmptyEntry`], [`Error::PathNotFound`], [`Error::NotADirectory`]
//! and [`Error::Inaccessible`]) drop a single `PATH` entry and are otherwise
//! only logged. Everything else ends the run.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for operations that may fail with a regpath error.
///
/// # Examples
///
/// ```
/// use regpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/c/Windows".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the regpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The environment query command could not be spawned.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// The command line that was attempted.
        command: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The environment query command ran but reported failure.
    #[error("`{command}` failed with {status}: {}", stderr.trim())]
    Execution {
        /// The command line that was run.
        command: String,
        /// The exit status reported by the command.
        status: ExitStatus,
        /// Whatever the command wrote to stderr.
        stderr: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `%NAME%` reference has no value in the volatile scope.
    #[error("unknown variable {name:?} in {entry:?}")]
    UnresolvedVariable {
        /// The variable name as written in the entry.
        name: String,
        /// The raw `PATH` entry containing the reference.
        entry: String,
    },

    /// The entry has nothing left after trimming and expansion.
    #[error("empty path entry")]
    EmptyEntry,

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A path exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A path could not be inspected.
    #[error("cannot access {}: {source}", path.display())]
    Inaccessible {
        /// The path that could not be inspected.
        path: PathBuf,
        /// The underlying stat error.
        #[source]
        source: std::io::Error,
    },

    /// The tool was started on an unsupported operating system.
    #[error("This tool was meant to be run on windows (running on {os})")]
    WrongPlatform {
        /// The host operating system name.
        os: String,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use regpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error only invalidates a single `PATH` entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use regpath::Error;
    ///
    /// assert!(Error::EmptyEntry.is_skippable());
    /// assert!(!Error::WrongPlatform { os: "linux".into() }.is_skippable());
    /// ```
    #[must_use]
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedVariable { .. }
                | Self::EmptyEntry
                | Self::PathNotFound { .. }
                | Self::NotADirectory { .. }
                | Self::Inaccessible { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error() {
        let err = Error::Spawn {
            command: "reg query HKCU\\Environment".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
        };
        let display = format!("{err}");
        assert!(display.contains("failed to run"));
        assert!(display.contains("reg query"));
        assert!(display.contains("program not found"));
        assert!(!err.is_skippable());
    }

    #[test]
    fn test_unresolved_variable_error() {
        let err = Error::UnresolvedVariable {
            name: "FOO".to_string(),
            entry: "%FOO%\\bar".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("unknown variable"));
        assert!(display.contains("FOO"));
        assert!(err.is_skippable());
    }

    #[test]
    fn test_path_not_found_error() {
        let err = Error::PathNotFound {
            path: PathBuf::from("/c/missing"),
        };
        let display = format!("{err}");
        assert!(display.contains("path not found"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/c/missing"));
        assert!(err.is_not_found());
        assert!(err.is_skippable());
    }

    #[test]
    fn test_not_a_directory_error() {
        let err = Error::NotADirectory {
            path: PathBuf::from("/c/file.txt"),
        };
        let display = format!("{err}");
        assert!(display.contains("not a directory"));
        assert!(!err.is_not_found());
        assert!(err.is_skippable());
    }

    #[test]
    fn test_inaccessible_error() {
        let err = Error::Inaccessible {
            path: PathBuf::from("/c/locked"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access is denied"),
        };
        let display = format!("{err}");
        assert!(display.contains("cannot access"));
        assert!(display.contains("access is denied"));
        assert!(err.is_skippable());
    }

    #[test]
    fn test_wrong_platform_error() {
        let err = Error::WrongPlatform {
            os: "linux".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("meant to be run on windows"));
        assert!(display.contains("linux"));
        assert!(!err.is_skippable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(!err.is_skippable());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Err(Error::EmptyEntry)
        }

        assert!(returns_result().is_err());
    }
}
