//! Logging infrastructure for the regpath library.
//!
//! This module provides a simple stderr-based backend for the `log` facade
//! with two verbosity levels. Library code logs with `log::debug!` and
//! friends; the binary installs the backend once at startup.

use std::fmt;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Normal) to most verbose (Debug).
///
/// # Examples
///
/// ```
/// use regpath::LogLevel;
///
/// assert!(LogLevel::Normal < LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Only warnings and errors.
    Normal,
    /// Everything, including per-entry diagnostics.
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "normal", "debug" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use regpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("DEBUG").unwrap(), LogLevel::Debug);
    /// assert!(LogLevel::parse("verbose").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Normal => LevelFilter::Warn,
            Self::Debug => LevelFilter::Debug,
        }
    }
}

/// A simple stderr-based logger.
///
/// Lines are prefixed with the record level, e.g. `DEBUG: Duplicate: /c/bin`.
///
/// # Examples
///
/// ```
/// use regpath::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert_eq!(logger.level(), LogLevel::Normal);
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // stderr is unbuffered; a failed write has nowhere left to go
        let _ = writeln!(std::io::stderr(), "{}: {}", record.level(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs the stderr logger for the process.
///
/// `debug` selects [`LogLevel::Debug`]; otherwise [`LogLevel::Normal`].
/// Installing twice keeps the first backend but still updates the global
/// max level, so repeated calls (e.g. from tests) are harmless.
///
/// # Examples
///
/// ```
/// use regpath::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true), LogLevel::Debug);
/// ```
pub fn init_logger(debug: bool) -> LogLevel {
    let level = if debug {
        LogLevel::Debug
    } else {
        LogLevel::Normal
    };

    if log::set_boxed_logger(Box::new(Logger::new(level))).is_err() {
        log::debug!("logger already installed; keeping existing backend");
    }
    log::set_max_level(level.filter());

    level
}
