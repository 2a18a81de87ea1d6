//! Windows to Unix path conversion.
//!
//! This module turns a raw `PATH` entry such as `%USERPROFILE%\bin\` into
//! the Unix-style form used by MSYS-like shells (`/c/Users/bob/bin`):
//! - Stripping trailing backslashes
//! - Expanding `%NAME%` references
//! - Rewriting a leading `X:` drive as `/x/`
//! - Converting backslashes to forward slashes
//! - Collapsing duplicate slashes and stripping trailing ones
//!
//! [`to_windows`] goes the other way for drive-prefixed paths.

use std::sync::LazyLock;

use regex::Regex;

use super::expand::expand_variables;
use crate::error::{Error, Result};
use crate::scope::ScopeMap;

static WINDOWS_DRIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z]):").expect("drive pattern is valid"));
static UNIX_DRIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([a-zA-Z])(?:/|$)").expect("drive pattern is valid"));
static DUPLICATE_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//+").expect("slash pattern is valid"));

/// Normalize one raw `PATH` entry.
///
/// Variables are expanded from `vars` (the volatile scope, whichever scope
/// the entry came from) before the drive letter is looked at, so an entry
/// starting with `%USERPROFILE%` still gets a `/c/` prefix.
///
/// # Errors
///
/// Returns [`Error::UnresolvedVariable`] if a reference cannot be expanded,
/// and [`Error::EmptyEntry`] if nothing is left of the entry. Both mean the
/// entry should be skipped.
///
/// # Examples
///
/// ```
/// use regpath::path::normalize::normalize_entry;
/// use regpath::ScopeMap;
///
/// let vars: ScopeMap = [("USERPROFILE", "C:\\Users\\bob")].into_iter().collect();
///
/// assert_eq!(
///     normalize_entry("C:\\Windows\\System32\\", &vars).unwrap(),
///     "/c/Windows/System32"
/// );
/// assert_eq!(
///     normalize_entry("%USERPROFILE%\\bin\\", &vars).unwrap(),
///     "/c/Users/bob/bin"
/// );
/// ```
pub fn normalize_entry(raw: &str, vars: &ScopeMap) -> Result<String> {
    let trimmed = raw.trim_end_matches('\\');

    let expanded = expand_variables(trimmed, vars)?;
    if expanded.is_empty() {
        return Err(Error::EmptyEntry);
    }

    let unix = to_unix(&expanded);
    if unix.is_empty() {
        return Err(Error::EmptyEntry);
    }

    Ok(unix)
}

/// Convert an expanded Windows path to Unix syntax.
///
/// A path without a drive letter keeps its shape apart from the slash
/// rewrites; that degraded case is logged at debug level.
///
/// # Examples
///
/// ```
/// use regpath::path::normalize::to_unix;
///
/// assert_eq!(to_unix("D:\\\\tools\\\\\\\\bin\\"), "/d/tools/bin");
/// assert_eq!(to_unix("\\\\server\\share"), "/server/share");
/// ```
#[must_use]
pub fn to_unix(path: &str) -> String {
    let rewritten = match WINDOWS_DRIVE.captures(path) {
        Some(caps) => {
            let letter = caps[1].to_lowercase();
            format!("/{letter}/{}", &path[caps[0].len()..])
        }
        None => {
            log::debug!("No drive: {path}");
            path.to_string()
        }
    };

    let slashed = rewritten.replace('\\', "/");
    DUPLICATE_SLASHES
        .replace_all(&slashed, "/")
        .trim_end_matches('/')
        .to_string()
}

/// Convert a Unix-style path back to Windows syntax.
///
/// A leading `/x/` (or a bare `/x`) becomes `x:\`, keeping the letter's
/// case, and every remaining slash becomes a backslash.
///
/// # Examples
///
/// ```
/// use regpath::path::normalize::to_windows;
///
/// assert_eq!(to_windows("/c/Users/bob"), "c:\\Users\\bob");
/// assert_eq!(to_windows("/d"), "d:\\");
/// assert_eq!(to_windows("relative/dir"), "relative\\dir");
/// ```
#[must_use]
pub fn to_windows(path: &str) -> String {
    UNIX_DRIVE.replace(path, "${1}:\\").replace('/', "\\")
}
