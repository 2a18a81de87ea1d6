//! Merging scope `PATH` values into one Unix-style path list.
//!
//! Scopes are scanned in precedence order (volatile, user, global) and each
//! `PATH` is scanned left to right. The first spelling of a path wins;
//! later entries equal to it ignoring case are dropped.

use std::collections::HashSet;
use std::fmt;

use crate::config::ExtractOptions;
use crate::error::Result;
use crate::path::{check_entry, normalize_entry};
use crate::reader::{read_scopes, EnvironmentSource};
use crate::scope::{ScopeMap, Scopes};

/// Separator between entries of a Unix `PATH`.
pub const UNIX_SEPARATOR: char = ':';

/// Separator between entries of a Windows `PATH`.
pub const WINDOWS_SEPARATOR: char = ';';

/// An ordered list of unique paths.
///
/// Uniqueness is case-insensitive; the list keeps the spelling of the first
/// insertion.
///
/// # Examples
///
/// ```
/// use regpath::PathList;
///
/// let mut list = PathList::new();
/// assert!(list.insert("/c/Tools".to_string()));
/// assert!(!list.insert("/C/TOOLS".to_string()));
/// assert!(list.insert("/c/bin".to_string()));
/// assert_eq!(list.to_string(), "/c/Tools:/c/bin");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl PathList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `path` unless an equal path (ignoring case) is present.
    ///
    /// Returns whether the path was added.
    pub fn insert(&mut self, path: String) -> bool {
        if !self.seen.insert(path.to_uppercase()) {
            return false;
        }
        self.entries.push(path);
        true
    }

    /// Whether an equal path (ignoring case) is present.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.seen.contains(&path.to_uppercase())
    }

    /// Number of paths in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the paths in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl fmt::Display for PathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "{UNIX_SEPARATOR}")?;
            }
            f.write_str(entry)?;
        }
        Ok(())
    }
}

/// Merge the `PATH` values of `maps`, in the order given.
///
/// Every entry is expanded against `vars`, normalized, optionally checked
/// for existence, and appended unless already present. Entries that fail
/// any step are logged at debug level and skipped.
pub fn merge_paths<'a, I>(vars: &ScopeMap, maps: I, options: &ExtractOptions) -> PathList
where
    I: IntoIterator<Item = &'a ScopeMap>,
{
    let mut list = PathList::new();

    for map in maps {
        let Some(value) = map.path() else {
            continue;
        };

        for raw in value.split(WINDOWS_SEPARATOR) {
            let normalized = match normalize_entry(raw, vars) {
                Ok(normalized) => normalized,
                Err(e) => {
                    log::debug!("Skipping {raw:?}: {e}");
                    continue;
                }
            };

            if options.check_exists {
                if let Err(e) = check_entry(&normalized) {
                    log::debug!("Invalid path {normalized:?}: {e}");
                    continue;
                }
            }

            if !list.insert(normalized.clone()) {
                log::debug!("Duplicate: {normalized}");
            }
        }
    }

    list
}

/// Merge all three scopes, expanding from the volatile one.
///
/// # Examples
///
/// ```
/// use regpath::{extract_path, ExtractOptions, ScopeMap, Scopes};
///
/// let scopes = Scopes {
///     volatile: ScopeMap::default(),
///     user: [("PATH", "C:\\A;C:\\B")].into_iter().collect(),
///     global: [("PATH", "C:\\B;C:\\C")].into_iter().collect(),
/// };
/// let merged = extract_path(&scopes, &ExtractOptions::new());
/// assert_eq!(merged.to_string(), "/c/A:/c/B:/c/C");
/// ```
#[must_use]
pub fn extract_path(scopes: &Scopes, options: &ExtractOptions) -> PathList {
    merge_paths(
        &scopes.volatile,
        scopes.in_order().map(|(_, map)| map),
        options,
    )
}

/// Read every scope from `source` and merge their `PATH` values.
///
/// # Errors
///
/// Returns an error if a scope cannot be read (see
/// [`read_scopes`](crate::reader::read_scopes)).
pub fn extract_from<S: EnvironmentSource + ?Sized>(
    source: &S,
    options: &ExtractOptions,
) -> Result<PathList> {
    let scopes = read_scopes(source, options)?;
    let list = extract_path(&scopes, options);
    log::debug!("Merged {} unique paths", list.len());
    Ok(list)
}
