//! Path handling for registry `PATH` entries.
//!
//! This module converts raw Windows `PATH` entries into the Unix-style form
//! printed by the tool, and optionally checks them against the filesystem.
//!
//! # Normalization
//!
//! A raw entry goes through [`normalize_entry`]:
//! - Trailing backslashes are stripped
//! - `%NAME%` references are expanded from the volatile scope
//! - A leading `X:` drive becomes `/x/`
//! - Backslashes become slashes, duplicate and trailing slashes go away
//!
//! An entry with an unknown variable, or with nothing left after
//! trimming, is rejected so the caller can skip it.
//!
//! # Examples
//!
//! ```
//! use regpath::path::{normalize_entry, to_windows};
//! use regpath::ScopeMap;
//!
//! let vars = ScopeMap::default();
//! let unix = normalize_entry("C:\\\\tools\\\\\\\\bin", &vars).unwrap();
//! assert_eq!(unix, "/c/tools/bin");
//! assert_eq!(to_windows(&unix), "c:\\tools\\bin");
//! ```
//!
//! # Existence checks
//!
//! [`check_entry`] maps a normalized path back to a native one and
//! verifies it is a directory.

pub mod exists;
pub mod expand;
pub mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key functions
pub use exists::{check_entry, native_path, verify_directory};
pub use expand::expand_variables;
pub use normalize::{normalize_entry, to_unix, to_windows};
