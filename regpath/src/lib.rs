#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # regpath
//!
//! A library for turning the Windows registry `PATH` into a Unix-style path
//! list.
//!
//! The volatile, user and global environment scopes are read from the
//! registry, their `PATH` values are expanded and converted entry by entry,
//! and the results are merged in scope order with case-insensitive
//! deduplication.
//!
//! ## Core Types
//!
//! - [`Scope`], [`ScopeMap`] and [`Scopes`]: Registry scopes and their variables
//! - [`EnvironmentSource`] and [`RegQuery`]: Reading scopes from the registry
//! - [`PathList`]: The merged, deduplicated result
//! - [`ExtractOptions`]: Options threaded through a run
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use regpath::{extract_path, ExtractOptions, ScopeMap, Scopes};
//!
//! let scopes = Scopes {
//!     volatile: [("USERPROFILE", "C:\\Users\\bob")].into_iter().collect(),
//!     user: [("PATH", "%USERPROFILE%\\bin;C:\\Tools\\")].into_iter().collect(),
//!     global: [("PATH", "C:\\Windows\\System32;c:\\tools")].into_iter().collect(),
//! };
//!
//! let merged = extract_path(&scopes, &ExtractOptions::new());
//! assert_eq!(merged.to_string(), "/c/Users/bob/bin:/c/Tools:/c/Windows/System32");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod merge;
pub mod path;
pub mod platform;
pub mod reader;
pub mod scope;

// Re-export key types at crate root for convenience
pub use config::ExtractOptions;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use merge::{extract_from, extract_path, merge_paths, PathList};
pub use platform::ensure_supported;
pub use reader::{read_scope, read_scopes, EnvironmentSource, RegQuery};
pub use scope::{Scope, ScopeMap, Scopes};
