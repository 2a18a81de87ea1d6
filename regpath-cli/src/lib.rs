//! Library exports for regpath-cli.
//!
//! This module exports the CLI structure for use by the binary and the
//! build script that generates the man page.

pub mod cli;
pub mod error;
pub mod run;

// Re-export CLI for build script
pub use cli::Cli;
