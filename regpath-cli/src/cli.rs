//! CLI structure and flag definitions.
//!
//! This module defines the command-line surface using clap's derive macros.
//! There are no subcommands and no positional arguments.

use clap::Parser;
use regpath::ExtractOptions;

/// Print the Windows registry PATH as a Unix-style path list.
#[derive(Parser, Debug)]
#[command(name = "regpath")]
#[command(
    version,
    about = "Print the Windows registry PATH as a Unix-style path list",
    long_about = None
)]
pub struct Cli {
    /// Enable debug output on stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Only keep entries that are existing directories
    #[arg(short, long)]
    pub exists: bool,

    /// Treat unreadable registry scopes as empty instead of failing
    #[arg(short, long)]
    pub lenient: bool,
}

impl Cli {
    /// Options for the extraction run selected by the flags.
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions::new()
            .with_check_exists(self.exists)
            .with_lenient(self.lenient)
    }
}
