//! Build script for regpath-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("regpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the Windows registry PATH as a Unix-style path list")
        .long_about(
            "Read PATH from the volatile, user and machine registry scopes, expand \
             %VARIABLE% references, convert each entry to Unix syntax and print the \
             case-insensitively deduplicated entries joined by colons",
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug output on stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("exists")
                .short('e')
                .long("exists")
                .help("Only keep entries that are existing directories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("lenient")
                .short('l')
                .long("lenient")
                .help("Treat unreadable registry scopes as empty instead of failing")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("regpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
