//! Main entry point for the regpath CLI.
//!
//! Prints the effective `PATH` from the Windows registry as a colon-joined
//! Unix-style path list, for shells running on top of Windows.

use clap::Parser;
use regpath::RegQuery;
use regpath_cli::error::CliError;
use regpath_cli::{run, Cli};

fn exit_with(err: &CliError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(err.exit_code());
}

fn main() {
    // Refuse to run anywhere but Windows, before touching the arguments
    if let Err(e) = regpath::ensure_supported() {
        exit_with(&CliError::from(e));
    }

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = regpath::init_logger(cli.debug);

    let mut stdout = std::io::stdout().lock();
    match run::execute(&RegQuery, &cli.options(), &mut stdout) {
        Ok(()) => std::process::exit(0),
        Err(e) => exit_with(&e),
    }
}
