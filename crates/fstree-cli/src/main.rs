//! fstree CLI
//!
//! Creates and checks filesystem trees described in YAML.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

/// Exit status when `check` finds a difference.
const EXIT_DIFFERENT: i32 = 2;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_DIFFERENT),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Returns `false` when the tree does not match.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(?cli, "Parsed arguments");

    match cli.command {
        Commands::Make { spec, root } => {
            commands::run_make(&spec, root)?;
            Ok(true)
        }
        Commands::Check { spec, root, json } => commands::run_check(&spec, root, json),
    }
}
