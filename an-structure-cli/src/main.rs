//! Main entry point for the an-structure CLI.
//!
//! Resolves the studio project-structure convention from the command line:
//! - `name`: Print the directory name for a logical role
//! - `bundle`: Print every name in a group
//! - `root`: Print a root path
//! - `validate`: Check a configuration against the vocabulary

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records to stderr at the requested verbosity
    if let Err(e) = an_structure::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: logger already installed: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Name(cmd) => cmd.execute(&global),
        cli::Command::Bundle(cmd) => cmd.execute(&global),
        cli::Command::Root(cmd) => cmd.execute(&global),
        cli::Command::Shot(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::ShowConfigPath(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
