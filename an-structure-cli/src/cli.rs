//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BundleCommand, CompletionsCommand, NameCommand, RootCommand, ShotCommand,
    ShowConfigPathCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query the studio project-structure naming convention.
#[derive(Parser)]
#[command(name = "an-structure")]
#[command(version, about = "Resolve project-structure directory names", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file (overrides AN_STRUCTURE_CONFIG)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the directory name for a logical role
    Name(NameCommand),

    /// Print every directory name in a group
    Bundle(BundleCommand),

    /// Print a root path
    Root(RootCommand),

    /// Print the folder name for a shot number
    Shot(ShotCommand),

    /// Report vocabulary keys the configuration does not define
    Validate(ValidateCommand),

    /// Show where the configuration is loaded from
    ShowConfigPath(ShowConfigPathCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
