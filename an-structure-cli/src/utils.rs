//! Utility functions for CLI operations.

use crate::error::CliError;
use an_structure::config::{ConfigSource, ProcessEnv};
use an_structure::output::{Listing, OutputFormat};
use an_structure::Structure;
use std::io::{self, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file, overriding `AN_STRUCTURE_CONFIG`.
    pub config: Option<PathBuf>,
}

/// Where the configuration would be loaded from.
pub fn resolve_config_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.config {
        Some(path) => Ok(path.clone()),
        None => Ok(ConfigSource::locate(&ProcessEnv)?),
    }
}

/// Load the structure, preferring `--config` over the environment.
pub fn open_structure(global: &GlobalOptions) -> Result<Structure, CliError> {
    let structure = match &global.config {
        Some(path) => Structure::from_path(path, ProcessEnv)?,
        None => Structure::from_env()?,
    };
    Ok(structure)
}

/// Render `listing` in `format` and print it to stdout.
pub fn print_listing(listing: &Listing, format: OutputFormat) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_listing(&mut handle, listing, format)
}

/// Render `listing` in `format` into `out`. Nothing is written for an
/// empty rendering.
pub fn write_listing(
    out: &mut impl Write,
    listing: &Listing,
    format: OutputFormat,
) -> Result<(), CliError> {
    let rendered = format.create_formatter().format(listing)?;
    if !rendered.is_empty() {
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}

/// Print one line to stdout.
pub fn print_line(line: &str) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{line}")?;
    Ok(())
}
