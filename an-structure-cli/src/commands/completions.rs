//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Binary name as installed.
const BIN_NAME: &str = "an-structure";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        match self.shell {
            Shell::Bash => {
                eprintln!("#   eval \"$({BIN_NAME} completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   {BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}");
            }
            Shell::Fish => {
                eprintln!(
                    "#   {BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
                );
            }
            Shell::PowerShell => {
                eprintln!("#   {BIN_NAME} completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }
        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
