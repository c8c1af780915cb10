//! Command to check a configuration against the naming vocabulary.

use crate::error::CliError;
use crate::utils::{open_structure, print_line, GlobalOptions};
use clap::Args;

/// Report vocabulary keys the configuration does not define.
#[derive(Args)]
pub struct ValidateCommand {}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let structure = open_structure(global)?;
        let missing = structure.undefined_keys();

        if missing.is_empty() {
            return print_line("Configuration is valid");
        }

        for key in &missing {
            eprintln!("undefined: {key}");
        }
        Err(CliError::SemanticFailure(format!(
            "Configuration is missing {} key(s)",
            missing.len()
        )))
    }
}
