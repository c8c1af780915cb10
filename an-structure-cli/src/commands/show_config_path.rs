//! Command to show the resolved configuration location.

use crate::error::CliError;
use crate::utils::{print_line, resolve_config_path, GlobalOptions};
use clap::Args;

/// Show where the configuration would be loaded from.
#[derive(Args)]
pub struct ShowConfigPathCommand {}

impl ShowConfigPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_config_path(global)?;
        print_line(&path.display().to_string())
    }
}
