//! Command to compose a shot folder name.

use crate::error::CliError;
use crate::utils::{open_structure, print_line, GlobalOptions};
use clap::Args;

/// Print the folder name for a shot number.
#[derive(Args)]
pub struct ShotCommand {
    /// Shot number
    #[arg(value_name = "INDEX")]
    pub index: u32,
}

impl ShotCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let structure = open_structure(global)?;
        print_line(&structure.shot_dir_name(self.index))
    }
}
