//! Command to print every name in a group.

use crate::error::CliError;
use crate::utils::{open_structure, print_listing, GlobalOptions};
use an_structure::output::{Listing, OutputFormat};
use an_structure::StructureVersion;
use clap::{Args, ValueEnum};

/// A group of related names.
#[derive(Clone, Copy, ValueEnum)]
pub enum Group {
    /// Production categories
    Prods,
    /// Children of a 2D shot folder
    #[value(name = "shot-2d")]
    Shot2d,
    /// Children of a 3D shot folder
    #[value(name = "shot-3d")]
    Shot3d,
    /// Children of the 3D production folder
    #[value(name = "prod-3d")]
    Prod3d,
}

/// Print every directory name in a group.
#[derive(Args)]
pub struct BundleCommand {
    /// Group to print
    #[arg(value_enum, value_name = "GROUP")]
    pub group: Group,

    /// Output format (human, json, dotenv, export, export-<shell>)
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Structure version to resolve against
    #[arg(long, default_value = "latest")]
    pub structure_version: StructureVersion,
}

impl BundleCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let structure = open_structure(global)?;
        let version = self.structure_version;

        let listing = match self.group {
            Group::Prods => Listing::from(&structure.prods(version)),
            Group::Shot2d => Listing::from(&structure.shot_children_2d(version)),
            Group::Shot3d => Listing::from(&structure.shot_children_3d(version)),
            Group::Prod3d => Listing::from(&structure.prod_children_3d(version)),
        };

        print_listing(&listing, self.format)
    }
}
