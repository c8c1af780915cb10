//! Command to print a resolved root path.

use crate::error::CliError;
use crate::utils::{open_structure, print_listing, GlobalOptions};
use an_structure::output::{Listing, OutputFormat};
use an_structure::RootDomain;
use clap::Args;

/// Print a root path.
#[derive(Args)]
pub struct RootCommand {
    /// Root to resolve: projects, resources, pitches, render-farm
    #[arg(value_name = "DOMAIN")]
    pub domain: RootDomain,

    /// Output format (human, json, dotenv, export, export-<shell>)
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

impl RootCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let structure = open_structure(global)?;

        let Some(path) = structure.root(self.domain) else {
            let tried = match self.domain {
                RootDomain::Pitches => "Analog.Pitches in the configuration".to_string(),
                domain => domain.env_vars().join(", "),
            };
            return Err(CliError::SemanticFailure(format!(
                "{} root is not set (checked {tried})",
                self.domain
            )));
        };

        let listing = Listing::single(
            "root",
            self.domain.key(),
            Some(path.to_string_lossy().into_owned()),
        );
        print_listing(&listing, self.format)
    }
}
