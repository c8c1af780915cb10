//! Command to print the literal directory name for one logical role.

use crate::error::CliError;
use crate::utils::{open_structure, print_listing, GlobalOptions};
use an_structure::output::{Listing, OutputFormat};
use an_structure::{ProdChild3d, ProductionCategory, Role, ShotChild2d, ShotChild3d, Structure};
use clap::Args;

/// Role name accepted for the shot prefix.
const SHOT_PREFIX_ROLE: &str = "shot-prefix";

/// Print the directory name for a logical role.
#[derive(Args)]
pub struct NameCommand {
    /// Logical role: a production category (management, data, pre, 3d, 2d,
    /// post, dailies, delivery), a shot child (scripts, renders, elements,
    /// outputs, previews, footage, scenes, maps, caches, exports), a 3D
    /// production child (assets, shots), or shot-prefix
    #[arg(value_name = "ROLE")]
    pub role: String,

    /// Output format (human, json, dotenv, export, export-<shell>)
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// A resolved single name.
struct Lookup {
    group: &'static str,
    key: &'static str,
    name: Option<String>,
    config_key: Option<&'static str>,
}

fn lookup<R: Role>(structure: &Structure, role: R) -> Lookup {
    Lookup {
        group: R::GROUP,
        key: role.key(),
        name: structure.name(role),
        config_key: role.source().config_key(),
    }
}

fn find(structure: &Structure, role: &str) -> Option<Lookup> {
    let role = role.to_lowercase();

    if role == SHOT_PREFIX_ROLE {
        return Some(Lookup {
            group: "shot",
            key: "prefix",
            name: Some(structure.shot_prefix().to_string()),
            config_key: None,
        });
    }

    ProductionCategory::from_key(&role)
        .map(|r| lookup(structure, r))
        .or_else(|| ShotChild2d::from_key(&role).map(|r| lookup(structure, r)))
        .or_else(|| ShotChild3d::from_key(&role).map(|r| lookup(structure, r)))
        .or_else(|| ProdChild3d::from_key(&role).map(|r| lookup(structure, r)))
}

impl NameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let structure = open_structure(global)?;

        let found = find(&structure, &self.role)
            .ok_or_else(|| CliError::InvalidArguments(format!("unknown role '{}'", self.role)))?;

        if found.name.is_none() {
            let key = found.config_key.unwrap_or(found.key);
            return Err(CliError::SemanticFailure(format!(
                "'{}' is not defined (missing project.{key})",
                self.role
            )));
        }

        print_listing(
            &Listing::single(found.group, found.key, found.name),
            self.format,
        )
    }
}
