//! CLI command implementations.
//!
//! - `name`: Print the literal directory name for one logical role
//! - `bundle`: Print every name in a group (categories, shot children, ...)
//! - `root`: Print a resolved root path
//! - `shot`: Compose a shot folder name
//! - `validate`: Report vocabulary keys the configuration does not define
//! - `show_config_path`: Show where the configuration is loaded from
//! - `completions`: Generate shell completion scripts

pub mod bundle;
pub mod completions;
pub mod name;
pub mod root;
pub mod shot;
pub mod show_config_path;
pub mod validate;

pub use bundle::BundleCommand;
pub use completions::CompletionsCommand;
pub use name::NameCommand;
pub use root::RootCommand;
pub use shot::ShotCommand;
pub use show_config_path::ShowConfigPathCommand;
pub use validate::ValidateCommand;
