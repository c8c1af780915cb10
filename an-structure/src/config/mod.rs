//! Configuration access for an-structure.
//!
//! Two inputs drive the resolver:
//!
//! - the process environment, read through the [`Env`] trait, which names
//!   the configuration file (`AN_STRUCTURE_CONFIG`) and the root paths;
//! - the configuration [`Document`], a TOML (or YAML) file loaded once by
//!   [`ConfigSource`] and never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use an_structure::config::{ConfigSource, Env, MapEnv};
//!
//! let env = MapEnv::new();
//! let err = ConfigSource::locate(&env).unwrap_err();
//! assert!(err.is_missing_config_location());
//! ```

mod document;
mod environment;
mod loader;

pub use document::{Document, Value};
pub use environment::{Env, MapEnv, ProcessEnv, CONFIG_LOCATION_VAR, LOG_MODE_VAR};
pub use loader::{ConfigSource, DocumentFormat};

pub(crate) use environment::path_from_var;
