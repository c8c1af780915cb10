#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

//! # an-structure
//!
//! Resolves the studio's versioned project-structure convention into
//! concrete directory names.
//!
//! A configuration document, named by the `AN_STRUCTURE_CONFIG` environment
//! variable, holds the literal directory names for each production category
//! and subdirectory role. Root paths (projects, resources, render farm) come
//! from environment variables, current generation first and legacy second.
//! Nothing here touches the filesystem beyond reading the configuration.
//!
//! ## Core Types
//!
//! - [`Structure`]: the accessor facade
//! - [`ProductionCategory`], [`ShotChild2d`], [`ShotChild3d`], [`ProdChild3d`]:
//!   the logical vocabulary
//! - [`NameBundle`]: an aggregate lookup result
//! - [`RootResolver`] and [`RootDomain`]: root path resolution
//! - [`DeprecationShim`]: retired accessors
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use an_structure::{ShotChild2d, Structure, StructureVersion};
//! use an_structure::config::{Document, MapEnv};
//!
//! let document = Document::from_toml_str(r#"
//! [project]
//! 2DRendersDir = "renders"
//! "#).unwrap();
//! let env = MapEnv::new().with("ANALOG_PROJECTS", "/mnt/projects");
//! let structure = Structure::from_document(document, env);
//!
//! let children = structure.shot_children_2d(StructureVersion::Latest);
//! assert_eq!(children.get(ShotChild2d::Renders), Some("renders"));
//! assert_eq!(children.get(ShotChild2d::Footage), None);
//! assert_eq!(structure.projects_root().unwrap().to_str(), Some("/mnt/projects"));
//! ```

pub mod config;
pub mod deprecation;
pub mod error;
pub mod logging;
pub mod output;
pub mod root;
pub mod structure;
pub mod vocabulary;

// Re-export key types at crate root for convenience
pub use deprecation::{Deprecation, DeprecationShim};
pub use error::{ConfigLoadCause, Error, Result};
pub use logging::{init_logger, init_logger_with_env, LogLevel, Logger};
pub use root::{RootDomain, RootResolver};
pub use structure::{Structure, SHOT_PREFIX};
pub use vocabulary::{
    NameBundle, NameSource, ProdChild3d, ProductionCategory, Role, ShotChild2d, ShotChild3d,
    StructureVersion,
};
