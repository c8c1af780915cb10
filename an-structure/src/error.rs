//! Error types for the an-structure library.
//!
//! Only two conditions are fatal to a [`Structure`](crate::Structure): the
//! configuration location is missing, or the document behind it cannot be
//! loaded. Every accessor call after construction degrades to `None`
//! instead of failing.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an an-structure error.
///
/// # Examples
///
/// ```
/// use an_structure::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("D_3D_PRODUCTION")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the an-structure library.
#[derive(Debug, Error)]
pub enum Error {
    /// The environment variable naming the configuration file is unset or empty.
    #[error("configuration location is missing: environment variable {var} is not set")]
    MissingConfigLocation {
        /// The variable that was consulted.
        var: String,
    },

    /// The configuration file exists in the environment but could not be loaded.
    #[error("failed to load configuration {}: {source}", path.display())]
    ConfigLoadFailure {
        /// The path that was read.
        path: PathBuf,
        /// The underlying cause.
        #[source]
        source: ConfigLoadCause,
    },

    /// A string did not name any member of a closed vocabulary.
    #[error("unknown {kind} '{value}'")]
    UnknownName {
        /// What kind of name was being parsed (role, domain, ...).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Serializing output failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a configuration document failed to load.
#[derive(Debug, Error)]
pub enum ConfigLoadCause {
    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file is not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if the error is a missing configuration location.
    ///
    /// # Examples
    ///
    /// ```
    /// use an_structure::Error;
    ///
    /// let err = Error::MissingConfigLocation { var: "AN_STRUCTURE_CONFIG".into() };
    /// assert!(err.is_missing_config_location());
    /// ```
    #[must_use]
    pub fn is_missing_config_location(&self) -> bool {
        matches!(self, Self::MissingConfigLocation { .. })
    }

    /// Check if the error is a configuration load failure.
    #[must_use]
    pub fn is_config_load_failure(&self) -> bool {
        matches!(self, Self::ConfigLoadFailure { .. })
    }

    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownName {
            kind,
            value: value.to_string(),
        }
    }
}
