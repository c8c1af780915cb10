//! Locating and loading the configuration document.

use crate::config::document::Document;
use crate::config::environment::{forward_slashes, Env, CONFIG_LOCATION_VAR};
use crate::error::{ConfigLoadCause, Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// TOML, the canonical format.
    Toml,
    /// YAML, selected by a `.yaml` or `.yml` extension.
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension. Anything that is not YAML is
    /// read as TOML.
    ///
    /// # Examples
    ///
    /// ```
    /// use an_structure::config::DocumentFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(DocumentFormat::for_path(Path::new("structure.toml")), DocumentFormat::Toml);
    /// assert_eq!(DocumentFormat::for_path(Path::new("structure.YML")), DocumentFormat::Yaml);
    /// assert_eq!(DocumentFormat::for_path(Path::new("structure")), DocumentFormat::Toml);
    /// ```
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Toml,
        }
    }
}

/// Loads configuration documents.
///
/// # Examples
///
/// ```no_run
/// use an_structure::config::{ConfigSource, ProcessEnv};
///
/// let path = ConfigSource::locate(&ProcessEnv).unwrap();
/// let document = ConfigSource::load(&path).unwrap();
/// println!("{} top-level sections", document.len());
/// ```
pub struct ConfigSource;

impl ConfigSource {
    /// Resolve the configuration location from `AN_STRUCTURE_CONFIG`.
    ///
    /// Backslashes are canonicalized to `/` and a leading `~` is expanded
    /// to the home directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfigLocation`] if the variable is unset or empty.
    pub fn locate(env: &impl Env) -> Result<PathBuf> {
        let raw = env
            .var_os(CONFIG_LOCATION_VAR)
            .ok_or_else(|| Error::MissingConfigLocation {
                var: CONFIG_LOCATION_VAR.to_string(),
            })?;

        // Non-Unicode locations are used verbatim and fail, if at all, at load.
        match raw.into_string() {
            Ok(text) => Ok(expand_tilde(&forward_slashes(&text))),
            Err(raw) => Ok(PathBuf::from(raw)),
        }
    }

    /// Read and parse the document at `path`.
    ///
    /// No schema is enforced: unknown or missing keys are the consumer's
    /// concern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigLoadFailure`] if the file cannot be read or
    /// is not valid in its format.
    pub fn load(path: &Path) -> Result<Document> {
        let failure = |source: ConfigLoadCause| Error::ConfigLoadFailure {
            path: path.to_path_buf(),
            source,
        };

        let contents = fs::read_to_string(path).map_err(|e| failure(e.into()))?;

        let document = match DocumentFormat::for_path(path) {
            DocumentFormat::Toml => {
                Document::from_toml_str(&contents).map_err(|e| failure(e.into()))?
            }
            DocumentFormat::Yaml => {
                Document::from_yaml_str(&contents).map_err(|e| failure(e.into()))?
            }
        };

        log::debug!(
            "loaded structure config {} ({} top-level sections)",
            path.display(),
            document.len()
        );

        Ok(document)
    }

    /// [`locate`](Self::locate) then [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Propagates either failure.
    pub fn load_from_env(env: &impl Env) -> Result<(PathBuf, Document)> {
        let path = Self::locate(env)?;
        let document = Self::load(&path)?;
        Ok((path, document))
    }
}

fn expand_tilde(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(raw),
    };

    match home::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
