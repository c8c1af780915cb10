//! Output formatting for resolved names.
//!
//! Bundles, single names and roots are flattened into a [`Listing`] and
//! rendered as human-readable text, JSON, dotenv lines or shell export
//! statements.

mod formatters;
mod shell;

use std::fmt;
use std::str::FromStr;

use crate::vocabulary::{NameBundle, Role};
use crate::{Error, Result};

pub use formatters::{DotenvFormatter, ExportFormatter, HumanFormatter, JsonFormatter};
pub use shell::ShellType;

/// Trait for formatting a listing into an output format.
pub trait OutputFormatter {
    /// Format the given listing into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, listing: &Listing) -> Result<String>;
}

/// An ordered set of `key -> name` pairs belonging to one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    group: String,
    entries: Vec<(String, Option<String>)>,
}

impl Listing {
    /// Create a listing from explicit entries.
    #[must_use]
    pub fn new(group: &str, entries: Vec<(String, Option<String>)>) -> Self {
        Self {
            group: group.to_string(),
            entries,
        }
    }

    /// A listing with a single entry.
    #[must_use]
    pub fn single(group: &str, key: &str, name: Option<String>) -> Self {
        Self::new(group, vec![(key.to_string(), name)])
    }

    /// Group name, used as the variable prefix for dotenv and export.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Iterate all entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, name)| (key.as_str(), name.as_deref()))
    }

    /// Iterate entries that have a name.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter_map(|(key, name)| name.map(|n| (key, n)))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R: Role> From<&NameBundle<R>> for Listing {
    fn from(bundle: &NameBundle<R>) -> Self {
        Self::new(
            R::GROUP,
            bundle
                .iter()
                .map(|(role, name)| (role.key().to_string(), name.map(str::to_string)))
                .collect(),
        )
    }
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Shell-specific export statements.
    Export(ShellType),
    /// JSON format.
    Json,
    /// Dotenv (.env file) format.
    Dotenv,
    /// Human-readable format.
    Human,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Export(shell) => Box::new(ExportFormatter::new(*shell)),
            Self::Json => Box::new(JsonFormatter),
            Self::Dotenv => Box::new(DotenvFormatter),
            Self::Human => Box::new(HumanFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Export(_) => f.write_str("export"),
            Self::Json => f.write_str("json"),
            Self::Dotenv => f.write_str("dotenv"),
            Self::Human => f.write_str("human"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// `export` detects the current shell; `export-<shell>` names one.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "dotenv" => Ok(Self::Dotenv),
            "human" => Ok(Self::Human),
            "export" => Ok(Self::Export(ShellType::detect())),
            other => match other.strip_prefix("export-") {
                Some(shell) => Ok(Self::Export(ShellType::from_string(shell)?)),
                None => Err(Error::unknown("output format", s)),
            },
        }
    }
}
