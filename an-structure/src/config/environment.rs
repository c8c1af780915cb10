//! Environment variable access.
//!
//! Root paths and the configuration location are all read from environment
//! variables. Reads go through the [`Env`] trait so resolution can be driven
//! by an in-memory map in tests instead of mutating the process environment.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Name of the variable holding the configuration file location.
pub const CONFIG_LOCATION_VAR: &str = "AN_STRUCTURE_CONFIG";

/// Name of the variable selecting the log mode.
pub const LOG_MODE_VAR: &str = "AN_STRUCTURE_LOG_MODE";

/// Read access to environment variables.
///
/// Implementations return `None` for variables that are unset **or** empty;
/// callers never need to distinguish the two.
pub trait Env {
    /// Returns the non-empty value of `name`, if any.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the first non-empty value among `names`, checked in order,
    /// together with the name that produced it.
    ///
    /// # Examples
    ///
    /// ```
    /// use an_structure::config::{Env, MapEnv};
    ///
    /// let env = MapEnv::new()
    ///     .with("ANALOG_PROJECTS", "/legacy")
    ///     .with("AN_PROJECTS", "/current");
    ///
    /// let (name, value) = env.first_of(&["AN_PROJECTS", "ANALOG_PROJECTS"]).unwrap();
    /// assert_eq!(name, "AN_PROJECTS");
    /// assert_eq!(value, "/current");
    /// ```
    fn first_of<'a>(&self, names: &[&'a str]) -> Option<(&'a str, String)> {
        names
            .iter()
            .find_map(|name| self.var(name).map(|value| (*name, value)))
    }

    /// Returns the non-empty raw value of `name`, whether or not it is
    /// valid Unicode.
    ///
    /// Path-valued variables are read through this so that a set but
    /// non-UTF-8 value still counts as set.
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.var(name).map(OsString::from)
    }

    /// [`first_of`](Self::first_of) over raw values.
    fn first_of_os<'a>(&self, names: &[&'a str]) -> Option<(&'a str, OsString)> {
        names
            .iter()
            .find_map(|name| self.var_os(name).map(|value| (*name, value)))
    }
}

impl<E: Env + ?Sized> Env for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }

    fn var_os(&self, name: &str) -> Option<OsString> {
        (**self).var_os(name)
    }
}

impl<E: Env + ?Sized> Env for Box<E> {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }

    fn var_os(&self, name: &str) -> Option<OsString> {
        (**self).var_os(name)
    }
}

/// The real process environment, read fresh on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }

    fn var_os(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name).filter(|value| !value.is_empty())
    }
}

/// An in-memory environment.
///
/// # Examples
///
/// ```
/// use an_structure::config::{Env, MapEnv};
///
/// let env = MapEnv::new().with("AN_RESOURCES", "/mnt/resources").with("AN_PROJECTS", "");
/// assert_eq!(env.var("AN_RESOURCES").as_deref(), Some("/mnt/resources"));
/// assert_eq!(env.var("AN_PROJECTS"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    /// Remove a variable.
    pub fn remove(&mut self, name: &str) {
        self.vars.remove(name);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Env for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|value| !value.is_empty()).cloned()
    }
}

/// Canonicalize path separators to `/`.
pub(crate) fn forward_slashes(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// A path from a raw variable value. Unicode values get their separators
/// canonicalized; anything else is kept byte for byte.
pub(crate) fn path_from_var(raw: OsString) -> PathBuf {
    match raw.into_string() {
        Ok(text) => PathBuf::from(forward_slashes(&text)),
        Err(raw) => PathBuf::from(raw),
    }
}
