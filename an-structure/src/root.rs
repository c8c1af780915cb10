//! Root path resolution.
//!
//! Each root domain names an ordered list of environment variables. The
//! current-generation variable is always checked before its legacy
//! predecessor and the first non-empty value wins. Nothing is cached: every
//! call reads the environment again.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{path_from_var, Env};
use crate::error::Error;

/// A logical filesystem root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootDomain {
    /// Where all projects live.
    Projects,
    /// Shared studio resources.
    Resources,
    /// Pitch work. Configured in the document under `Analog.Pitches`, not
    /// through the environment.
    Pitches,
    /// The render-farm (Deadline) repository.
    RenderFarmRepository,
}

impl RootDomain {
    /// All domains.
    pub const ALL: [Self; 4] = [
        Self::Projects,
        Self::Resources,
        Self::Pitches,
        Self::RenderFarmRepository,
    ];

    /// Environment variables consulted for this domain, in priority order.
    ///
    /// # Examples
    ///
    /// ```
    /// use an_structure::RootDomain;
    ///
    /// assert_eq!(RootDomain::Projects.env_vars(), ["AN_PROJECTS", "ANALOG_PROJECTS"]);
    /// assert!(RootDomain::Pitches.env_vars().is_empty());
    /// ```
    #[must_use]
    pub const fn env_vars(self) -> &'static [&'static str] {
        match self {
            Self::Projects => &["AN_PROJECTS", "ANALOG_PROJECTS"],
            Self::Resources => &["AN_RESOURCES", "ANALOG_RESOURCES"],
            Self::Pitches => &[],
            Self::RenderFarmRepository => &["AN_DEADLINE_REPOSITORY", "ANALOG_DEADLINE_REPOSITORY"],
        }
    }

    /// Stable name used on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Resources => "resources",
            Self::Pitches => "pitches",
            Self::RenderFarmRepository => "render-farm",
        }
    }
}

impl fmt::Display for RootDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RootDomain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "projects" => Ok(Self::Projects),
            "resources" => Ok(Self::Resources),
            "pitches" => Ok(Self::Pitches),
            "render-farm" | "deadline" | "render-farm-repository" => {
                Ok(Self::RenderFarmRepository)
            }
            _ => Err(Error::unknown("root domain", s)),
        }
    }
}

/// Resolves root paths from an environment.
///
/// # Examples
///
/// ```
/// use an_structure::{RootDomain, RootResolver};
/// use an_structure::config::MapEnv;
/// use std::path::PathBuf;
///
/// let env = MapEnv::new()
///     .with("AN_PROJECTS", "/mnt/projects")
///     .with("ANALOG_PROJECTS", "/mnt/old_projects");
/// let resolver = RootResolver::new(env);
///
/// assert_eq!(resolver.resolve(RootDomain::Projects), Some(PathBuf::from("/mnt/projects")));
/// assert_eq!(resolver.resolve(RootDomain::Resources), None);
/// ```
#[derive(Debug, Clone)]
pub struct RootResolver<E> {
    env: E,
}

impl<E: Env> RootResolver<E> {
    /// Create a resolver reading from `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// The environment this resolver reads.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Resolve `domain` against the current environment.
    ///
    /// Returns `None` when none of the domain's variables hold a value;
    /// there is no default. A value that is not valid Unicode still counts
    /// and is returned as is. Backslashes in Unicode values are
    /// canonicalized to `/`, nothing else is touched.
    pub fn resolve(&self, domain: RootDomain) -> Option<PathBuf> {
        let Some((name, value)) = self.env.first_of_os(domain.env_vars()) else {
            log::debug!("no {domain} root set in the environment");
            return None;
        };

        log::debug!("{domain} root resolved from {name}");
        Some(path_from_var(value))
    }
}
