//! The logical naming vocabulary.
//!
//! Callers ask for directory names by logical role ("renders" inside a 2D
//! shot, the "3d" production category) and never by configuration key.
//! Every role resolves through one function: either a fixed constant, for
//! names that have never changed across structure versions, or a key in the
//! `project` section of the configuration document.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::Document;
use crate::error::Error;

/// Section of the document holding per-role directory names.
pub const PROJECT_SECTION: &str = "project";

/// Revision of the studio's directory-naming convention.
///
/// Only the latest convention is supported; the parameter exists so that
/// version-specific mappings can be added without changing signatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StructureVersion {
    /// The current convention.
    #[default]
    Latest,
}

impl StructureVersion {
    /// Map a historical numeric project index onto a structure version.
    ///
    /// Older tooling passed `9999` to mean "the latest structure". Every
    /// index currently maps to [`StructureVersion::Latest`].
    #[must_use]
    pub const fn from_project_index(_index: u32) -> Self {
        Self::Latest
    }
}

impl fmt::Display for StructureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
        }
    }
}

impl FromStr for StructureVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            _ => Err(Error::unknown("structure version", s)),
        }
    }
}

/// Where a role's literal directory name comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// A constant that never varies between structure versions.
    Fixed(&'static str),
    /// A key in the `project` section of the document.
    Configured(&'static str),
}

impl NameSource {
    /// Resolve against `document`. A missing or non-text key yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use an_structure::NameSource;
    /// use an_structure::config::Document;
    ///
    /// let doc = Document::new();
    /// assert_eq!(NameSource::Fixed("H_DELIVERY").resolve(&doc).as_deref(), Some("H_DELIVERY"));
    /// assert_eq!(NameSource::Configured("DailiesDir").resolve(&doc), None);
    /// ```
    #[must_use]
    pub fn resolve(self, document: &Document) -> Option<String> {
        match self {
            Self::Fixed(name) => Some(name.to_string()),
            Self::Configured(key) => document
                .text(&[PROJECT_SECTION, key])
                .map(str::to_string),
        }
    }

    /// The configuration key, if this source reads one.
    #[must_use]
    pub const fn config_key(self) -> Option<&'static str> {
        match self {
            Self::Fixed(_) => None,
            Self::Configured(key) => Some(key),
        }
    }
}

/// A closed set of logical roles sharing a scope.
pub trait Role: Copy + Eq + fmt::Debug + 'static {
    /// Every role in vocabulary order.
    const ALL: &'static [Self];

    /// Name of the group, used for output prefixes.
    const GROUP: &'static str;

    /// Stable logical name.
    fn key(self) -> &'static str;

    /// Where the literal directory name comes from.
    fn source(self) -> NameSource;

    /// Parse a logical name back into a role.
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|role| role.key() == key)
    }
}

macro_rules! roles {
    (
        $(#[$meta:meta])*
        $name:ident, group = $group:literal, kind = $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal, $source:expr; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Role for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];
            const GROUP: &'static str = $group;

            fn key(self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )+
                }
            }

            fn source(self) -> NameSource {
                match self {
                    $( Self::$variant => $source, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_key(&s.to_lowercase()).ok_or_else(|| Error::unknown($kind, s))
            }
        }
    };
}

roles! {
    /// Top-level functional divisions of a project's directory tree.
    ///
    /// Management, data and delivery have never changed and are constants;
    /// the others are read from the document.
    ProductionCategory, group = "prod", kind = "production category" {
        /// `A_MANAGEMENT`
        Management => "management", NameSource::Fixed("A_MANAGEMENT");
        /// `B_DATA`
        Data => "data", NameSource::Fixed("B_DATA");
        /// Pre-production; also the prefix for pre-production copies of 3D and 2D.
        Pre => "pre", NameSource::Configured("PreProdDir");
        /// 3D production.
        ThreeD => "3d", NameSource::Configured("3DProdDir");
        /// 2D production.
        TwoD => "2d", NameSource::Configured("2DProdDir");
        /// Post-production.
        Post => "post", NameSource::Configured("PostProdDir");
        /// Dailies.
        Dailies => "dailies", NameSource::Configured("DailiesDir");
        /// `H_DELIVERY`
        Delivery => "delivery", NameSource::Fixed("H_DELIVERY");
    }
}

roles! {
    /// Children of a 2D shot directory.
    ShotChild2d, group = "shot_2d", kind = "2D shot role" {
        /// Compositing scripts.
        Scripts => "scripts", NameSource::Configured("2DScriptsDir");
        /// Rendered frames.
        Renders => "renders", NameSource::Configured("2DRendersDir");
        /// Elements.
        Elements => "elements", NameSource::Configured("2DElementsDir");
        /// Final outputs.
        Outputs => "outputs", NameSource::Configured("2DOutputsDir");
        /// Preview movies.
        Previews => "previews", NameSource::Configured("2DPreviewsDir");
        /// Source footage.
        Footage => "footage", NameSource::Configured("2DFootageDir");
    }
}

roles! {
    /// Children of a 3D shot directory.
    ShotChild3d, group = "shot_3d", kind = "3D shot role" {
        /// Scene files.
        Scenes => "scenes", NameSource::Configured("3DScenesDir");
        /// Texture maps.
        Maps => "maps", NameSource::Configured("3DMapsDir");
        /// Simulation and geometry caches.
        Caches => "caches", NameSource::Configured("3DCachesDir");
        /// Exports.
        Exports => "exports", NameSource::Configured("3DExportDir");
    }
}

roles! {
    /// Children of the 3D production directory.
    ProdChild3d, group = "prod_3d", kind = "3D production role" {
        /// Master assets.
        Assets => "assets", NameSource::Configured("AssetsDir");
        /// Parent of all shot folders.
        Shots => "shots", NameSource::Configured("ShotsDir");
    }
}

/// Literal names for every role in a group, in vocabulary order.
///
/// A role whose name is missing from the document is `None`; the rest of
/// the bundle is unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameBundle<R> {
    entries: Vec<(R, Option<String>)>,
}

impl<R: Role> NameBundle<R> {
    /// Resolve every role of `R` against `document`.
    #[must_use]
    pub fn resolve(document: &Document) -> Self {
        Self {
            entries: R::ALL
                .iter()
                .map(|&role| (role, role.source().resolve(document)))
                .collect(),
        }
    }

    /// The name for `role`.
    #[must_use]
    pub fn get(&self, role: R) -> Option<&str> {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .and_then(|(_, name)| name.as_deref())
    }

    /// Iterate `(role, name)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (R, Option<&str>)> + '_ {
        self.entries
            .iter()
            .map(|(role, name)| (*role, name.as_deref()))
    }

    /// Roles whose names are absent.
    #[must_use]
    pub fn missing(&self) -> Vec<R> {
        self.entries
            .iter()
            .filter(|(_, name)| name.is_none())
            .map(|(role, _)| *role)
            .collect()
    }

    /// Whether every role resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, name)| name.is_some())
    }

    /// Number of roles (present or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle has no roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R: Role> Serialize for NameBundle<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (role, name) in &self.entries {
            map.serialize_entry(role.key(), name)?;
        }
        map.end()
    }
}
