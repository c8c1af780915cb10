//! The structure accessor.
//!
//! [`Structure`] is the public face of the crate: it loads the configuration
//! document once and answers every naming question from it, consulting the
//! environment only for root paths.

use std::path::{Path, PathBuf};

use crate::config::{ConfigSource, Document, Env, ProcessEnv};
use crate::deprecation::{Deprecation, DeprecationShim};
use crate::error::Result;
use crate::root::{RootDomain, RootResolver};
use crate::vocabulary::{
    NameBundle, ProdChild3d, ProductionCategory, Role, ShotChild2d, ShotChild3d,
    StructureVersion, PROJECT_SECTION,
};

/// Prefix of every shot folder name, as in `Shot_001`.
pub const SHOT_PREFIX: &str = "Shot";

/// Document key holding the pitches root.
pub const PITCHES_KEY: [&str; 2] = ["Analog", "Pitches"];

/// Resolves the project-structure convention into directory names.
///
/// # Examples
///
/// ```
/// use an_structure::{ProductionCategory, Structure};
/// use an_structure::config::{Document, MapEnv};
///
/// let document = Document::from_toml_str(r#"
/// [project]
/// 3DProdDir = "D_3D_PRODUCTION"
/// AssetsDir = "01_MASTER_ASSETS"
/// "#).unwrap();
/// let structure = Structure::from_document(document, MapEnv::new());
///
/// assert_eq!(structure.prod_3d().as_deref(), Some("D_3D_PRODUCTION"));
/// assert_eq!(structure.assets_dir().as_deref(), Some("01_MASTER_ASSETS"));
/// assert_eq!(structure.name(ProductionCategory::Delivery).as_deref(), Some("H_DELIVERY"));
/// assert_eq!(structure.prod_post(), None);
/// assert_eq!(structure.projects_root(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Structure<E = ProcessEnv> {
    document: Document,
    config_path: Option<PathBuf>,
    roots: RootResolver<E>,
    deprecations: DeprecationShim,
}

impl Structure<ProcessEnv> {
    /// Load the document named by `AN_STRUCTURE_CONFIG` in the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfigLocation`](crate::Error::MissingConfigLocation)
    /// if the variable is unset, or
    /// [`Error::ConfigLoadFailure`](crate::Error::ConfigLoadFailure) if the
    /// file cannot be read or parsed.
    pub fn from_env() -> Result<Self> {
        Self::with_env(ProcessEnv)
    }
}

impl<E: Env> Structure<E> {
    /// Load the document named by `AN_STRUCTURE_CONFIG` in `env`, and keep
    /// `env` for root resolution.
    ///
    /// # Errors
    ///
    /// Same as [`Structure::from_env`].
    pub fn with_env(env: E) -> Result<Self> {
        let (path, document) = ConfigSource::load_from_env(&env)?;
        Ok(Self::build(document, Some(path), env))
    }

    /// Load the document at an explicit `path`, ignoring
    /// `AN_STRUCTURE_CONFIG`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigLoadFailure`](crate::Error::ConfigLoadFailure)
    /// if the file cannot be read or parsed.
    pub fn from_path(path: &Path, env: E) -> Result<Self> {
        let document = ConfigSource::load(path)?;
        Ok(Self::build(document, Some(path.to_path_buf()), env))
    }

    /// Wrap an already-loaded document.
    pub fn from_document(document: Document, env: E) -> Self {
        Self::build(document, None, env)
    }

    fn build(document: Document, config_path: Option<PathBuf>, env: E) -> Self {
        Self {
            document,
            config_path,
            roots: RootResolver::new(env),
            deprecations: DeprecationShim::new(),
        }
    }

    /// The loaded document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Where the document was loaded from, if it came from a file.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    // ---- single names ------------------------------------------------

    /// Literal directory name for any role.
    pub fn name<R: Role>(&self, role: R) -> Option<String> {
        role.source().resolve(&self.document)
    }

    /// The string that prefixes a shot, as in `Shot_001`.
    pub fn shot_prefix(&self) -> &'static str {
        SHOT_PREFIX
    }

    /// Folder name for shot number `index`, zero-padded to three digits.
    ///
    /// ```
    /// # use an_structure::Structure;
    /// # use an_structure::config::{Document, MapEnv};
    /// let structure = Structure::from_document(Document::new(), MapEnv::new());
    /// assert_eq!(structure.shot_dir_name(7), "Shot_007");
    /// assert_eq!(structure.shot_dir_name(1250), "Shot_1250");
    /// ```
    pub fn shot_dir_name(&self, index: u32) -> String {
        format!("{}_{index:03}", self.shot_prefix())
    }

    /// Folder where 3D assets live, e.g. `01_MASTER_ASSETS`.
    pub fn assets_dir(&self) -> Option<String> {
        self.name(ProdChild3d::Assets)
    }

    /// Parent of all 3D shot folders, e.g. `03_SHOTS`.
    pub fn shots_dir(&self) -> Option<String> {
        self.name(ProdChild3d::Shots)
    }

    /// Management category folder.
    pub fn prod_management(&self) -> Option<String> {
        self.name(ProductionCategory::Management)
    }

    /// Data category folder.
    pub fn prod_data(&self) -> Option<String> {
        self.name(ProductionCategory::Data)
    }

    /// Pre-production category folder.
    pub fn prod_pre(&self) -> Option<String> {
        self.name(ProductionCategory::Pre)
    }

    /// 3D production category folder.
    pub fn prod_3d(&self) -> Option<String> {
        self.name(ProductionCategory::ThreeD)
    }

    /// 2D production category folder.
    pub fn prod_2d(&self) -> Option<String> {
        self.name(ProductionCategory::TwoD)
    }

    /// Post-production category folder.
    pub fn prod_post(&self) -> Option<String> {
        self.name(ProductionCategory::Post)
    }

    /// Dailies category folder.
    pub fn prod_dailies(&self) -> Option<String> {
        self.name(ProductionCategory::Dailies)
    }

    /// Delivery category folder.
    pub fn prod_delivery(&self) -> Option<String> {
        self.name(ProductionCategory::Delivery)
    }

    // ---- bundles -----------------------------------------------------

    /// Every production category folder.
    pub fn prods(&self, version: StructureVersion) -> NameBundle<ProductionCategory> {
        self.bundle(version)
    }

    /// Children of a 2D shot folder.
    pub fn shot_children_2d(&self, version: StructureVersion) -> NameBundle<ShotChild2d> {
        self.bundle(version)
    }

    /// Children of a 3D shot folder.
    pub fn shot_children_3d(&self, version: StructureVersion) -> NameBundle<ShotChild3d> {
        self.bundle(version)
    }

    /// Children of the 3D production folder.
    pub fn prod_children_3d(&self, version: StructureVersion) -> NameBundle<ProdChild3d> {
        self.bundle(version)
    }

    /// Resolve every role of `R` for `version`.
    pub fn bundle<R: Role>(&self, version: StructureVersion) -> NameBundle<R> {
        match version {
            StructureVersion::Latest => NameBundle::resolve(&self.document),
        }
    }

    /// Configured keys the vocabulary expects but the document lacks, in
    /// vocabulary order.
    pub fn undefined_keys(&self) -> Vec<String> {
        fn collect<R: Role>(document: &Document, out: &mut Vec<String>) {
            for role in R::ALL {
                if let Some(key) = role.source().config_key() {
                    if document.text(&[PROJECT_SECTION, key]).is_none() {
                        out.push(format!("{PROJECT_SECTION}.{key}"));
                    }
                }
            }
        }

        let mut missing = Vec::new();
        collect::<ProductionCategory>(&self.document, &mut missing);
        collect::<ShotChild2d>(&self.document, &mut missing);
        collect::<ShotChild3d>(&self.document, &mut missing);
        collect::<ProdChild3d>(&self.document, &mut missing);
        if self.pitches_root().is_none() {
            missing.push(PITCHES_KEY.join("."));
        }
        missing
    }

    // ---- roots -------------------------------------------------------

    /// Root of all projects: `AN_PROJECTS`, then `ANALOG_PROJECTS`.
    pub fn projects_root(&self) -> Option<PathBuf> {
        self.roots.resolve(RootDomain::Projects)
    }

    /// Root of shared resources: `AN_RESOURCES`, then `ANALOG_RESOURCES`.
    pub fn resources_root(&self) -> Option<PathBuf> {
        self.roots.resolve(RootDomain::Resources)
    }

    /// Root of pitch work, read from `Analog.Pitches` in the document.
    pub fn pitches_root(&self) -> Option<PathBuf> {
        self.document
            .text(&PITCHES_KEY)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Render-farm repository: `AN_DEADLINE_REPOSITORY`, then
    /// `ANALOG_DEADLINE_REPOSITORY`.
    pub fn deadline_repository_path(&self) -> Option<PathBuf> {
        self.roots.resolve(RootDomain::RenderFarmRepository)
    }

    /// Resolve any root by domain.
    pub fn root(&self, domain: RootDomain) -> Option<PathBuf> {
        match domain {
            RootDomain::Pitches => self.pitches_root(),
            _ => self.roots.resolve(domain),
        }
    }

    // ---- retired -----------------------------------------------------

    /// Publishing no longer copies to a separate share. Always `None`.
    #[deprecated(since = "0.1.0", note = "publishing no longer copies to a separate share")]
    pub fn published_root(&self) -> Option<PathBuf> {
        self.deprecations.call(&Deprecation::PUBLISHED_ROOT)
    }

    /// Web dailies review has been retired. Always `None`.
    #[deprecated(since = "0.1.0", note = "dailies has been retired")]
    pub fn dailies_url(&self) -> Option<String> {
        self.deprecations.call(&Deprecation::DAILIES_URL)
    }

    /// How many deprecated accessor calls this instance has answered.
    pub fn deprecated_calls(&self) -> usize {
        self.deprecations.notices()
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::config::MapEnv;

    const FULL: &str = r#"
[Analog]
Pitches = "P:/pitches"

[project]
PreProdDir = "C_PRE_PRODUCTION"
3DProdDir = "D_3D_PRODUCTION"
2DProdDir = "E_2D_PRODUCTION"
PostProdDir = "F_POST_PRODUCTION"
DailiesDir = "G_DAILIES"
AssetsDir = "01_MASTER_ASSETS"
ShotsDir = "03_SHOTS"
2DScriptsDir = "scripts"
2DRendersDir = "renders"
2DElementsDir = "elements"
2DOutputsDir = "outputs"
2DPreviewsDir = "previews"
2DFootageDir = "footage"
3DScenesDir = "scenes"
3DMapsDir = "maps"
3DCachesDir = "caches"
3DExportDir = "exports"
"#;

    fn structure(toml: &str, env: MapEnv) -> Structure<MapEnv> {
        Structure::from_document(Document::from_toml_str(toml).unwrap(), env)
    }

    #[test]
    fn test_single_names() {
        let s = structure(FULL, MapEnv::new());
        assert_eq!(s.shot_prefix(), "Shot");
        assert_eq!(s.assets_dir().as_deref(), Some("01_MASTER_ASSETS"));
        assert_eq!(s.shots_dir().as_deref(), Some("03_SHOTS"));
        assert_eq!(s.prod_management().as_deref(), Some("A_MANAGEMENT"));
        assert_eq!(s.prod_data().as_deref(), Some("B_DATA"));
        assert_eq!(s.prod_pre().as_deref(), Some("C_PRE_PRODUCTION"));
        assert_eq!(s.prod_3d().as_deref(), Some("D_3D_PRODUCTION"));
        assert_eq!(s.prod_2d().as_deref(), Some("E_2D_PRODUCTION"));
        assert_eq!(s.prod_post().as_deref(), Some("F_POST_PRODUCTION"));
        assert_eq!(s.prod_dailies().as_deref(), Some("G_DAILIES"));
        assert_eq!(s.prod_delivery().as_deref(), Some("H_DELIVERY"));
    }

    #[test]
    fn test_prods_bundle_complete() {
        let s = structure(FULL, MapEnv::new());
        let prods = s.prods(StructureVersion::Latest);
        assert_eq!(prods.len(), 8);
        assert!(prods.is_complete());
        assert!(prods.iter().all(|(_, name)| name.is_some_and(|n| !n.is_empty())));
    }

    #[test]
    fn test_empty_document_keeps_fixed_names() {
        let s = structure("", MapEnv::new());
        let prods = s.prods(StructureVersion::default());
        assert_eq!(prods.get(ProductionCategory::Management), Some("A_MANAGEMENT"));
        assert_eq!(prods.get(ProductionCategory::Data), Some("B_DATA"));
        assert_eq!(prods.get(ProductionCategory::Delivery), Some("H_DELIVERY"));
        assert_eq!(prods.missing().len(), 5);
        assert_eq!(s.shot_prefix(), "Shot");
    }

    #[test]
    fn test_shot_children_2d_missing_footage() {
        let partial = FULL.replace("2DFootageDir = \"footage\"\n", "");
        let s = structure(&partial, MapEnv::new());
        let children = s.shot_children_2d(StructureVersion::Latest);

        assert_eq!(children.len(), 6);
        assert_eq!(children.get(ShotChild2d::Scripts), Some("scripts"));
        assert_eq!(children.get(ShotChild2d::Renders), Some("renders"));
        assert_eq!(children.get(ShotChild2d::Elements), Some("elements"));
        assert_eq!(children.get(ShotChild2d::Outputs), Some("outputs"));
        assert_eq!(children.get(ShotChild2d::Previews), Some("previews"));
        assert_eq!(children.get(ShotChild2d::Footage), None);
    }

    #[test]
    fn test_shot_children_3d_and_prod_children() {
        let s = structure(FULL, MapEnv::new());
        let shot = s.shot_children_3d(StructureVersion::Latest);
        assert_eq!(shot.get(ShotChild3d::Exports), Some("exports"));

        let prod = s.prod_children_3d(StructureVersion::Latest);
        assert_eq!(prod.get(ProdChild3d::Assets), s.assets_dir().as_deref());
        assert_eq!(prod.get(ProdChild3d::Shots), s.shots_dir().as_deref());
    }

    #[test]
    fn test_roots() {
        let env = MapEnv::new()
            .with("AN_PROJECTS", "/projects")
            .with("ANALOG_PROJECTS", "/old_projects")
            .with("ANALOG_RESOURCES", "/resources")
            .with("AN_DEADLINE_REPOSITORY", r"\\farm\repo");
        let s = structure(FULL, env);

        assert_eq!(s.projects_root(), Some(PathBuf::from("/projects")));
        assert_eq!(s.resources_root(), Some(PathBuf::from("/resources")));
        assert_eq!(s.deadline_repository_path(), Some(PathBuf::from("//farm/repo")));
        assert_eq!(s.pitches_root(), Some(PathBuf::from("P:/pitches")));

        for domain in RootDomain::ALL {
            assert!(s.root(domain).is_some(), "{domain}");
        }
    }

    #[test]
    fn test_roots_absent() {
        let s = structure("", MapEnv::new());
        for domain in RootDomain::ALL {
            assert_eq!(s.root(domain), None, "{domain}");
        }
    }

    #[test]
    fn test_deprecated_accessors_ignore_document() {
        let s = structure(
            "[project]\nPublishedRoot = \"/publish\"\nDailiesUrl = \"http://dailies\"\n\
             [Analog]\nPublished = \"/publish\"\nDailies = \"http://dailies\"\n",
            MapEnv::new().with("AN_PUBLISHED", "/publish"),
        );
        assert_eq!(s.published_root(), None);
        assert_eq!(s.dailies_url(), None);
        assert_eq!(s.published_root(), None);
        assert_eq!(s.deprecated_calls(), 3);
    }

    #[test]
    fn test_undefined_keys() {
        let s = structure(FULL, MapEnv::new());
        assert!(s.undefined_keys().is_empty());

        let partial = FULL.replace("DailiesDir = \"G_DAILIES\"\n", "");
        let s = structure(&partial, MapEnv::new());
        assert_eq!(s.undefined_keys(), vec!["project.DailiesDir".to_string()]);

        let s = structure("", MapEnv::new());
        let missing = s.undefined_keys();
        // 5 categories + 6 + 4 + 2 children + pitches
        assert_eq!(missing.len(), 18);
        assert_eq!(missing.first().map(String::as_str), Some("project.PreProdDir"));
        assert_eq!(missing.last().map(String::as_str), Some("Analog.Pitches"));
    }

    #[test]
    fn test_config_path_for_in_memory_document() {
        let s = structure(FULL, MapEnv::new());
        assert!(s.config_path().is_none());
        assert_eq!(s.document().len(), 2);
    }
}
