//! Integration tests for loading a structure configuration and resolving
//! names against it.
//!
//! These tests drive [`Structure`] through an injected [`MapEnv`], so they
//! never touch the process environment and can run in parallel.

mod common;

use an_structure::config::{MapEnv, CONFIG_LOCATION_VAR};
use an_structure::{
    Error, ProdChild3d, ProductionCategory, Role, RootDomain, ShotChild2d, ShotChild3d,
    Structure, StructureVersion,
};
use common::{config_without, env_for, fixture_path, full_config, write_config};
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_missing_config_location_fails_construction() {
    let result = Structure::with_env(MapEnv::new());
    assert!(matches!(result, Err(Error::MissingConfigLocation { .. })));
}

#[test]
fn test_empty_config_location_fails_construction() {
    let env = MapEnv::new().with(CONFIG_LOCATION_VAR, "");
    let err = Structure::with_env(env).unwrap_err();
    assert!(err.is_missing_config_location());
}

#[test]
fn test_unreadable_config_fails_construction() {
    let temp = TempDir::new().unwrap();
    let env = env_for(&temp.path().join("does-not-exist.toml"));

    let err = Structure::with_env(env).unwrap_err();
    assert!(err.is_config_load_failure());
}

#[test]
fn test_malformed_config_fails_construction() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "structure.toml", "[project\nAssetsDir = 1");

    let err = Structure::with_env(env_for(&path)).unwrap_err();
    match err {
        Error::ConfigLoadFailure { path: failed, .. } => {
            assert_eq!(failed.file_name().unwrap(), "structure.toml");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_loads_fixture_and_records_location() {
    let path = fixture_path("structure.toml");
    let structure = Structure::with_env(env_for(&path)).unwrap();

    let recorded = structure.config_path().unwrap();
    assert_eq!(recorded.file_name().unwrap(), "structure.toml");
    assert_eq!(structure.document().len(), 2);
}

#[test]
fn test_from_path_ignores_environment_location() {
    let path = fixture_path("structure.toml");
    let env = MapEnv::new().with(CONFIG_LOCATION_VAR, "/nowhere/structure.toml");

    let structure = Structure::from_path(&path, env).unwrap();
    assert_eq!(structure.prod_3d().as_deref(), Some("D_3D_PRODUCTION"));
}

#[test]
fn test_yaml_config() {
    let structure = Structure::with_env(env_for(&fixture_path("structure.yaml"))).unwrap();
    assert_eq!(structure.assets_dir().as_deref(), Some("01_MASTER_ASSETS"));
    assert_eq!(structure.pitches_root(), Some(PathBuf::from("P:/pitches")));
    // The YAML fixture only carries categories and 3D production children.
    assert!(structure
        .shot_children_2d(StructureVersion::Latest)
        .missing()
        .contains(&ShotChild2d::Footage));
}

// ============================================================================
// Single-value lookups
// ============================================================================

#[test]
fn test_assets_dir_returned_verbatim() {
    let temp = TempDir::new().unwrap();
    for value in ["01_MASTER_ASSETS", "assets", "  padded  ", "Ünïcode Assets"] {
        let content = format!("[project]\nAssetsDir = {value:?}\n");
        let path = write_config(temp.path(), "structure.toml", &content);
        let structure = Structure::with_env(env_for(&path)).unwrap();
        assert_eq!(structure.assets_dir().as_deref(), Some(value));
    }
}

#[test]
fn test_missing_key_is_absent_not_error() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "structure.toml", "[project]\n");
    let structure = Structure::with_env(env_for(&path)).unwrap();

    assert_eq!(structure.assets_dir(), None);
    assert_eq!(structure.prod_pre(), None);
    assert_eq!(structure.shot_prefix(), "Shot");
}

#[test]
fn test_config_without_project_section() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "structure.toml", "[Analog]\nPitches = \"/p\"\n");
    let structure = Structure::with_env(env_for(&path)).unwrap();

    assert_eq!(structure.shots_dir(), None);
    assert_eq!(structure.prod_management().as_deref(), Some("A_MANAGEMENT"));
    assert_eq!(structure.pitches_root(), Some(PathBuf::from("/p")));
}

#[test]
fn test_shot_dir_name() {
    let structure = Structure::from_path(&fixture_path("structure.toml"), MapEnv::new()).unwrap();
    assert_eq!(structure.shot_dir_name(1), "Shot_001");
    assert_eq!(structure.shot_dir_name(42), "Shot_042");
}

// ============================================================================
// Aggregate lookups
// ============================================================================

#[test]
fn test_prods_bundle_has_every_category() {
    let structure = Structure::from_path(&fixture_path("structure.toml"), MapEnv::new()).unwrap();
    let prods = structure.prods(StructureVersion::Latest);

    assert_eq!(prods.len(), 8);
    let keys: Vec<_> = prods.iter().map(|(category, _)| category.key()).collect();
    assert_eq!(
        keys,
        ["management", "data", "pre", "3d", "2d", "post", "dailies", "delivery"]
    );
    for (category, name) in prods.iter() {
        let name = name.unwrap_or_else(|| panic!("{category} unresolved"));
        assert!(!name.is_empty());
        assert_eq!(structure.name(category).as_deref(), Some(name));
    }
}

#[test]
fn test_shot_children_2d_without_footage() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "structure.toml", &config_without("2DFootageDir"));
    let structure = Structure::with_env(env_for(&path)).unwrap();

    let children = structure.shot_children_2d(StructureVersion::Latest);
    assert_eq!(children.get(ShotChild2d::Scripts), Some("01_SCRIPTS"));
    assert_eq!(children.get(ShotChild2d::Renders), Some("02_RENDERS"));
    assert_eq!(children.get(ShotChild2d::Elements), Some("03_ELEMENTS"));
    assert_eq!(children.get(ShotChild2d::Outputs), Some("04_OUTPUTS"));
    assert_eq!(children.get(ShotChild2d::Previews), Some("05_PREVIEWS"));
    assert_eq!(children.get(ShotChild2d::Footage), None);
    assert_eq!(children.missing(), vec![ShotChild2d::Footage]);
}

#[test]
fn test_shot_children_3d() {
    let structure = Structure::from_path(&fixture_path("structure.toml"), MapEnv::new()).unwrap();
    let children = structure.shot_children_3d(StructureVersion::Latest);

    assert!(children.is_complete());
    assert_eq!(children.get(ShotChild3d::Scenes), Some("01_SCENES"));
    assert_eq!(children.get(ShotChild3d::Exports), Some("04_EXPORT"));
}

#[test]
fn test_prod_children_3d_matches_single_lookups() {
    let structure = Structure::from_path(&fixture_path("structure.toml"), MapEnv::new()).unwrap();
    let children = structure.prod_children_3d(StructureVersion::from_project_index(9999));

    assert_eq!(children.get(ProdChild3d::Assets), Some("01_MASTER_ASSETS"));
    assert_eq!(children.get(ProdChild3d::Shots), Some("03_SHOTS"));
}

#[test]
fn test_fixed_categories_never_read_from_config() {
    let temp = TempDir::new().unwrap();
    let content = format!(
        "{}\nManagementDir = \"X\"\nDataDir = \"X\"\nDeliveryDir = \"X\"\n",
        full_config()
    );
    let path = write_config(temp.path(), "structure.toml", &content);
    let structure = Structure::with_env(env_for(&path)).unwrap();

    let prods = structure.prods(StructureVersion::Latest);
    assert_eq!(prods.get(ProductionCategory::Management), Some("A_MANAGEMENT"));
    assert_eq!(prods.get(ProductionCategory::Data), Some("B_DATA"));
    assert_eq!(prods.get(ProductionCategory::Delivery), Some("H_DELIVERY"));
}

#[test]
fn test_validate_reports_undefined_keys() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "structure.toml", &config_without("3DMapsDir"));
    let structure = Structure::with_env(env_for(&path)).unwrap();

    assert_eq!(structure.undefined_keys(), vec!["project.3DMapsDir".to_string()]);
}

// ============================================================================
// Roots and retired accessors
// ============================================================================

#[test]
fn test_roots_follow_injected_environment() {
    let path = fixture_path("structure.toml");
    let env = env_for(&path)
        .with("AN_PROJECTS", "/mnt/projects")
        .with("ANALOG_PROJECTS", "/mnt/legacy_projects")
        .with("ANALOG_RESOURCES", "/mnt/resources");
    let structure = Structure::with_env(env).unwrap();

    assert_eq!(structure.projects_root(), Some(PathBuf::from("/mnt/projects")));
    assert_eq!(structure.resources_root(), Some(PathBuf::from("/mnt/resources")));
    assert_eq!(structure.deadline_repository_path(), None);
    assert_eq!(
        structure.root(RootDomain::Pitches),
        Some(PathBuf::from("P:/pitches"))
    );
}

#[test]
#[allow(deprecated)]
fn test_deprecated_accessors_always_absent() {
    let temp = TempDir::new().unwrap();
    let content = format!(
        "{}\nPublishedRoot = \"/publish\"\nPublishDir = \"/publish\"\nDailiesUrl = \"http://dailies\"\n",
        full_config()
    );
    let path = write_config(temp.path(), "structure.toml", &content);
    let env = env_for(&path)
        .with("AN_PUBLISHED", "/publish")
        .with("AN_DAILIES_URL", "http://dailies");
    let structure = Structure::with_env(env).unwrap();

    for _ in 0..3 {
        assert_eq!(structure.published_root(), None);
        assert_eq!(structure.dailies_url(), None);
    }
    assert_eq!(structure.deprecated_calls(), 6);
}
