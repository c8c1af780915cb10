//! Common test utilities for CLI integration tests.
//!
//! Each [`TestEnv`] owns a temporary directory holding a structure
//! configuration and builds commands that point at it with `--config`, with
//! every structure-related variable removed from the child environment.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the binary reads; stripped from every child process.
pub const STRUCTURE_VARS: &[&str] = &[
    "AN_STRUCTURE_CONFIG",
    "AN_STRUCTURE_LOG_MODE",
    "AN_PROJECTS",
    "ANALOG_PROJECTS",
    "AN_RESOURCES",
    "ANALOG_RESOURCES",
    "AN_DEADLINE_REPOSITORY",
    "ANALOG_DEADLINE_REPOSITORY",
];

/// A complete configuration for the latest structure.
pub const FULL_CONFIG: &str = r#"
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
2DScriptsDir = "01_SCRIPTS"
2DRendersDir = "02_RENDERS"
2DElementsDir = "03_ELEMENTS"
2DOutputsDir = "04_OUTPUTS"
2DPreviewsDir = "05_PREVIEWS"
2DFootageDir = "06_FOOTAGE"
3DScenesDir = "01_SCENES"
3DMapsDir = "02_MAPS"
3DCachesDir = "03_CACHES"
3DExportDir = "04_EXPORT"
"#;

/// Isolated test environment with its own configuration file.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the configuration file
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an environment holding [`FULL_CONFIG`].
    pub fn new() -> Self {
        Self::with_config(FULL_CONFIG)
    }

    /// Create an environment holding `content` as `structure.toml`.
    pub fn with_config(content: &str) -> Self {
        Self::with_named_config("structure.toml", content)
    }

    /// Create an environment holding `content` under `file_name`.
    pub fn with_named_config(file_name: &str, content: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(file_name);
        std::fs::write(&config_path, content).expect("Failed to write config");
        Self {
            temp_dir,
            config_path,
        }
    }

    /// The temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Command with a clean environment and no `--config`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("an-structure").expect("Failed to find binary");
        for var in STRUCTURE_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Command with `--config` pointing at this environment's file.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }
}

/// [`FULL_CONFIG`] with the line for `key` removed.
#[allow(dead_code)]
pub fn config_without(key: &str) -> String {
    FULL_CONFIG
        .lines()
        .filter(|line| !line.starts_with(&format!("{key} ")))
        .collect::<Vec<_>>()
        .join("\n")
}
