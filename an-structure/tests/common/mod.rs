//! Shared helpers for an-structure integration tests.

#![allow(dead_code)]

use an_structure::config::{MapEnv, CONFIG_LOCATION_VAR};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of the full TOML fixture.
pub fn full_config() -> String {
    fs::read_to_string(fixture_path("structure.toml")).unwrap()
}

/// The full TOML fixture with the line for `key` removed.
pub fn config_without(key: &str) -> String {
    full_config()
        .lines()
        .filter(|line| !line.trim_start().starts_with(&format!("{key} ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `content` to `dir/name` and return the path.
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// An in-memory environment pointing at `path`.
pub fn env_for(path: &Path) -> MapEnv {
    MapEnv::new().with(CONFIG_LOCATION_VAR, path.to_str().unwrap())
}

/// RAII guard for setting and restoring process environment variables.
///
/// Tests using it must be `#[serial]`.
pub struct EnvGuard {
    key: String,
    old_value: Option<OsString>,
}

impl EnvGuard {
    pub fn new(key: &str, value: impl AsRef<OsStr>) -> Self {
        let old_value = env::var_os(key);
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    pub fn remove(key: &str) -> Self {
        let old_value = env::var_os(key);
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear every variable the resolver reads.
pub fn clear_structure_env_vars() -> Vec<EnvGuard> {
    [
        CONFIG_LOCATION_VAR,
        "AN_PROJECTS",
        "ANALOG_PROJECTS",
        "AN_RESOURCES",
        "ANALOG_RESOURCES",
        "AN_DEADLINE_REPOSITORY",
        "ANALOG_DEADLINE_REPOSITORY",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}
