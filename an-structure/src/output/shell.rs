//! Shell detection and export formatting.

use crate::config::{Env, ProcessEnv};
use crate::error::{Error, Result};

/// Supported shell types for export formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_from(&ProcessEnv)
    }

    /// Detect the shell from `env`.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` environment variable (path like `/bin/bash`)
    /// 5. Default to bash if unable to determine
    #[must_use]
    pub fn detect_from(env: &impl Env) -> Self {
        if env.var("ZSH_VERSION").is_some() {
            return Self::Zsh;
        }
        if env.var("FISH_VERSION").is_some() {
            return Self::Fish;
        }
        if env.var("PSModulePath").is_some() {
            return Self::PowerShell;
        }

        match env.var("SHELL") {
            Some(path) if path.contains("zsh") => Self::Zsh,
            Some(path) if path.contains("fish") => Self::Fish,
            Some(path) if path.contains("pwsh") || path.contains("powershell") => {
                Self::PowerShell
            }
            _ => Self::Bash,
        }
    }

    /// Parse a shell type from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(Error::unknown("shell", s)),
        }
    }

    /// Format an export statement for this shell type.
    ///
    /// Values that are not plain words are single-quoted for POSIX shells
    /// and fish.
    ///
    /// # Examples
    ///
    /// ```
    /// use an_structure::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.format_export("AN_PROD_3D", "D_3D_PRODUCTION"), "export AN_PROD_3D=D_3D_PRODUCTION");
    /// assert_eq!(ShellType::Bash.format_export("AN_ROOT", "/mnt/my projects"), "export AN_ROOT='/mnt/my projects'");
    /// assert_eq!(ShellType::Fish.format_export("AN_PROD_3D", "D_3D_PRODUCTION"), "set -x AN_PROD_3D D_3D_PRODUCTION");
    /// assert_eq!(ShellType::PowerShell.format_export("AN_PROD_3D", "D_3D_PRODUCTION"), "$env:AN_PROD_3D=\"D_3D_PRODUCTION\"");
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("export {var}={}", quote(value)),
            Self::Fish => format!("set -x {var} {}", quote(value)),
            Self::PowerShell => {
                let escaped = value.replace('`', "``").replace('"', "`\"");
                format!("$env:{var}=\"{escaped}\"")
            }
        }
    }
}

fn quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':'));
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}
