//! Output formatter implementations.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::Result;

use super::{Listing, OutputFormatter, ShellType};

/// Prefix of every generated variable name.
const VAR_PREFIX: &str = "AN";

/// Validates that a string is a valid environment variable name.
///
/// Valid names must:
/// - Start with a letter or underscore
/// - Contain only letters, digits, and underscores
fn is_valid_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Variable name for `key` in `group`, e.g. `AN_SHOT_2D_RENDERS`.
///
/// Characters that cannot appear in a variable name become underscores.
fn env_var_name(group: &str, key: &str) -> String {
    let name: String = format!("{VAR_PREFIX}_{group}_{key}")
        .to_uppercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    debug_assert!(is_valid_env_var_name(&name));
    name
}

/// Formatter for shell-specific export statements. Absent names are skipped.
pub struct ExportFormatter {
    shell: ShellType,
}

impl ExportFormatter {
    /// Create a new export formatter for `shell`.
    #[must_use]
    pub fn new(shell: ShellType) -> Self {
        Self { shell }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, listing: &Listing) -> Result<String> {
        Ok(listing
            .present()
            .map(|(key, name)| {
                self.shell
                    .format_export(&env_var_name(listing.group(), key), name)
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

struct OrderedEntries<'a>(&'a Listing);

impl Serialize for OrderedEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, name) in self.0.iter() {
            map.serialize_entry(key, &name)?;
        }
        map.end()
    }
}

/// Formatter for JSON output. Absent names become `null`.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, listing: &Listing) -> Result<String> {
        Ok(serde_json::to_string_pretty(&OrderedEntries(listing))?)
    }
}

/// Formatter for dotenv (.env file) format. Absent names are skipped.
pub struct DotenvFormatter;

impl OutputFormatter for DotenvFormatter {
    fn format(&self, listing: &Listing) -> Result<String> {
        Ok(listing
            .present()
            .map(|(key, name)| format!("{}={name}", env_var_name(listing.group(), key)))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, listing: &Listing) -> Result<String> {
        let width = listing.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        Ok(listing
            .iter()
            .map(|(key, name)| format!("{key:<width$}  {}", name.unwrap_or("<undefined>")))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
