//! The in-memory configuration document.
//!
//! A [`Document`] is a hierarchical mapping of string keys to text or nested
//! tables. It is built once by the loader and never mutated afterwards.

use std::collections::BTreeMap;

/// A value in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A scalar. Non-string scalars (numbers, booleans, dates) are rendered
    /// to their textual form.
    Text(String),
    /// A nested table.
    Table(Document),
    /// A sequence of values.
    List(Vec<Value>),
}

impl Value {
    /// Returns the text if this is a scalar.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the nested table if this is one.
    #[must_use]
    pub fn as_table(&self) -> Option<&Document> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// A hierarchical configuration document.
///
/// # Examples
///
/// ```
/// use an_structure::config::Document;
///
/// let doc = Document::from_toml_str(r#"
/// [project]
/// AssetsDir = "01_MASTER_ASSETS"
/// "#).unwrap();
///
/// assert_eq!(doc.text(&["project", "AssetsDir"]), Some("01_MASTER_ASSETS"));
/// assert_eq!(doc.text(&["project", "ShotsDir"]), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    entries: BTreeMap<String, Value>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns the parser error if `source` is not valid TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(source)?;
        Ok(Self::from(table))
    }

    /// Parse a YAML document. A YAML file whose root is not a mapping
    /// produces an empty document.
    ///
    /// # Errors
    ///
    /// Returns the parser error if `source` is not valid YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(source)?;
        Ok(match from_yaml(value) {
            Some(Value::Table(doc)) => doc,
            _ => Self::new(),
        })
    }

    /// Builder-style insert, mostly useful for assembling documents in code.
    #[must_use]
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.entries.insert(key.to_string(), value);
        self
    }

    /// Builder-style insert of a text value.
    #[must_use]
    pub fn with_text(self, key: &str, text: &str) -> Self {
        self.with(key, Value::Text(text.to_string()))
    }

    /// Look up a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a top-level table.
    #[must_use]
    pub fn table(&self, key: &str) -> Option<&Document> {
        self.get(key).and_then(Value::as_table)
    }

    /// Walk a key path through nested tables.
    #[must_use]
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for key in parents {
            current = current.table(key)?;
        }
        current.get(last)
    }

    /// Walk a key path and return the text found there.
    #[must_use]
    pub fn text(&self, path: &[&str]) -> Option<&str> {
        self.lookup(path).and_then(Value::as_text)
    }

    /// Top-level keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<toml::Table> for Document {
    fn from(table: toml::Table) -> Self {
        Self {
            entries: table
                .into_iter()
                .map(|(key, value)| (key, Value::from(value)))
                .collect(),
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(text) => Self::Text(text),
            toml::Value::Table(table) => Self::Table(Document::from(table)),
            toml::Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            toml::Value::Integer(n) => Self::Text(n.to_string()),
            toml::Value::Float(f) => Self::Text(f.to_string()),
            toml::Value::Boolean(b) => Self::Text(b.to_string()),
            toml::Value::Datetime(dt) => Self::Text(dt.to_string()),
        }
    }
}

// Nulls and mappings keyed by non-scalars have no place in the model and are dropped.
fn from_yaml(value: serde_yaml::Value) -> Option<Value> {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => None,
        Yaml::Bool(b) => Some(Value::Text(b.to_string())),
        Yaml::Number(n) => Some(Value::Text(n.to_string())),
        Yaml::String(text) => Some(Value::Text(text)),
        Yaml::Sequence(items) => Some(Value::List(
            items.into_iter().filter_map(from_yaml).collect(),
        )),
        Yaml::Mapping(mapping) => {
            let entries = mapping
                .into_iter()
                .filter_map(|(key, value)| {
                    let key = match key {
                        Yaml::String(s) => s,
                        Yaml::Number(n) => n.to_string(),
                        Yaml::Bool(b) => b.to_string(),
                        _ => return None,
                    };
                    from_yaml(value).map(|value| (key, value))
                })
                .collect();
            Some(Value::Table(Document { entries }))
        }
        Yaml::Tagged(tagged) => from_yaml(tagged.value),
    }
}
