// Pinyin Fallback TOML Store
// A key-value store backed by a TOML file, one table per section

#![cfg(feature = "toml-store")]

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::{KeyValueStore, MemoryStore, StoreError};
use crate::config::ConfigValue;

/// Key-value store loaded from TOML
///
/// Each table is a section and each key a named setting:
///
/// ```toml
/// [pinyin]
/// LookupTablePageSize = 7
/// FuzzyPinyin = true
/// MainSwitch = "<Shift>"
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlStore {
    values: MemoryStore,

    /// Path to the store file (for reload)
    source_path: Option<PathBuf>,
}

type RawSections = IndexMap<String, IndexMap<String, toml::Value>>;

impl TomlStore {
    /// Load a store from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(&path)?;
        let mut store = Self::from_toml(&content)?;
        store.source_path = Some(path.as_ref().to_path_buf());
        Ok(store)
    }

    /// Load a store from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, StoreError> {
        let raw: RawSections =
            toml::from_str(content).map_err(|e| StoreError::TomlParse(e.to_string()))?;

        let mut sections = IndexMap::with_capacity(raw.len());
        for (section, entries) in raw {
            let mut values = IndexMap::with_capacity(entries.len());
            for (name, value) in entries {
                let value = convert_value(&section, &name, value)?;
                values.insert(name, value);
            }
            sections.insert(section, values);
        }

        Ok(Self {
            values: MemoryStore::from_sections(sections),
            source_path: None,
        })
    }

    /// Get the default store path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pinyin-fallback").join("config.toml"))
    }

    /// Load from the default location, or an empty store if there is none
    pub fn load_default() -> Result<Self, StoreError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::default())
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Reload the store from the original file
    pub fn reload(&mut self) -> Result<(), StoreError> {
        match self.source_path.clone() {
            Some(path) => {
                *self = Self::from_file(path)?;
                Ok(())
            }
            None => Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no source path set",
            ))),
        }
    }
}

impl KeyValueStore for TomlStore {
    fn read(&self, section: &str, name: &str) -> Option<ConfigValue> {
        self.values.read(section, name)
    }

    fn values(&self, section: &str) -> Option<Vec<(String, ConfigValue)>> {
        self.values.values(section)
    }
}

/// Convert a TOML scalar into a store value
fn convert_value(section: &str, name: &str, value: toml::Value) -> Result<ConfigValue, StoreError> {
    match value {
        toml::Value::Boolean(b) => Ok(ConfigValue::Bool(b)),
        toml::Value::Integer(i) => Ok(ConfigValue::Int(i)),
        toml::Value::String(s) => Ok(ConfigValue::Str(s)),
        other => Err(StoreError::UnsupportedValue {
            section: section.to_string(),
            name: name.to_string(),
            found: other.type_str().to_string(),
        }),
    }
}
