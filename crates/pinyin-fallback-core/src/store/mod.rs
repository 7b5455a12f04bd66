// Pinyin Fallback Key-Value Store
// The external settings store the profiles stay in sync with

#[cfg(feature = "toml-store")]
pub mod toml_store;

#[cfg(feature = "toml-store")]
pub use toml_store::TomlStore;

use indexmap::IndexMap;

use crate::config::{ConfigValue, FromConfigValue};

/// Errors that can occur when loading a store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Unsupported value for {section}/{name}: {found}")]
    UnsupportedValue {
        section: String,
        name: String,
        found: String,
    },
}

/// Read side of the external key-value store.
pub trait KeyValueStore {
    /// One named value
    fn read(&self, section: &str, name: &str) -> Option<ConfigValue>;

    /// Every value of a section at once. `None` when the store cannot
    /// deliver a snapshot, in which case callers fall back to reading
    /// names one at a time.
    fn values(&self, section: &str) -> Option<Vec<(String, ConfigValue)>>;
}

/// Read a named value as `T`, using `fallback` when it is missing or of the
/// wrong type.
pub fn read_default<T, S>(store: &S, section: &str, name: &str, fallback: T) -> T
where
    T: FromConfigValue,
    S: KeyValueStore + ?Sized,
{
    match store.read(section, name) {
        Some(value) => value.normalize(fallback),
        None => fallback,
    }
}

/// In-memory store, keeping insertion order within each section
#[derive(Debug, Clone)]
pub struct MemoryStore {
    sections: IndexMap<String, IndexMap<String, ConfigValue>>,
    bulk: bool,
}

impl MemoryStore {
    /// A store that delivers whole-section snapshots
    pub fn new() -> Self {
        Self {
            sections: IndexMap::new(),
            bulk: true,
        }
    }

    /// A store that can only be read one name at a time
    pub fn without_snapshots() -> Self {
        Self {
            sections: IndexMap::new(),
            bulk: false,
        }
    }

    pub fn set(&mut self, section: &str, name: &str, value: impl Into<ConfigValue>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(name.to_string(), value.into());
    }

    pub fn with(mut self, section: &str, name: &str, value: impl Into<ConfigValue>) -> Self {
        self.set(section, name, value);
        self
    }

    #[cfg(feature = "toml-store")]
    pub(crate) fn from_sections(sections: IndexMap<String, IndexMap<String, ConfigValue>>) -> Self {
        Self {
            sections,
            bulk: true,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, section: &str, name: &str) -> Option<ConfigValue> {
        self.sections.get(section)?.get(name).cloned()
    }

    fn values(&self, section: &str) -> Option<Vec<(String, ConfigValue)>> {
        if !self.bulk {
            return None;
        }
        let values = self
            .sections
            .get(section)
            .map(|values| {
                values
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Some(values)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read(&self, section: &str, name: &str) -> Option<ConfigValue> {
        (**self).read(section, name)
    }

    fn values(&self, section: &str) -> Option<Vec<(String, ConfigValue)>> {
        (**self).values(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_default() {
        let store = MemoryStore::new()
            .with("pinyin", "LookupTablePageSize", 7)
            .with("pinyin", "AutoCommit", "yes");
        assert_eq!(read_default(&store, "pinyin", "LookupTablePageSize", 5i64), 7);
        assert_eq!(read_default(&store, "bopomofo", "LookupTablePageSize", 5i64), 5);
        assert!(!read_default(&store, "pinyin", "AutoCommit", false));
        assert!(read_default(&store, "pinyin", "Missing", true));
    }

    #[test]
    fn test_values_keep_insertion_order() {
        let store = MemoryStore::new()
            .with("pinyin", "b", true)
            .with("pinyin", "a", false);
        let names: Vec<String> = store
            .values("pinyin")
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(store.values("bopomofo"), Some(vec![]));
    }

    #[test]
    fn test_store_without_snapshots() {
        let store = MemoryStore::without_snapshots().with("pinyin", "a", true);
        assert_eq!(store.values("pinyin"), None);
        assert_eq!(store.read("pinyin", "a"), Some(ConfigValue::Bool(true)));
    }
}
