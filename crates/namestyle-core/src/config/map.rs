//! Case-insensitive flat key/value view over merged configuration entries

use indexmap::IndexMap;

#[derive(Debug, Clone)]
struct Entry {
    /// Key with its spelling as written in the source
    key: String,
    value: String,
}

/// Flat mapping from configuration key to string value.
///
/// Lookup ignores key casing; enumeration yields keys with their original
/// spelling in insertion order. A later insert for the same key (in any
/// casing) overwrites the earlier value. Nothing mutates the map after
/// construction, so a built map can be shared freely across invocations.
#[derive(Debug, Clone, Default)]
pub struct ConfigMap {
    entries: IndexMap<String, Entry>,
}

impl ConfigMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert an entry; the last write for a key wins
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        self.entries
            .insert(key.to_lowercase(), Entry { key, value });
    }

    /// Look up a value by key, ignoring case
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_lowercase())
            .map(|entry| entry.value.as_str())
    }

    /// Check whether a key is present, ignoring case
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    /// Iterate keys with their original spelling, in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|entry| entry.key.as_str())
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ConfigMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
