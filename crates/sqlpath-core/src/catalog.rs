//! Insertion-ordered keyed collection.
//!
//! Every manifest stores its entities as a JSON object keyed by a string id.
//! Several queries (`list_error_subtypes`, `list_concepts`, the registry scans)
//! must report entries in the order the manifest declared them, so the
//! collection keeps a `Vec` of entries plus a derived index by key.
//!
//! Deserialization goes through `serde_json::Map`, which preserves document
//! order (the workspace enables `serde_json/preserve_order`), and then decodes
//! each entry individually so a malformed entry is reported with its key.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Keyed entities in manifest declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedCatalog<T> {
    entries: Vec<(String, T)>,
    by_key: HashMap<String, usize>,
}

impl<T> Default for KeyedCatalog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_key: HashMap::new(),
        }
    }
}

impl<T> KeyedCatalog<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    ///
    /// A replaced entry keeps its original position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        if let Some(&position) = self.by_key.get(&key) {
            self.entries[position].1 = value;
            return;
        }
        self.by_key.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }

    /// Resolve an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.by_key.get(key).map(|&position| &self.entries[position].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// `(key, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for KeyedCatalog<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (key, value) in iter {
            catalog.insert(key, value);
        }
        catalog
    }
}

impl<T: Serialize> Serialize for KeyedCatalog<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for KeyedCatalog<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut catalog = Self::new();
        for (key, value) in raw {
            match serde_json::from_value::<T>(value) {
                Ok(entry) => catalog.insert(key, entry),
                Err(error) => return Err(D::Error::custom(format!("entry '{key}': {error}"))),
            }
        }
        Ok(catalog)
    }
}

impl<T: JsonSchema> JsonSchema for KeyedCatalog<T> {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        format!("KeyedCatalog_{}", T::schema_name()).into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <BTreeMap<String, T>>::json_schema(generator)
    }
}
