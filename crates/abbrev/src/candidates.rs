// Rust guideline compliant 2026-10-18

//! Ordered candidate sets.
//!
//! Every input shape, whether a plain sequence of names or a mapping from
//! names to values, is normalized into a [`Candidates`] association list.
//! Enumeration order is preserved and decides which match comes first.

use std::collections::{BTreeMap, HashMap};

/// An ordered set of full keys, each mapped to a value.
///
/// Keys are unique. Inserting a key that is already present replaces its
/// value and keeps its original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for Candidates<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl Candidates<String> {
    /// Builds a self-mapped candidate set from a sequence of names.
    ///
    /// Each name maps to itself. Repeated names keep their first position.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        keys.into_iter()
            .map(|key| {
                let key = key.into();
                (key.clone(), key)
            })
            .collect()
    }
}

impl<V> Candidates<V> {
    /// Creates an empty candidate set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.position(key).map(|index| self.entries.remove(index).1)
    }

    /// Looks up a key by exact equality.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    /// Returns true if `key` is present verbatim.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Iterates keys in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates entries whose key starts with `prefix`.
    ///
    /// The empty prefix matches every entry.
    pub fn prefixed<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a V)> {
        self.iter().filter(move |(key, _)| key.starts_with(prefix))
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(candidate, _)| candidate == key)
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Candidates<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut candidates = Self::new();
        for (key, value) in iter {
            candidates.insert(key, value);
        }
        candidates
    }
}

impl<K: Into<String>, V> From<Vec<(K, V)>> for Candidates<V> {
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<V> From<BTreeMap<String, V>> for Candidates<V> {
    fn from(map: BTreeMap<String, V>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

/// Enumeration order follows the map's iteration order, which is unspecified.
impl<V, S> From<HashMap<String, V, S>> for Candidates<V> {
    fn from(map: HashMap<String, V, S>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl From<Vec<&str>> for Candidates<String> {
    fn from(keys: Vec<&str>) -> Self {
        Self::from_keys(keys)
    }
}

impl From<Vec<String>> for Candidates<String> {
    fn from(keys: Vec<String>) -> Self {
        Self::from_keys(keys)
    }
}

impl From<&[&str]> for Candidates<String> {
    fn from(keys: &[&str]) -> Self {
        Self::from_keys(keys.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Candidates<String> {
    fn from(keys: [&str; N]) -> Self {
        Self::from_keys(keys)
    }
}
