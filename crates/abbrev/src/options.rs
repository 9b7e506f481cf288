// Rust guideline compliant 2026-10-18

//! Resolution options.
//!
//! Options decide what happens once the prefix scan is done: whether a
//! missing key falls back to a value, whether every match is returned, and
//! whether several matches are an error.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A fallback value that may be left unset.
///
/// `Unset` is distinct from any caller value, so `Fallback::Value(None)` is a
/// real fallback when `V` is an `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback<V> {
    /// No fallback was given; a missing key is an error.
    Unset,
    /// Value returned when no key matches.
    Value(V),
}

impl<V> Default for Fallback<V> {
    fn default() -> Self {
        Fallback::Unset
    }
}

impl<V> Fallback<V> {
    /// Returns true if no fallback was given.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Fallback::Unset)
    }

    /// Borrows the fallback value, if any.
    #[must_use]
    pub fn as_value(&self) -> Option<&V> {
        match self {
            Fallback::Unset => None,
            Fallback::Value(value) => Some(value),
        }
    }
}

impl<V> From<V> for Fallback<V> {
    fn from(value: V) -> Self {
        Fallback::Value(value)
    }
}

// Only reached for a present field; absent fields take `unset_fallback`.
impl<'de, V: Deserialize<'de>> Deserialize<'de> for Fallback<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        V::deserialize(deserializer).map(Fallback::Value)
    }
}

impl<V: Serialize> Serialize for Fallback<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Fallback::Unset => Err(S::Error::custom("unset fallback has no value")),
            Fallback::Value(value) => value.serialize(serializer),
        }
    }
}

/// Options for a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options<V> {
    /// Returned when nothing matches. Ignored in multi mode.
    #[serde(default = "unset_fallback", skip_serializing_if = "Fallback::is_unset")]
    pub default: Fallback<V>,

    /// Return every match as a sequence.
    #[serde(default)]
    pub multi: bool,

    /// Treat several matches as an error. Ignored in multi mode.
    #[serde(default = "default_unique")]
    pub unique: bool,
}

fn unset_fallback<V>() -> Fallback<V> {
    Fallback::Unset
}

fn default_unique() -> bool {
    true
}

impl<V> Default for Options<V> {
    fn default() -> Self {
        Self {
            default: Fallback::Unset,
            multi: false,
            unique: default_unique(),
        }
    }
}

impl<V> Options<V> {
    /// Sets the fallback value.
    #[must_use]
    pub fn with_default(mut self, value: V) -> Self {
        self.default = Fallback::Value(value);
        self
    }

    /// Sets multi mode.
    #[must_use]
    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Sets whether several matches are an error.
    #[must_use]
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}

impl<V: Clone> Options<V> {
    /// Applies per-call overrides on top of these options.
    #[must_use]
    pub fn merged(&self, overrides: &Overrides<V>) -> Self {
        Self {
            default: overrides
                .default
                .clone()
                .unwrap_or_else(|| self.default.clone()),
            multi: overrides.multi.unwrap_or(self.multi),
            unique: overrides.unique.unwrap_or(self.unique),
        }
    }
}

impl<V: DeserializeOwned> Options<V> {
    /// Parses options from a TOML table.
    ///
    /// # Arguments
    ///
    /// * `content` - TOML text with optional `default`, `multi` and `unique` keys
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the text is not valid TOML or a field
    /// has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

impl<V: Serialize> Options<V> {
    /// Renders options as a TOML table.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the fallback value has no TOML form,
    /// such as a `None` fallback. TOML has no null, and dropping the key would
    /// load back as unset.
    pub fn to_toml_string(&self) -> Result<String> {
        if let Fallback::Value(value) = &self.default {
            toml::Value::try_from(value).map_err(|e| {
                Error::InvalidConfig(format!("Fallback has no TOML form: {}", e))
            })?;
        }
        toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize options: {}", e)))
    }
}

/// Per-call overrides for a bound [`Abbreviator`](crate::Abbreviator).
///
/// Fields left as `None` keep the bound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overrides<V> {
    /// Replacement fallback. `Some(Fallback::Unset)` clears a bound fallback.
    pub default: Option<Fallback<V>>,
    /// Replacement multi flag.
    pub multi: Option<bool>,
    /// Replacement unique flag.
    pub unique: Option<bool>,
}

impl<V> Default for Overrides<V> {
    fn default() -> Self {
        Self {
            default: None,
            multi: None,
            unique: None,
        }
    }
}

impl<V> Overrides<V> {
    /// Creates empty overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the fallback value.
    #[must_use]
    pub fn default_value(mut self, value: V) -> Self {
        self.default = Some(Fallback::Value(value));
        self
    }

    /// Clears the bound fallback for this call.
    #[must_use]
    pub fn no_default(mut self) -> Self {
        self.default = Some(Fallback::Unset);
        self
    }

    /// Overrides multi mode.
    #[must_use]
    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = Some(multi);
        self
    }

    /// Overrides the unique flag.
    #[must_use]
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = Some(unique);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options: Options<i32> = Options::default();
        assert!(options.default.is_unset());
        assert!(!options.multi);
        assert!(options.unique);
    }

    #[test]
    fn test_merged_keeps_unspecified_fields() {
        let options = Options::default().with_default(7).multi(true);
        let merged = options.merged(&Overrides::new().unique(false));
        assert_eq!(merged.default, Fallback::Value(7));
        assert!(merged.multi);
        assert!(!merged.unique);
    }

    #[test]
    fn test_merged_can_clear_default() {
        let options = Options::default().with_default(7);
        let merged = options.merged(&Overrides::new().no_default());
        assert!(merged.default.is_unset());
    }

    #[test]
    fn test_unset_fallback_does_not_serialize() {
        let fallback: Fallback<i32> = Fallback::Unset;
        assert!(serde_json::to_string(&fallback).is_err());
        assert_eq!(serde_json::to_string(&Fallback::Value(3)).unwrap(), "3");
    }

    #[test]
    fn test_null_fallback_is_not_unset() {
        let fallback: Fallback<Option<i32>> = Fallback::Value(None);
        assert!(!fallback.is_unset());
        assert_eq!(fallback.as_value(), Some(&None));
    }
}
