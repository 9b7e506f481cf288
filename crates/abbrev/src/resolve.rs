// Rust guideline compliant 2026-10-18

//! Abbreviation resolution.
//!
//! Resolution follows a fixed precedence:
//!
//! - A key present verbatim wins, even if it also prefixes other keys
//! - Otherwise every key starting with the query is collected in order
//! - Zero matches fall back, one match wins, several are resolved by options

use crate::{Candidates, Error, Fallback, Options, Overrides, Result};
use tracing::{debug, trace};

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<V> {
    /// The single value a key resolved to.
    Single(V),
    /// Every matching value in enumeration order (multi mode).
    Multiple(Vec<V>),
    /// The configured fallback, returned because nothing matched.
    Fallback(V),
}

impl<V> Resolution<V> {
    /// Returns the value unless this is a multi-mode result.
    #[must_use]
    pub fn into_single(self) -> Option<V> {
        match self {
            Resolution::Single(value) | Resolution::Fallback(value) => Some(value),
            Resolution::Multiple(_) => None,
        }
    }

    /// Returns every value carried by the result.
    #[must_use]
    pub fn into_vec(self) -> Vec<V> {
        match self {
            Resolution::Single(value) | Resolution::Fallback(value) => vec![value],
            Resolution::Multiple(values) => values,
        }
    }

    /// Returns true if the configured fallback was used.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }
}

/// Resolves `key` against `candidates`.
///
/// # Arguments
///
/// * `candidates` - Full keys and their values
/// * `key` - Abbreviated or full key
/// * `options` - Fallback, multi and unique settings
///
/// # Returns
///
/// The matched value, every matched value in multi mode, or the fallback.
///
/// # Errors
///
/// Returns an error if:
/// - No key starts with `key` and no fallback is set (`Error::NoMatch`)
/// - Several keys start with `key`, `unique` is set and `multi` is not
///   (`Error::Ambiguous`)
pub fn resolve<V: Clone>(
    candidates: &Candidates<V>,
    key: &str,
    options: &Options<V>,
) -> Result<Resolution<V>> {
    if options.multi {
        return Ok(Resolution::Multiple(resolve_all(candidates, key)));
    }
    Ok(match resolve_one(candidates, key, &options.default, options.unique)? {
        Hit::Matched(value) => Resolution::Single(value),
        Hit::Fallback(value) => Resolution::Fallback(value),
    })
}

enum Hit<V> {
    Matched(V),
    Fallback(V),
}

impl<V> Hit<V> {
    fn into_value(self) -> V {
        match self {
            Hit::Matched(value) | Hit::Fallback(value) => value,
        }
    }
}

fn resolve_all<V: Clone>(candidates: &Candidates<V>, key: &str) -> Vec<V> {
    if let Some(value) = candidates.get(key) {
        debug!(key, "exact match");
        return vec![value.clone()];
    }
    let values: Vec<V> = candidates
        .prefixed(key)
        .map(|(_, value)| value.clone())
        .collect();
    trace!(key, matches = values.len(), "prefix scan");
    values
}

fn resolve_one<V: Clone>(
    candidates: &Candidates<V>,
    key: &str,
    default: &Fallback<V>,
    unique: bool,
) -> Result<Hit<V>> {
    if let Some(value) = candidates.get(key) {
        debug!(key, "exact match");
        return Ok(Hit::Matched(value.clone()));
    }

    let (keys, values): (Vec<&str>, Vec<&V>) = candidates.prefixed(key).unzip();
    trace!(key, matches = keys.len(), "prefix scan");

    match values.as_slice() {
        [] => match default {
            Fallback::Value(value) => {
                debug!(key, "no match, using fallback");
                Ok(Hit::Fallback(value.clone()))
            }
            Fallback::Unset => Err(Error::NoMatch(key.to_string())),
        },
        [value] => Ok(Hit::Matched((*value).clone())),
        [first, ..] if !unique => Ok(Hit::Matched((*first).clone())),
        _ => {
            debug!(key, ?keys, "ambiguous key");
            Err(Error::Ambiguous(
                key.to_string(),
                keys.into_iter().map(str::to_string).collect(),
            ))
        }
    }
}

/// Expands `key` with default options.
///
/// # Errors
///
/// Returns `Error::NoMatch` or `Error::Ambiguous` as [`resolve`] does.
///
/// # Examples
///
/// ```
/// use abbrev::{abbrev, Candidates};
///
/// let commands = Candidates::from(["one", "two", "three"]);
/// assert_eq!(abbrev(&commands, "tw").unwrap(), "two");
/// assert!(abbrev(&commands, "t").is_err());
/// ```
pub fn abbrev<V: Clone>(candidates: &Candidates<V>, key: &str) -> Result<V> {
    resolve_one(candidates, key, &Fallback::Unset, true).map(Hit::into_value)
}

/// Binds `candidates` and `options` into a reusable [`Abbreviator`].
pub fn bind<V>(candidates: impl Into<Candidates<V>>, options: Options<V>) -> Abbreviator<V> {
    Abbreviator::new(candidates).with_options(options)
}

/// A resolver bound to a candidate set and options.
///
/// # Examples
///
/// ```
/// use abbrev::{Abbreviator, Candidates, Options};
///
/// let numbers = Candidates::from(vec![("one", 1), ("two", 2), ("three", 3)]);
/// let multi = Abbreviator::new(numbers).with_options(Options::default().multi(true));
///
/// assert_eq!(multi.resolve("t").unwrap().into_vec(), vec![2, 3]);
/// assert_eq!(multi.matches("o"), vec![1]);
/// assert_eq!(multi.matches("four"), Vec::<i32>::new());
/// ```
#[derive(Debug, Clone)]
pub struct Abbreviator<V> {
    candidates: Candidates<V>,
    options: Options<V>,
}

impl<V> Abbreviator<V> {
    /// Creates a resolver with default options.
    pub fn new(candidates: impl Into<Candidates<V>>) -> Self {
        Self {
            candidates: candidates.into(),
            options: Options::default(),
        }
    }

    /// Replaces the bound options.
    #[must_use]
    pub fn with_options(mut self, options: Options<V>) -> Self {
        self.options = options;
        self
    }

    /// Bound options.
    pub fn options(&self) -> &Options<V> {
        &self.options
    }

    /// Bound candidates.
    pub fn candidates(&self) -> &Candidates<V> {
        &self.candidates
    }

    /// Mutable access to the candidates. Later resolutions see the changes.
    pub fn candidates_mut(&mut self) -> &mut Candidates<V> {
        &mut self.candidates
    }
}

impl<V: Clone> Abbreviator<V> {
    /// Resolves `key` with the bound options.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoMatch` or `Error::Ambiguous` as [`resolve`] does.
    pub fn resolve(&self, key: &str) -> Result<Resolution<V>> {
        resolve(&self.candidates, key, &self.options)
    }

    /// Resolves `key` with per-call overrides applied to the bound options.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoMatch` or `Error::Ambiguous` as [`resolve`] does.
    pub fn resolve_with(&self, key: &str, overrides: &Overrides<V>) -> Result<Resolution<V>> {
        resolve(&self.candidates, key, &self.options.merged(overrides))
    }

    /// Resolves `key` to a single value, ignoring the bound multi flag.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoMatch` or `Error::Ambiguous` as [`resolve`] does.
    pub fn expand(&self, key: &str) -> Result<V> {
        resolve_one(
            &self.candidates,
            key,
            &self.options.default,
            self.options.unique,
        )
        .map(Hit::into_value)
    }

    /// Returns every value matching `key`, in enumeration order.
    ///
    /// A verbatim key yields only its own value.
    pub fn matches(&self, key: &str) -> Vec<V> {
        resolve_all(&self.candidates, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers() -> Candidates<i32> {
        Candidates::from(vec![("one", 1), ("two", 2), ("three", 3)])
    }

    #[test]
    fn test_exact_match_beats_prefix() {
        let candidates = Candidates::from(vec![("on", 0), ("one", 1)]);
        let resolved = resolve(&candidates, "on", &Options::default()).unwrap();
        assert_eq!(resolved, Resolution::Single(0));
    }

    #[test]
    fn test_exact_match_is_wrapped_in_multi_mode() {
        let candidates = Candidates::from(vec![("on", 0), ("one", 1)]);
        let options = Options::default().multi(true);
        let resolved = resolve(&candidates, "on", &options).unwrap();
        assert_eq!(resolved, Resolution::Multiple(vec![0]));
    }

    #[test]
    fn test_multi_ignores_default_on_no_match() {
        let options = Options::default().with_default(9).multi(true);
        let resolved = resolve(&numbers(), "four", &options).unwrap();
        assert_eq!(resolved, Resolution::Multiple(vec![]));
    }

    #[test]
    fn test_non_unique_returns_first() {
        let options = Options::default().unique(false);
        let resolved = resolve(&numbers(), "t", &options).unwrap();
        assert_eq!(resolved, Resolution::Single(2));
    }

    #[test]
    fn test_resolution_helpers() {
        assert_eq!(Resolution::Single(1).into_single(), Some(1));
        assert_eq!(Resolution::<i32>::Multiple(vec![1, 2]).into_single(), None);
        assert_eq!(Resolution::Fallback(5).into_vec(), vec![5]);
        assert!(Resolution::Fallback(5).is_fallback());
        assert!(!Resolution::Single(5).is_fallback());
    }
}
