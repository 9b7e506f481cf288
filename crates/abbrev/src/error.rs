// Rust guideline compliant 2026-10-18

//! Error types for abbreviation lookups.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for abbreviation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error codes for caller-facing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The key is not a prefix of any candidate.
    NoMatch,
    /// The key is a prefix of several candidates.
    AmbiguousKey,
    /// Options could not be parsed.
    InvalidConfig,
}

/// Error types for abbreviation lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No candidate key starts with the query key.
    #[error("No such key: {0}")]
    NoMatch(String),

    /// The query key is a prefix of more than one candidate key.
    ///
    /// Carries the query key and the colliding full keys in enumeration order.
    #[error("Ambiguous key: {0} matches {1:?}")]
    Ambiguous(String, Vec<String>),

    /// Serialized options were malformed.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns the query key for lookup failures.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::NoMatch(key) | Error::Ambiguous(key, _) => Some(key),
            Error::InvalidConfig(_) => None,
        }
    }

    /// Returns the colliding candidate keys of an ambiguous lookup.
    #[must_use]
    pub fn matches(&self) -> &[String] {
        match self {
            Error::Ambiguous(_, matches) => matches.as_slice(),
            _ => &[],
        }
    }

    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::NoMatch(_) => ErrorCode::NoMatch,
            Error::Ambiguous(_, _) => ErrorCode::AmbiguousKey,
            Error::InvalidConfig(_) => ErrorCode::InvalidConfig,
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::NoMatch(key) => Some(serde_json::json!({
                "key": key,
            })),
            Error::Ambiguous(key, matches) => Some(serde_json::json!({
                "key": key,
                "matches": matches,
            })),
            Error::InvalidConfig(_) => None,
        }
    }
}
