// Rust guideline compliant 2026-10-18

//! Abbrev
//!
//! Expands abbreviated keys against a fixed set of full keys, so callers can
//! type `tw` for `two` when nothing else starts with `tw`:
//! - Candidate sets (sequences of names or name/value mappings)
//! - Resolution with exact-match precedence and ambiguity detection
//! - Fallback values, multi-match mode and first-match mode
//! - Reusable bound resolvers with per-call overrides
//!
//! ```
//! use abbrev::{bind, resolve, Candidates, Error, Options, Resolution};
//!
//! let numbers = Candidates::from(vec![("one", 1), ("two", 2), ("three", 3)]);
//!
//! assert_eq!(resolve(&numbers, "o", &Options::default()), Ok(Resolution::Single(1)));
//! assert_eq!(
//!     resolve(&numbers, "t", &Options::default()),
//!     Err(Error::Ambiguous("t".into(), vec!["two".into(), "three".into()]))
//! );
//!
//! let first = bind(numbers, Options::default().unique(false));
//! assert_eq!(first.expand("t"), Ok(2));
//! ```

pub mod candidates;
pub mod error;
pub mod options;
pub mod resolve;

pub use candidates::Candidates;
pub use error::{Error, ErrorCode, Result};
pub use options::{Fallback, Options, Overrides};
pub use resolve::{abbrev, bind, resolve, Abbreviator, Resolution};
