//! Error types for instruction parsing and formatting.
//!
//! Every failure is synchronous and non-retryable: an instruction either
//! formats its target completely or reports one of the variants below. The
//! only lenient spots in the engine are deliberately not errors — an invalid
//! `\uXXXX` hex sequence is left verbatim, an unparseable boolean parameter
//! falls back to `false`, and an unmatched `{n}` placeholder is copied
//! through unchanged.
//!
//! ## Examples
//!
//! ```rust
//! use dslfmt::{format, Error};
//!
//! let err = format(&42, "basic /end:\"x\" /end:\"y\"").unwrap_err();
//! assert!(matches!(err, Error::DuplicateParameter { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors the formatter can raise.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The instruction string is empty or whitespace-only.
    #[error("instruction must not be empty or blank")]
    EmptyInstruction,

    /// A parameter name occurs more than once outside quoted regions.
    #[error("parameter '{name}' is specified multiple times")]
    DuplicateParameter { name: String },

    /// Parameter names outside the active directive's allow-list.
    ///
    /// `names` carries every offending name so callers can report all
    /// violations at once.
    #[error("invalid parameters for {directive} processing: {}", names.join(", "))]
    InvalidParameters {
        directive: &'static str,
        names: Vec<String>,
    },

    /// A required parameter is absent or empty.
    #[error("'/{name}:' parameter is required when processing mappings")]
    MissingRequiredParameter { name: &'static str },

    /// A format spec was applied to a value without formatted-string support.
    #[error("'/tostring:' requires a value with format-spec support, found {found}")]
    Unformattable { found: &'static str },

    /// A sequence/mapping directive was applied to a non-enumerable value.
    #[error("value must be a sequence or mapping (and not a string) for 'fe', found {found}")]
    NotEnumerable { found: &'static str },

    /// The instruction's leading token names no known directive.
    #[error("unknown directive: {token}")]
    UnknownDirective { token: String },

    /// A type the serde bridge cannot represent as a [`Value`](crate::Value).
    #[error("unsupported type: {0}")]
    Unsupported(String),

    /// Generic message, produced through `serde::ser::Error`.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a duplicate-parameter error for `name`.
    pub fn duplicate(name: &str) -> Self {
        Error::DuplicateParameter {
            name: name.to_string(),
        }
    }

    /// Creates an invalid-parameters error listing every offender.
    pub fn invalid_parameters(directive: &'static str, names: Vec<String>) -> Self {
        Error::InvalidParameters { directive, names }
    }

    /// Creates an unformattable-value error naming the value kind found.
    pub fn unformattable(found: &'static str) -> Self {
        Error::Unformattable { found }
    }

    /// Creates a not-enumerable error naming the value kind found.
    pub fn not_enumerable(found: &'static str) -> Self {
        Error::NotEnumerable { found }
    }

    /// Creates an unknown-directive error for `token`.
    pub fn unknown_directive(token: &str) -> Self {
        Error::UnknownDirective {
            token: token.to_string(),
        }
    }

    /// Creates an unsupported-type error for the serde bridge.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::Unsupported(msg.to_string())
    }

    /// Creates a generic error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
