//! # dslfmt
//!
//! A tiny instruction language for formatting values into strings.
//!
//! ## What is it?
//!
//! An instruction is a one-line recipe — a directive token followed by
//! `/name:value` parameters — that tells the formatter how to render a
//! value. The same instruction works across scalars, sequences, and
//! mappings, so formatting rules can live in configuration instead of code.
//!
//! ```text
//! fe /end:", " /exclude-last-end:true
//! ```
//!
//! ## Key Features
//!
//! - **One-line instructions**: directive + parameters, parsed leniently
//! - **Serde Compatible**: format any `T: Serialize` directly
//! - **Format specs**: `/tostring:D4`, hex, binary, percent, strftime dates
//! - **Fluent builders**: emit instructions that round-trip exactly
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dslfmt = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Formatting values
//!
//! ```rust
//! use dslfmt::format;
//!
//! // sequences: each element followed by /end:, suppressed after the last
//! let out = format(&vec![1, 2, 3], "fe /end:\", \" /exclude-last-end:true").unwrap();
//! assert_eq!(out, "1, 2, 3");
//!
//! // scalars: render once, append /end:
//! let out = format(&"done", "basic /end:\"!\"").unwrap();
//! assert_eq!(out, "done!");
//!
//! // mappings: each pair through the /dict-format: template
//! use std::collections::BTreeMap;
//! let map = BTreeMap::from([("a", 1), ("b", 2)]);
//! let out = format(&map, "fe /dict-format:\"{0}={1}\" /end:\"; \" /exclude-last-end:true").unwrap();
//! assert_eq!(out, "a=1; b=2");
//! ```
//!
//! ### Building instructions fluently
//!
//! ```rust
//! use dslfmt::Instruction;
//!
//! let out = Instruction::sequence()
//!     .with_end(", ")
//!     .with_final_pair_separator(" and ")
//!     .exclude_last_end(true)
//!     .run(&vec!["red", "green", "blue"])
//!     .unwrap();
//! assert_eq!(out, "red, green and blue");
//! ```
//!
//! ### Dynamic values with the dsl! macro
//!
//! ```rust
//! use dslfmt::{dsl, format_value};
//!
//! let value = dsl!({
//!     "name": "Alice",
//!     "age": 30,
//!     "karma": (bigint 36_893_488_147_419_103_232u128)
//! });
//! let out = format_value(&value, "fe /dict-format:\"{0}: {1}\" /end:\"\\n\"").unwrap();
//! ```
//!
//! ## Grammar
//!
//! The full instruction grammar — directives, parameter allow-lists, legacy
//! spellings, and the escape table — is documented in the [`grammar`]
//! module.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Proper error propagation with `Result` types
//! - No panics in public API (except for logic errors that indicate bugs)

pub mod builder;
pub mod error;
pub mod fmtspec;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod params;
mod render;
pub mod ser;
pub mod syntax;
pub mod value;

pub use builder::{Instruction, MappingBuilder, ScalarBuilder, SequenceBuilder};
pub use error::{Error, Result};
pub use map::DslMap;
pub use params::Family;
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;

/// Format any `T: Serialize` with `instruction`.
///
/// The value is converted to a [`Value`] tree and the instruction applied
/// to it.
///
/// # Examples
///
/// ```rust
/// use dslfmt::format;
///
/// let out = format(&vec![1, 2, 3], "fe /end:\"|\"").unwrap();
/// assert_eq!(out, "1|2|3|");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the instruction is
/// empty, names an unknown directive, carries duplicate or disallowed
/// parameters, or does not fit the value's shape.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format<T>(value: &T, instruction: &str) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    format_value(&value, instruction)
}

/// Format an already-converted [`Value`] with `instruction`.
///
/// # Examples
///
/// ```rust
/// use dslfmt::{format_value, Value};
///
/// let out = format_value(&Value::from(255), "basic /tostring:X").unwrap();
/// assert_eq!(out, "FF");
/// ```
///
/// # Errors
///
/// Same conditions as [`format`], minus serialization.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_value(value: &Value, instruction: &str) -> Result<String> {
    render::apply(value, instruction)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful for formatting the same data repeatedly without re-serializing,
/// or for building values dynamically.
///
/// # Examples
///
/// ```rust
/// use dslfmt::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g., unsupported
/// types or non-string map keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(crate::ser::ValueSerializer)
}
