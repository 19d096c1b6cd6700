//! Error types for TOON encoding and decoding.
//!
//! Every failure class the codec can produce has its own variant, and every
//! variant that originates in source text carries the 1-based line number it
//! was detected on. Errors are returned as a single typed failure at the
//! `encode`/`decode` boundary; no partial results escape.
//!
//! ## Strict vs lenient
//!
//! Decoding with `strict = false` tolerates the structural inconsistencies
//! ([`Error::CountMismatch`], [`Error::RowWidthMismatch`],
//! [`Error::InvalidIndentation`], [`Error::BlankLineInArray`],
//! [`Error::PathConflict`], [`Error::MultipleRootPrimitives`]) by falling
//! back to best-effort behavior. [`Error::InvalidEscape`],
//! [`Error::UnterminatedString`] and [`Error::UnsupportedValue`] are always
//! fatal: they have no defined meaning to recover to.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{decode, DecodeOptions, Error};
//!
//! let err = decode("[5]: 1,2,3", &DecodeOptions::default()).unwrap_err();
//! assert!(matches!(err, Error::CountMismatch { declared: 5, actual: 3, .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// All failures the codec can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A quoted string used a backslash sequence other than the five
    /// permitted (`\\`, `\"`, `\n`, `\r`, `\t`). Fatal in both modes.
    #[error("line {line}: invalid escape sequence `{sequence}` in quoted string")]
    InvalidEscape { line: usize, sequence: String },

    /// A quoted region ran to the end of its line without a closing `"`.
    /// Fatal in both modes.
    #[error("line {line}: unterminated quoted string")]
    UnterminatedString { line: usize },

    /// A non-empty line at object scope has no top-level `:`.
    #[error("line {line}: expected `:` after key")]
    MissingColon { line: usize },

    /// Strict mode: indentation is not a multiple of the configured unit,
    /// a tab appeared in the indentation run, or a line is nested deeper
    /// than its scope allows.
    #[error("line {line}: invalid indentation: {detail}")]
    InvalidIndentation { line: usize, detail: String },

    /// The declared array length differs from the actual number of
    /// tokens/rows/items.
    #[error("line {line}: array declared {declared} elements but has {actual}")]
    CountMismatch {
        line: usize,
        declared: usize,
        actual: usize,
    },

    /// A tabular row's cell count differs from the declared field list.
    #[error("line {line}: row has {actual} fields, header declares {expected}")]
    RowWidthMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// Strict mode: a blank line between an array header and its last
    /// item/row.
    #[error("line {line}: blank line inside array body")]
    BlankLineInArray { line: usize },

    /// A malformed `[N]…:` header: missing count, unclosed bracket, unknown
    /// delimiter symbol, empty field list, or a missing colon after the
    /// header.
    #[error("line {line}: invalid array header: {detail}")]
    InvalidHeader { line: usize, detail: String },

    /// Strict mode: path expansion would overwrite an existing key or pass
    /// through a non-object value.
    #[error("line {line}: path `{path}` conflicts with an existing value")]
    PathConflict { line: usize, path: String },

    /// Strict mode: more than one top-level scalar line.
    #[error("line {line}: multiple top-level primitive values")]
    MultipleRootPrimitives { line: usize },

    /// The encoder was handed a value with no TOON representation
    /// (a NaN or infinite float).
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// Catch-all used by the serde bridge and for malformed input that no
    /// dedicated variant covers.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a catch-all error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::Error;
    ///
    /// let err = Error::message("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// The source line the error was detected on, when one exists.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::InvalidEscape { line, .. }
            | Error::UnterminatedString { line }
            | Error::MissingColon { line }
            | Error::InvalidIndentation { line, .. }
            | Error::CountMismatch { line, .. }
            | Error::RowWidthMismatch { line, .. }
            | Error::BlankLineInArray { line }
            | Error::InvalidHeader { line, .. }
            | Error::PathConflict { line, .. }
            | Error::MultipleRootPrimitives { line } => Some(*line),
            Error::UnsupportedValue(_) | Error::Message(_) => None,
        }
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
