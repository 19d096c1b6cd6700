//! # toon_codec
//!
//! A canonical encoder/decoder for TOON (Token-Oriented Object Notation),
//! a compact, line-oriented text format for the JSON data model designed to
//! reduce token count when feeding structured data to LLMs.
//!
//! ## Key Features
//!
//! - **Canonical output**: deterministic byte-for-byte encoding — canonical
//!   numbers, minimal quoting, no trailing whitespace or newline
//! - **Tabular arrays**: uniform object arrays collapse into compact tables
//!   with a single header row
//! - **Strict decoding**: declared lengths, row widths, indentation and
//!   blank lines are all validated, with typed errors carrying line numbers;
//!   a lenient mode accepts best-effort input instead
//! - **Key folding / path expansion**: optional `a.b.c: 1` compression of
//!   single-key object chains, with the decoder-side inverse
//! - **Serde compatible**: works with `#[derive(Serialize, Deserialize)]`
//!   via [`to_string`] / [`from_str`], or dynamically via [`Value`] and the
//!   [`toon!`] macro
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon_codec::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let toon = to_string(&user).unwrap();
//! assert_eq!(toon, "id: 123\nname: Alice\nactive: true");
//!
//! let back: User = from_str(&toon).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! Arrays of uniform objects serialize as tables:
//!
//! ```rust
//! use serde::Serialize;
//! use toon_codec::to_string;
//!
//! #[derive(Serialize)]
//! struct Product { id: u32, name: String }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string() },
//!     Product { id: 2, name: "Gadget".to_string() },
//! ];
//!
//! assert_eq!(
//!     to_string(&products).unwrap(),
//!     "[2]{id,name}:\n  1,Widget\n  2,Gadget"
//! );
//! ```
//!
//! ## Working with dynamic values
//!
//! The codec proper operates on [`Value`] trees:
//!
//! ```rust
//! use toon_codec::{decode, encode, toon, DecodeOptions, EncodeOptions};
//!
//! let value = toon!({ "tags": ["rust", "llm"] });
//! let text = encode(&value, &EncodeOptions::default()).unwrap();
//! assert_eq!(text, "tags[2]: rust,llm");
//!
//! let back = decode(&text, &DecodeOptions::default()).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! ## Guarantees
//!
//! - Encoding a value and decoding the result yields the original value
//!   (with `-0.0` normalized to `0.0`, and integral floats read back as
//!   integers — the wire format cannot tell `2.0` from `2`)
//! - Encoding is deterministic and idempotent across round trips
//! - No `unsafe` code; no panics in the public API
//! - `encode`/`decode` are pure: no I/O, no shared state, safe to call
//!   concurrently on separate inputs
//! - Time and memory are linear in the input size, plus stack recursion
//!   proportional to nesting depth
//!
//! ## Format
//!
//! See the [`spec`] module for the wire format: quoting rules, array
//! forms, strict-mode checks, and the folding/expansion grammar.

pub mod de;
mod decode;
mod encode;
pub mod error;
mod header;
pub mod macros;
pub mod map;
mod number;
pub mod options;
mod quoting;
mod scan;
pub mod ser;
pub mod spec;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use map::Map;
pub use options::{DecodeOptions, Delimiter, EncodeOptions, KeyFolding, PathExpansion};
pub use ser::{Serializer, ValueSerializer};
pub use value::{Number, Value};

use serde::{Deserialize, Serialize};
use std::io;

/// Encode a [`Value`] as a canonical TOON document.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{encode, toon, EncodeOptions};
///
/// let value = toon!([1, 2, 3]);
/// let text = encode(&value, &EncodeOptions::default()).unwrap();
/// assert_eq!(text, "[3]: 1,2,3");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] for NaN or infinite floats; they
/// have no representation in the format.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: &Value, options: &EncodeOptions) -> Result<String> {
    encode::encode_value(value, options)
}

/// Decode a TOON document into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use toon_codec::{decode, toon, DecodeOptions};
///
/// let value = decode("a: 1\nb: two", &DecodeOptions::default()).unwrap();
/// assert_eq!(value, toon!({ "a": 1, "b": "two" }));
/// ```
///
/// # Errors
///
/// Returns a typed error with the offending line number; see
/// [`Error`] for the taxonomy and which classes lenient mode tolerates.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(input: &str, options: &DecodeOptions) -> Result<Value> {
    decode::decode_value(input, options)
}

/// Serialize any `T: Serialize` to a TOON string with default options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::to_string;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (non-finite floats,
/// non-string map keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a TOON string with custom options.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{to_string_with_options, Delimiter, EncodeOptions};
///
/// let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
/// let toon = to_string_with_options(&vec![1, 2, 3], options).unwrap();
/// assert_eq!(toon, "[3|]: 1|2|3");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Convert any `T: Serialize` into a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::to_value;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (e.g. a map with
/// non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Deserialize a `T` from a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::{from_value, toon};
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(toon!({ "x": 1, "y": 2 })).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the value does not match the target type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(crate::de::ValueDeserializer::new(value))
}

/// Serialize any `T: Serialize` to a writer in TOON format.
///
/// # Errors
///
/// Returns an error if serialization fails or the write fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or the write fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let toon = to_string_with_options(value, options)?;
    writer
        .write_all(toon.as_bytes())
        .map_err(|e| Error::message(format!("io error: {e}")))?;
    Ok(())
}

/// Deserialize a `T` from TOON text with strict defaults.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a typed error with line context when the input is not valid
/// TOON or does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str(s);
    T::deserialize(&mut deserializer)
}

/// Deserialize a `T` from TOON text with custom options (lenient mode,
/// path expansion, indent width).
///
/// # Examples
///
/// ```rust
/// use toon_codec::{from_str_with_options, DecodeOptions};
///
/// let options = DecodeOptions::new().with_strict(false);
/// let nums: Vec<i32> = from_str_with_options("[5]: 1,2,3", options).unwrap();
/// assert_eq!(nums, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns a typed error when the input is invalid under the given options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'a, T>(s: &'a str, options: DecodeOptions) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str_with_options(s, options);
    T::deserialize(&mut deserializer)
}

/// Deserialize a `T` from an I/O stream of TOON text.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid TOON, or the
/// data does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::message(format!("io error: {e}")))?;
    from_str(&string)
}

/// Deserialize a `T` from bytes of TOON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid TOON, or
/// do not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::message(e.to_string()))?;
    from_str(s)
}
