//! The TOON wire format as implemented by this crate.
//!
//! TOON (Token-Oriented Object Notation) is a line-oriented,
//! indentation-based encoding of the JSON data model, designed to cut token
//! count when feeding structured data to LLMs. This module documents the
//! canonical grammar the encoder emits and the decoder validates.
//!
//! # Canonical output invariants
//!
//! - Lines are separated by LF; there is no trailing newline.
//! - Indentation is spaces only (2 per level by default); never tabs.
//! - Exactly one space follows `:` before a value and `]:` before inline
//!   array data.
//! - No line carries trailing whitespace.
//! - Numbers use canonical form, strings are quoted only when necessary.
//!
//! # Objects
//!
//! One `key: value` pair per line; nesting by indentation:
//!
//! ```text
//! name: Alice
//! address:
//!   city: Berlin
//!   zip: "10115"
//! ```
//!
//! A key is emitted bare when it needs no quoting and contains no dot;
//! everything else is quoted with the usual escapes. `key:` with nothing
//! beneath is an empty object.
//!
//! # Primitives
//!
//! | Kind    | Form                                                    |
//! |---------|---------------------------------------------------------|
//! | Null    | `null`                                                  |
//! | Boolean | `true` / `false`                                        |
//! | Integer | decimal digits, optional `-`, no leading zeros          |
//! | Float   | shortest decimal, single `.`, no exponent, `-0` → `0`   |
//! | String  | bare when unambiguous, otherwise `"…"`                  |
//!
//! The decoder additionally accepts exponent forms (`1e3`, `2.5E-2`) and
//! reads them as floats. A token with a redundant leading zero (`05`) is a
//! string, not a number.
//!
//! # String quoting
//!
//! A string value is quoted when it is empty; has leading/trailing spaces
//! or any control character; equals `true`, `false` or `null`; looks like a
//! number; contains `"`, `\`, `:`, `[`, `]`, `{`, `}` or the document
//! delimiter; or starts with `-`. Quoted strings use exactly five escapes:
//! `\\`, `\"`, `\n`, `\r`, `\t`. Every other character, including all
//! non-ASCII, is emitted raw; every other backslash sequence is rejected on
//! decode.
//!
//! # Arrays
//!
//! Every array declares its length in a bracket header. The delimiter
//! symbol after the count selects the active delimiter: nothing for comma,
//! a literal tab, or `|`.
//!
//! Empty: `items[0]:`
//!
//! Inline (all elements primitive):
//!
//! ```text
//! tags[3]: admin,ops,dev
//! ```
//!
//! Tabular (uniform objects with primitive fields — the biggest token
//! saver):
//!
//! ```text
//! users[2]{id,name}:
//!   1,Alice
//!   2,Bob
//! ```
//!
//! List (everything else), one `- ` item per line. An object item puts its
//! first entry on the hyphen line, its remaining entries on the following
//! lines at the same depth, and nested children one level deeper:
//!
//! ```text
//! mixed[3]:
//!   - 1
//!   - name: Alice
//!     role: admin
//!   - [2]: a,b
//! ```
//!
//! In strict mode the declared count must match the actual number of
//! elements, every tabular row must have exactly as many cells as declared
//! fields, and no blank line may appear between a header and the last line
//! of its body.
//!
//! # Key folding and path expansion
//!
//! With `key_folding = Safe` the encoder collapses chains of single-entry
//! objects whose keys are plain identifiers (`[A-Za-z_][A-Za-z0-9_]*`):
//!
//! ```text
//! user.profile:
//!   name: Alice
//!   age: 30
//! ```
//!
//! With `expand_paths = Safe` the decoder performs the inverse: unquoted
//! dotted identifier keys become nested objects, merging with siblings.
//! Expanding a path onto an existing value is a conflict in strict mode and
//! last-write-wins in lenient mode. Quoted keys like `"a.b"` stay literal
//! in both directions.
//!
//! # Root forms
//!
//! A document is an object (the common case), a keyless root array
//! (`[N]…:` on the first line), a single bare primitive, or empty (the
//! empty object). Strict mode rejects a second top-level primitive line.

// Documentation only; no implementation code.
