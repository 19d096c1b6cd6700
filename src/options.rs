//! Configuration for TOON encoding and decoding.
//!
//! Both directions of the codec take an immutable options struct:
//!
//! - [`EncodeOptions`]: indentation width, delimiter, key folding
//! - [`DecodeOptions`]: indentation width, strict mode, path expansion
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{EncodeOptions, DecodeOptions, Delimiter, KeyFolding, PathExpansion};
//!
//! let enc = EncodeOptions::new()
//!     .with_delimiter(Delimiter::Pipe)
//!     .with_key_folding(KeyFolding::Safe);
//!
//! let dec = DecodeOptions::new()
//!     .with_strict(false)
//!     .with_expand_paths(PathExpansion::Safe);
//! ```

/// Delimiter used for inline array slots and tabular row cells.
///
/// The delimiter set in [`EncodeOptions`] is used document-wide: it separates
/// values within every array the encoder emits, it is declared in each
/// non-comma array header (`[3\t]`, `[3|]`), and it participates in every
/// string's quoting decision. On decode, each array's header declares its own
/// active delimiter (absent symbol means comma).
///
/// # Examples
///
/// ```rust
/// use toon_codec::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::Pipe.as_str(), "|");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }
}

/// Whether the encoder collapses single-key object chains into dotted paths.
///
/// With `Safe`, a chain like `{"a": {"b": 1}}` emits as `a.b: 1` provided
/// every segment is a plain identifier and each intermediate object has
/// exactly one entry. `Off` (the default) never folds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyFolding {
    #[default]
    Off,
    Safe,
}

/// Whether the decoder expands unquoted dotted keys into nested objects.
///
/// With `Safe`, a key like `a.b` whose segments are all plain identifiers
/// creates/merges nested objects (`{"a": {"b": …}}`). Quoted keys are never
/// expanded. `Off` (the default) stores every key literally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PathExpansion {
    #[default]
    Off,
    Safe,
}

/// Configuration for [`encode`](crate::encode).
///
/// # Examples
///
/// ```rust
/// use toon_codec::{EncodeOptions, Delimiter};
///
/// let options = EncodeOptions::new()
///     .with_indent(4)
///     .with_delimiter(Delimiter::Tab);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Spaces per nesting level. Default 2.
    pub indent: usize,
    /// Document delimiter for inline slots and tabular cells. Default comma.
    pub delimiter: Delimiter,
    /// Single-key chain folding. Default off.
    pub key_folding: KeyFolding,
    /// Maximum segments in a folded path; `None` is unbounded and
    /// `Some(0)` disables folding entirely. Default unbounded.
    pub flatten_depth: Option<usize>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            key_folding: KeyFolding::default(),
            flatten_depth: None,
        }
    }
}

impl EncodeOptions {
    /// Creates the default options (2-space indent, comma delimiter, no
    /// key folding).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per nesting level. Values below 1 are
    /// clamped to 1.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }

    /// Sets the document delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables or disables key folding.
    #[must_use]
    pub fn with_key_folding(mut self, key_folding: KeyFolding) -> Self {
        self.key_folding = key_folding;
        self
    }

    /// Bounds the number of segments in a folded path.
    #[must_use]
    pub fn with_flatten_depth(mut self, depth: usize) -> Self {
        self.flatten_depth = Some(depth);
        self
    }
}

/// Configuration for [`decode`](crate::decode).
///
/// # Examples
///
/// ```rust
/// use toon_codec::DecodeOptions;
///
/// let options = DecodeOptions::new();
/// assert!(options.strict);
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Expected spaces per nesting level. Default 2.
    pub indent: usize,
    /// Enforce all structural checks. Default true.
    pub strict: bool,
    /// Dotted-key expansion. Default off.
    pub expand_paths: PathExpansion,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            indent: 2,
            strict: true,
            expand_paths: PathExpansion::default(),
        }
    }
}

impl DecodeOptions {
    /// Creates the default options (2-space indent, strict, no path
    /// expansion).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expected number of spaces per nesting level. Values below 1
    /// are clamped to 1.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }

    /// Enables or disables strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enables or disables dotted-key path expansion.
    #[must_use]
    pub fn with_expand_paths(mut self, expand_paths: PathExpansion) -> Self {
        self.expand_paths = expand_paths;
        self
    }
}
