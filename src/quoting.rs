//! String classification, escaping, and quote-aware scanning.
//!
//! A string value is emitted unquoted whenever the decoder would read it
//! back verbatim as a string. [`needs_quoting`] is the single authority for
//! that decision; the encoder, header emission, and tabular cells all route
//! through it.
//!
//! The escape set is closed: `\\`, `\"`, `\n`, `\r`, `\t` and nothing else.
//! [`unquote`] rejects any other backslash sequence.
//!
//! The scanning helpers ([`find_unquoted`], [`split_row`], [`close_quote`])
//! work on bytes. Every structural character (quote, colon, bracket,
//! delimiter) is ASCII, and UTF-8 continuation bytes never collide with
//! ASCII, so byte scanning always lands on character boundaries.

use crate::error::{Error, Result};
use crate::number;
use crate::options::Delimiter;

/// Decides whether a string value must be quoted to survive a round trip.
///
/// Quoting is required when any of the following hold:
///
/// 1. the string is empty;
/// 2. it has a leading or trailing space, or any C0/DEL control character
///    anywhere;
/// 3. it equals a reserved literal (`true`, `false`, `null`);
/// 4. it could be mistaken for a number (including leading-zero forms like
///    `05`);
/// 5. it contains a structural character: `"`, `\`, `:`, `[`, `]`, `{`, `}`;
/// 6. it contains the document delimiter;
/// 7. it begins with `-` (the list-item marker).
pub(crate) fn needs_quoting(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.starts_with(' ') || s.ends_with(' ') {
        return true;
    }
    if s.chars().any(|c| c <= '\u{1f}' || c == '\u{7f}') {
        return true;
    }
    if matches!(s, "true" | "false" | "null") {
        return true;
    }
    if number::is_numeric_like(s) {
        return true;
    }
    if s.contains(['"', '\\', ':', '[', ']', '{', '}']) {
        return true;
    }
    if s.contains(delimiter.as_char()) {
        return true;
    }
    s.starts_with('-')
}

/// Appends `s` to `out` as a quoted string, escaping exactly the five
/// escapable characters. All other characters, including non-ASCII, are
/// emitted raw.
pub(crate) fn push_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Undoes [`push_quoted`] on a body already stripped of its surrounding
/// quotes. Any backslash sequence outside the five permitted ones fails
/// with [`Error::InvalidEscape`].
pub(crate) fn unquote(body: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => {
                return Err(Error::InvalidEscape {
                    line,
                    sequence: format!("\\{other}"),
                })
            }
            None => {
                return Err(Error::InvalidEscape {
                    line,
                    sequence: "\\".to_string(),
                })
            }
        }
    }
    Ok(out)
}

/// Finds the first occurrence of the ASCII character `target` outside any
/// quoted region, returning its byte index. Inside a quoted region `\"` is a
/// literal quote and `\\` a literal backslash.
pub(crate) fn find_unquoted(s: &str, target: char) -> Option<usize> {
    debug_assert!(target.is_ascii());
    let t = target as u8;
    let bytes = s.as_bytes();
    let mut in_quotes = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes {
            if b == b'\\' {
                i += 2;
                continue;
            }
            if b == b'"' {
                in_quotes = false;
            }
        } else if b == b'"' {
            in_quotes = true;
        } else if b == t {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// For a token starting with `"`, returns the byte index of the matching
/// closing quote, skipping escapes. `None` means the region is unterminated.
pub(crate) fn close_quote(s: &str) -> Option<usize> {
    debug_assert!(s.starts_with('"'));
    let bytes = s.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// `true` when the content contains a quoted region that never closes.
pub(crate) fn has_open_quote(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut in_quotes = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes && b == b'\\' {
            i += 2;
            continue;
        }
        if b == b'"' {
            in_quotes = !in_quotes;
        }
        i += 1;
    }
    in_quotes
}

/// Splits a row on the active delimiter at the top level, preserving empty
/// tokens: `k` delimiters always yield `k + 1` tokens.
pub(crate) fn split_row(s: &str, delimiter: Delimiter) -> Vec<&str> {
    let delim = delimiter.as_char();
    let mut tokens = Vec::new();
    let mut rest = s;
    loop {
        match find_unquoted(rest, delim) {
            Some(pos) => {
                tokens.push(&rest[..pos]);
                rest = &rest[pos + 1..];
            }
            None => {
                tokens.push(rest);
                return tokens;
            }
        }
    }
}

/// `true` for tokens matching `[A-Za-z_][A-Za-z0-9_]*`, the segment grammar
/// shared by key folding and path expansion.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Resolves a raw key token into its text, reporting whether it was quoted.
/// Quoted keys must span the whole token.
pub(crate) fn parse_key_token(raw: &str, line: usize) -> Result<(String, bool)> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::message(format!("line {line}: empty key")));
    }
    if raw.starts_with('"') {
        let end = close_quote(raw).ok_or(Error::UnterminatedString { line })?;
        if end != raw.len() - 1 {
            return Err(Error::message(format!(
                "line {line}: unexpected characters after quoted key"
            )));
        }
        Ok((unquote(&raw[1..end], line)?, true))
    } else {
        Ok((raw.to_string(), false))
    }
}
