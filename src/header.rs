//! Array-header recognition.
//!
//! An array header is a line of the form
//! `key?[N](delim?)({field-list})?:` optionally followed by inline row data
//! after a single space. The delimiter symbol inside the brackets selects
//! the array's active delimiter: absent means comma, a literal HTAB means
//! tab, `|` means pipe. The field list, present only for tabular arrays, is
//! split by that same active delimiter.
//!
//! A line is treated as a header when it contains a top-level `[` before any
//! top-level `:`. Once that shape is seen, any deviation from the grammar is
//! a hard [`Error::InvalidHeader`] rather than a fallback to key-value
//! parsing — an unquoted `[` never appears in well-formed keys or values.

use crate::error::{Error, Result};
use crate::options::Delimiter;
use crate::quoting::{close_quote, find_unquoted, parse_key_token, split_row, unquote};

/// The key in front of a header, when present.
#[derive(Debug, Clone)]
pub(crate) struct HeaderKey {
    pub name: String,
    /// Quoted keys are literal: never candidates for path expansion.
    pub quoted: bool,
}

/// A parsed array header.
#[derive(Debug, Clone)]
pub(crate) struct ArrayHeader<'a> {
    /// `None` for keyless headers (root arrays and nested list items).
    pub key: Option<HeaderKey>,
    /// Declared element count.
    pub count: usize,
    /// Active delimiter for this array's rows and inline slots.
    pub delimiter: Delimiter,
    /// Field list for tabular arrays.
    pub fields: Option<Vec<String>>,
    /// Inline row data following the colon, if any.
    pub inline: Option<&'a str>,
}

/// Tries to parse `content` as an array header. Returns `Ok(None)` when the
/// line is not header-shaped at all.
pub(crate) fn parse_header<'a>(content: &'a str, line: usize) -> Result<Option<ArrayHeader<'a>>> {
    let Some(bracket) = find_unquoted(content, '[') else {
        return Ok(None);
    };
    if let Some(colon) = find_unquoted(content, ':') {
        if colon < bracket {
            return Ok(None);
        }
    }

    let key = parse_header_key(&content[..bracket], line)?;

    let close = content[bracket + 1..]
        .find(']')
        .map(|p| p + bracket + 1)
        .ok_or_else(|| Error::InvalidHeader {
            line,
            detail: "unclosed `[`".to_string(),
        })?;

    let inside = &content[bracket + 1..close];
    let digits_end = inside
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(inside.len());
    if digits_end == 0 {
        let detail = if inside.starts_with('-') {
            "negative element count".to_string()
        } else {
            "missing element count".to_string()
        };
        return Err(Error::InvalidHeader { line, detail });
    }
    let count: usize = inside[..digits_end].parse().map_err(|_| Error::InvalidHeader {
        line,
        detail: format!("element count `{}` out of range", &inside[..digits_end]),
    })?;
    let delimiter = match &inside[digits_end..] {
        "" => Delimiter::Comma,
        "\t" => Delimiter::Tab,
        "|" => Delimiter::Pipe,
        other => {
            return Err(Error::InvalidHeader {
                line,
                detail: format!("unknown delimiter symbol `{other}`"),
            })
        }
    };

    let after = &content[close + 1..];
    let (fields, tail) = if let Some(brace_body) = after.strip_prefix('{') {
        let brace_end = find_unquoted(brace_body, '}').ok_or_else(|| Error::InvalidHeader {
            line,
            detail: "unclosed `{`".to_string(),
        })?;
        let fields = parse_field_list(&brace_body[..brace_end], delimiter, line)?;
        let rest = &brace_body[brace_end + 1..];
        let tail = rest.strip_prefix(':').ok_or_else(|| Error::InvalidHeader {
            line,
            detail: "missing colon after header".to_string(),
        })?;
        (Some(fields), tail)
    } else if let Some(tail) = after.strip_prefix(':') {
        (None, tail)
    } else {
        return Err(Error::InvalidHeader {
            line,
            detail: "missing colon after header".to_string(),
        });
    };

    let inline = if tail.is_empty() {
        None
    } else {
        Some(tail.strip_prefix(' ').unwrap_or(tail))
    };
    if fields.is_some() && inline.is_some() {
        return Err(Error::InvalidHeader {
            line,
            detail: "tabular header cannot carry inline values".to_string(),
        });
    }

    Ok(Some(ArrayHeader {
        key,
        count,
        delimiter,
        fields,
        inline,
    }))
}

fn parse_header_key(raw: &str, line: usize) -> Result<Option<HeaderKey>> {
    if raw.is_empty() {
        return Ok(None);
    }
    if raw.starts_with('"') {
        let end = close_quote(raw).ok_or(Error::UnterminatedString { line })?;
        if end != raw.len() - 1 {
            return Err(Error::InvalidHeader {
                line,
                detail: "unexpected characters between key and `[`".to_string(),
            });
        }
        let name = unquote(&raw[1..end], line)?;
        Ok(Some(HeaderKey { name, quoted: true }))
    } else {
        Ok(Some(HeaderKey {
            name: raw.to_string(),
            quoted: false,
        }))
    }
}

fn parse_field_list(body: &str, delimiter: Delimiter, line: usize) -> Result<Vec<String>> {
    if body.trim().is_empty() {
        return Err(Error::InvalidHeader {
            line,
            detail: "empty field list".to_string(),
        });
    }
    let mut fields = Vec::new();
    for token in split_row(body, delimiter) {
        if token.trim().is_empty() {
            return Err(Error::InvalidHeader {
                line,
                detail: "empty field name".to_string(),
            });
        }
        let (name, _) = parse_key_token(token, line)?;
        fields.push(name);
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyless_inline() {
        let h = parse_header("[3]: 1,2,3", 1).unwrap().unwrap();
        assert!(h.key.is_none());
        assert_eq!(h.count, 3);
        assert_eq!(h.delimiter, Delimiter::Comma);
        assert_eq!(h.inline, Some("1,2,3"));
        assert!(h.fields.is_none());
    }

    #[test]
    fn test_keyed_empty() {
        let h = parse_header("items[0]:", 1).unwrap().unwrap();
        let key = h.key.unwrap();
        assert_eq!(key.name, "items");
        assert!(!key.quoted);
        assert_eq!(h.count, 0);
        assert!(h.inline.is_none());
    }

    #[test]
    fn test_tabular_fields() {
        let h = parse_header("[2]{id,name}:", 1).unwrap().unwrap();
        assert_eq!(h.fields.as_deref(), Some(&["id".to_string(), "name".to_string()][..]));
        assert!(h.inline.is_none());
    }

    #[test]
    fn test_delimiter_symbols() {
        assert_eq!(
            parse_header("[2|]: a|b", 1).unwrap().unwrap().delimiter,
            Delimiter::Pipe
        );
        assert_eq!(
            parse_header("[2\t]: a\tb", 1).unwrap().unwrap().delimiter,
            Delimiter::Tab
        );
        let h = parse_header("[2|]{a|b}:", 1).unwrap().unwrap();
        assert_eq!(h.fields.as_deref(), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn test_quoted_key_and_fields() {
        let h = parse_header("\"a,b\"[1]: x", 1).unwrap().unwrap();
        let key = h.key.unwrap();
        assert_eq!(key.name, "a,b");
        assert!(key.quoted);

        let h = parse_header("[1]{\"a,b\",c}:", 1).unwrap().unwrap();
        assert_eq!(
            h.fields.as_deref(),
            Some(&["a,b".to_string(), "c".to_string()][..])
        );
    }

    #[test]
    fn test_not_a_header() {
        assert!(parse_header("name: Alice", 1).unwrap().is_none());
        // Top-level colon before the bracket: the bracket is value text.
        assert!(parse_header("note: see [1]", 1).unwrap().is_none());
        // Bracket hidden inside a quoted key.
        assert!(parse_header("\"a[b]\": 1", 1).unwrap().is_none());
    }

    #[test]
    fn test_malformed_headers() {
        for content in ["[x]: 1", "[-1]: 1", "[2: 1", "[2]{}: x", "[2]{a,}:", "[2]", "[2]x:"] {
            let err = parse_header(content, 7).unwrap_err();
            assert!(
                matches!(err, Error::InvalidHeader { line: 7, .. }),
                "{content} should be InvalidHeader, got {err:?}"
            );
        }
    }

    #[test]
    fn test_tabular_with_inline_rejected() {
        assert!(matches!(
            parse_header("[2]{a,b}: 1,2", 1),
            Err(Error::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_unquoted_key_with_space() {
        let h = parse_header("weird key[2]: 1,2", 1).unwrap().unwrap();
        assert_eq!(h.key.unwrap().name, "weird key");
    }
}
