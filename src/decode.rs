//! The TOON decoder: parses scanned lines back into a [`Value`] tree.
//!
//! Parsing runs over the scanner's line records with a single forward
//! cursor: every construct consumes exactly the lines that belong to it, so
//! there is no skip-ahead bookkeeping. Root-form detection distinguishes an
//! empty document, a bare primitive, a keyless root array, and an object.
//!
//! Strict mode enforces declared counts, tabular row widths, exact
//! indentation depths, the absence of blank lines inside array bodies, and
//! path-expansion conflicts. Lenient mode accepts the actual shape of the
//! input instead (actual counts, best-effort rows, last-write-wins paths).
//! Escape and quote-termination errors are fatal in both modes.
//!
//! With `expand_paths = Safe`, an unquoted key whose dot-separated segments
//! are all plain identifiers becomes a chain of nested objects, merging
//! with siblings created by earlier lines. Quoted keys are always literal.

use crate::error::{Error, Result};
use crate::header::{parse_header, ArrayHeader};
use crate::number;
use crate::options::{DecodeOptions, PathExpansion};
use crate::quoting::{
    close_quote, find_unquoted, has_open_quote, is_identifier, parse_key_token, split_row, unquote,
};
use crate::scan::{scan, ParsedLine};
use crate::{Map, Value};

pub(crate) fn decode_value(input: &str, options: &DecodeOptions) -> Result<Value> {
    let scanned = scan(input, options)?;
    let mut parser = Parser {
        lines: &scanned.lines,
        blanks: &scanned.blanks,
        pos: 0,
        options,
    };
    parser.document()
}

struct Parser<'a, 's> {
    lines: &'a [ParsedLine<'s>],
    blanks: &'a [usize],
    pos: usize,
    options: &'a DecodeOptions,
}

impl Parser<'_, '_> {
    fn document(&mut self) -> Result<Value> {
        if self.lines.is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        let first = self.lines[0];

        if first.depth == 0 {
            if let Some(header) = parse_header(first.content, first.line_no)? {
                if header.key.is_none() {
                    self.pos = 1;
                    let items = self.array_body(&header, first.line_no, 0)?;
                    if self.pos < self.lines.len() && self.options.strict {
                        return Err(Error::message(format!(
                            "line {}: unexpected content after root array",
                            self.lines[self.pos].line_no
                        )));
                    }
                    return Ok(Value::Array(items));
                }
            }
        }

        if find_unquoted(first.content, ':').is_none() {
            if has_open_quote(first.content) {
                return Err(Error::UnterminatedString { line: first.line_no });
            }
            if self.lines.len() > 1 {
                if self.options.strict {
                    return Err(Error::MultipleRootPrimitives {
                        line: self.lines[1].line_no,
                    });
                }
                let last = self.lines[self.lines.len() - 1];
                return resolve_scalar(last.content, last.line_no);
            }
            return resolve_scalar(first.content, first.line_no);
        }

        let map = self.object(0)?;
        Ok(Value::Object(map))
    }

    /// Parses consecutive entries at exactly `depth` into an object.
    fn object(&mut self, depth: usize) -> Result<Map> {
        let mut map = Map::new();
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if line.depth < depth {
                break;
            }
            if line.depth > depth && self.options.strict {
                return Err(Error::InvalidIndentation {
                    line: line.line_no,
                    detail: format!("expected depth {depth}, found {}", line.depth),
                });
            }
            self.pos += 1;
            self.entry_into(&mut map, line.content, line.line_no, depth)?;
        }
        Ok(map)
    }

    /// Parses one object-scope line: a keyed array header, `key:` with
    /// nested or empty content, or `key: value`.
    fn entry_into(
        &mut self,
        map: &mut Map,
        content: &str,
        line_no: usize,
        depth: usize,
    ) -> Result<()> {
        if let Some(header) = parse_header(content, line_no)? {
            let Some(key) = header.key.clone() else {
                return Err(Error::InvalidHeader {
                    line: line_no,
                    detail: "array header without key at object scope".to_string(),
                });
            };
            let items = self.array_body(&header, line_no, depth)?;
            return self.insert(map, key.name, key.quoted, Value::Array(items), line_no);
        }

        let Some(colon) = find_unquoted(content, ':') else {
            if has_open_quote(content) {
                return Err(Error::UnterminatedString { line: line_no });
            }
            return Err(Error::MissingColon { line: line_no });
        };
        let (key, quoted) = parse_key_token(&content[..colon], line_no)?;
        let rest = &content[colon + 1..];

        let value = if rest.trim().is_empty() {
            if self.pos < self.lines.len() && self.lines[self.pos].depth > depth {
                Value::Object(self.object(depth + 1)?)
            } else {
                Value::Object(Map::new())
            }
        } else {
            resolve_scalar(rest, line_no)?
        };
        self.insert(map, key, quoted, value, line_no)
    }

    /// Inserts a decoded entry, expanding unquoted dotted identifier keys
    /// when path expansion is on. Plain duplicate keys are last-write-wins.
    fn insert(
        &self,
        map: &mut Map,
        key: String,
        quoted: bool,
        value: Value,
        line_no: usize,
    ) -> Result<()> {
        if self.options.expand_paths == PathExpansion::Safe && !quoted {
            if let Some(segments) = path_segments(&key) {
                return self.insert_path(map, &key, &segments, value, line_no);
            }
        }
        map.insert(key, value);
        Ok(())
    }

    fn insert_path(
        &self,
        map: &mut Map,
        path: &str,
        segments: &[&str],
        value: Value,
        line_no: usize,
    ) -> Result<()> {
        let mut current = map;
        for segment in &segments[..segments.len() - 1] {
            let replace = match current.get(*segment) {
                None => true,
                Some(Value::Object(_)) => false,
                Some(_) => {
                    if self.options.strict {
                        return Err(Error::PathConflict {
                            line: line_no,
                            path: path.to_string(),
                        });
                    }
                    true
                }
            };
            if replace {
                current.insert((*segment).to_string(), Value::Object(Map::new()));
            }
            let Some(Value::Object(next)) = current.get_mut(*segment) else {
                return Err(Error::message("path expansion lost an intermediate object"));
            };
            current = next;
        }
        let last = segments[segments.len() - 1];
        if self.options.strict && current.contains_key(last) {
            return Err(Error::PathConflict {
                line: line_no,
                path: path.to_string(),
            });
        }
        current.insert(last.to_string(), value);
        Ok(())
    }

    /// Parses an array body after its header line, dispatching on the
    /// header kind.
    fn array_body(
        &mut self,
        header: &ArrayHeader,
        header_line: usize,
        depth: usize,
    ) -> Result<Vec<Value>> {
        if let Some(fields) = &header.fields {
            return self.tabular_body(header, fields, header_line, depth);
        }
        if let Some(inline) = header.inline {
            let tokens = split_row(inline, header.delimiter);
            if self.options.strict && tokens.len() != header.count {
                return Err(Error::CountMismatch {
                    line: header_line,
                    declared: header.count,
                    actual: tokens.len(),
                });
            }
            return tokens
                .into_iter()
                .map(|token| resolve_scalar(token, header_line))
                .collect();
        }
        self.list_body(header, header_line, depth)
    }

    fn tabular_body(
        &mut self,
        header: &ArrayHeader,
        fields: &[String],
        header_line: usize,
        depth: usize,
    ) -> Result<Vec<Value>> {
        let mut rows = Vec::new();
        let mut last_line = header_line;
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if line.depth <= depth {
                break;
            }
            if line.depth > depth + 1 && self.options.strict {
                return Err(Error::InvalidIndentation {
                    line: line.line_no,
                    detail: format!("expected depth {}, found {}", depth + 1, line.depth),
                });
            }
            self.pos += 1;
            let tokens = split_row(line.content, header.delimiter);
            if self.options.strict && tokens.len() != fields.len() {
                return Err(Error::RowWidthMismatch {
                    line: line.line_no,
                    expected: fields.len(),
                    actual: tokens.len(),
                });
            }
            let mut obj = Map::new();
            for (field, token) in fields.iter().zip(tokens) {
                obj.insert(field.clone(), resolve_scalar(token, line.line_no)?);
            }
            rows.push(Value::Object(obj));
            last_line = line.line_no;
        }
        if self.options.strict && rows.len() != header.count {
            return Err(Error::CountMismatch {
                line: header_line,
                declared: header.count,
                actual: rows.len(),
            });
        }
        self.check_blanks(header_line, last_line)?;
        Ok(rows)
    }

    fn list_body(
        &mut self,
        header: &ArrayHeader,
        header_line: usize,
        depth: usize,
    ) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        let mut last_line = header_line;
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if line.depth <= depth {
                break;
            }
            if line.depth > depth + 1 && self.options.strict {
                return Err(Error::InvalidIndentation {
                    line: line.line_no,
                    detail: format!("expected depth {}, found {}", depth + 1, line.depth),
                });
            }
            if line.content != "-" && !line.content.starts_with("- ") {
                break;
            }
            self.pos += 1;
            items.push(self.list_item(line, depth)?);
            last_line = self.last_consumed_line(header_line);
        }
        if self.options.strict && items.len() != header.count {
            return Err(Error::CountMismatch {
                line: header_line,
                declared: header.count,
                actual: items.len(),
            });
        }
        self.check_blanks(header_line, last_line)?;
        Ok(items)
    }

    /// Parses one list item. The hyphen line is already consumed; `depth`
    /// is the depth of the array header, so the item itself sits at
    /// `depth + 1`.
    fn list_item(&mut self, line: ParsedLine, depth: usize) -> Result<Value> {
        let content = if line.content == "-" {
            ""
        } else {
            &line.content[2..]
        };
        if content.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        if let Some(header) = parse_header(content, line.line_no)? {
            if header.key.is_none() {
                let items = self.array_body(&header, line.line_no, depth + 1)?;
                return Ok(Value::Array(items));
            }
            return self.list_item_object(content, line.line_no, depth);
        }

        if find_unquoted(content, ':').is_some() {
            return self.list_item_object(content, line.line_no, depth);
        }

        if has_open_quote(content) {
            return Err(Error::UnterminatedString { line: line.line_no });
        }
        resolve_scalar(content, line.line_no)
    }

    /// An object item: the first entry shares the hyphen line, remaining
    /// entries follow at the item depth without a hyphen, nested children
    /// one level deeper.
    fn list_item_object(
        &mut self,
        first_content: &str,
        first_line: usize,
        depth: usize,
    ) -> Result<Value> {
        let mut map = Map::new();
        self.entry_into(&mut map, first_content, first_line, depth + 1)?;
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if line.depth < depth + 1 {
                break;
            }
            if line.depth > depth + 1 && self.options.strict {
                return Err(Error::InvalidIndentation {
                    line: line.line_no,
                    detail: format!("expected depth {}, found {}", depth + 1, line.depth),
                });
            }
            if line.content == "-" || line.content.starts_with("- ") {
                break;
            }
            self.pos += 1;
            self.entry_into(&mut map, line.content, line.line_no, depth + 1)?;
        }
        Ok(Value::Object(map))
    }

    fn last_consumed_line(&self, fallback: usize) -> usize {
        if self.pos > 0 {
            self.lines[self.pos - 1].line_no
        } else {
            fallback
        }
    }

    /// Strict mode: no blank line may sit between an array header and the
    /// last line of its body.
    fn check_blanks(&self, from: usize, to: usize) -> Result<()> {
        if !self.options.strict || to <= from {
            return Ok(());
        }
        for &blank in self.blanks {
            if blank >= to {
                break;
            }
            if blank > from {
                return Err(Error::BlankLineInArray { line: blank });
            }
        }
        Ok(())
    }
}

/// Splits a key into expansion segments when every dot-separated piece is a
/// plain identifier.
fn path_segments(key: &str) -> Option<Vec<&str>> {
    if !key.contains('.') {
        return None;
    }
    let segments: Vec<&str> = key.split('.').collect();
    if segments.iter().all(|s| is_identifier(s)) {
        Some(segments)
    } else {
        None
    }
}

/// Resolves one unquoted-or-quoted token: quoted strings stay strings;
/// unquoted tokens resolve as null, booleans, numbers, then text.
fn resolve_scalar(token: &str, line: usize) -> Result<Value> {
    let token = token.trim();
    if token.starts_with('"') {
        let end = close_quote(token).ok_or(Error::UnterminatedString { line })?;
        if end != token.len() - 1 {
            return Err(Error::message(format!(
                "line {line}: unexpected characters after closing quote"
            )));
        }
        return Ok(Value::String(unquote(&token[1..end], line)?));
    }
    match token {
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }
    if let Some(n) = number::parse_number(token) {
        return Ok(Value::Number(n));
    }
    Ok(Value::String(token.to_string()))
}
