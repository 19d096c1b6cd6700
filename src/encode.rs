//! The TOON encoder: walks a [`Value`] tree and emits canonical text.
//!
//! Output is canonical: LF-separated lines, space-only indentation, exactly
//! one space after a value colon, no trailing whitespace on any line, and no
//! trailing newline. Numbers go through the canonicalizer, strings through
//! the quoting classifier.
//!
//! Array format selection, most compact first:
//!
//! 1. empty → `key[0]:`
//! 2. all elements primitive → inline `key[N]: v1,v2,…`
//! 3. uniform objects (same keys, same order, primitive values) → tabular
//!    `key[N]{f1,f2}:` with one row per element
//! 4. anything else → list `key[N]:` with one `- item` line per element
//!
//! With `key_folding = Safe`, single-entry object chains whose keys are all
//! plain identifiers collapse into dotted paths (`a.b.c: 1`), bounded by
//! `flatten_depth`. Literal keys containing a dot are emitted quoted so the
//! two can never be confused on decode.

use crate::error::{Error, Result};
use crate::number;
use crate::options::{Delimiter, EncodeOptions, KeyFolding};
use crate::quoting::{is_identifier, needs_quoting, push_quoted};
use crate::{Map, Number, Value};

pub(crate) fn encode_value(value: &Value, options: &EncodeOptions) -> Result<String> {
    let mut enc = Encoder {
        out: String::with_capacity(256),
        options,
    };
    match value {
        Value::Object(map) => enc.object_entries(map, 0)?,
        Value::Array(items) => enc.array(items, 0)?,
        primitive => enc.scalar(primitive)?,
    }
    Ok(enc.out)
}

struct Encoder<'a> {
    out: String,
    options: &'a EncodeOptions,
}

impl Encoder<'_> {
    /// Starts a new output line at the given depth. The very first line of
    /// the document gets no preceding newline.
    fn begin_line(&mut self, depth: usize) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out.push_str(&" ".repeat(depth * self.options.indent));
    }

    fn object_entries(&mut self, map: &Map, depth: usize) -> Result<()> {
        for (key, value) in map.iter() {
            self.begin_line(depth);
            self.entry(key, value, depth)?;
        }
        Ok(())
    }

    /// Emits one `key: value` entry with the cursor already positioned at
    /// the start of the key. Nested children land at `depth + 1`.
    fn entry(&mut self, key: &str, value: &Value, depth: usize) -> Result<()> {
        let (path, value) = self.fold(key, value);
        self.out.push_str(&path);
        match value {
            Value::Array(items) => self.array(items, depth),
            Value::Object(map) if map.is_empty() => {
                self.out.push(':');
                Ok(())
            }
            Value::Object(map) => {
                self.out.push(':');
                self.object_entries(map, depth + 1)
            }
            primitive => {
                self.out.push_str(": ");
                self.scalar(primitive)
            }
        }
    }

    /// Resolves key folding for one entry: follows a chain of single-entry
    /// objects with identifier keys, accumulating a dotted path, and
    /// returns the rendered key text together with the value left at the
    /// end of the chain.
    fn fold<'v>(&self, key: &'v str, value: &'v Value) -> (String, &'v Value) {
        if !self.folding_enabled() || !self.foldable(key) {
            return (self.render_key(key), value);
        }
        let mut path = String::from(key);
        let mut segments = 1;
        let mut current = value;
        loop {
            let Value::Object(map) = current else { break };
            if map.len() != 1 {
                break;
            }
            if let Some(max) = self.options.flatten_depth {
                if segments >= max {
                    break;
                }
            }
            let Some((next_key, next_value)) = map.iter().next() else {
                break;
            };
            if !self.foldable(next_key) {
                break;
            }
            path.push('.');
            path.push_str(next_key);
            segments += 1;
            current = next_value;
        }
        (path, current)
    }

    fn folding_enabled(&self) -> bool {
        self.options.key_folding == KeyFolding::Safe && self.options.flatten_depth != Some(0)
    }

    fn foldable(&self, key: &str) -> bool {
        is_identifier(key) && !needs_quoting(key, self.options.delimiter)
    }

    fn render_key(&self, key: &str) -> String {
        // Dotted keys are quoted even when quoting rules would not demand
        // it, so a literal `a.b` can never be mistaken for a folded path.
        if needs_quoting(key, self.options.delimiter) || key.contains('.') {
            let mut out = String::with_capacity(key.len() + 2);
            push_quoted(&mut out, key);
            out
        } else {
            key.to_string()
        }
    }

    /// Emits an array with the cursor already positioned after the key (or
    /// at the start of the line for keyless arrays).
    fn array(&mut self, items: &[Value], depth: usize) -> Result<()> {
        let delim = self.options.delimiter.as_char();
        self.out.push('[');
        self.out.push_str(&items.len().to_string());
        if self.options.delimiter != Delimiter::Comma {
            self.out.push(delim);
        }

        if items.is_empty() {
            self.out.push_str("]:");
            return Ok(());
        }

        if let Some((fields, rows)) = tabular_rows(items) {
            self.out.push_str("]{");
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    self.out.push(delim);
                }
                self.field_name(field);
            }
            self.out.push_str("}:");
            for row in rows {
                self.begin_line(depth + 1);
                for (i, cell) in row.iter().enumerate() {
                    if i > 0 {
                        self.out.push(delim);
                    }
                    self.scalar(cell)?;
                }
            }
            return Ok(());
        }

        if items.iter().all(Value::is_primitive) {
            self.out.push_str("]: ");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    self.out.push(delim);
                }
                self.scalar(item)?;
            }
            return Ok(());
        }

        self.out.push_str("]:");
        for item in items {
            self.begin_line(depth + 1);
            self.out.push('-');
            match item {
                Value::Object(map) if map.is_empty() => {}
                Value::Object(map) => {
                    self.out.push(' ');
                    self.list_item_object(map, depth)?;
                }
                Value::Array(inner) => {
                    self.out.push(' ');
                    self.array(inner, depth + 1)?;
                }
                primitive => {
                    self.out.push(' ');
                    self.scalar(primitive)?;
                }
            }
        }
        Ok(())
    }

    /// An object as a list item: the first entry shares the hyphen line,
    /// the remaining entries follow at the item depth, and nested children
    /// go one level deeper.
    fn list_item_object(&mut self, map: &Map, depth: usize) -> Result<()> {
        let mut entries = map.iter();
        if let Some((key, value)) = entries.next() {
            self.entry(key, value, depth + 1)?;
        }
        for (key, value) in entries {
            self.begin_line(depth + 1);
            self.entry(key, value, depth + 1)?;
        }
        Ok(())
    }

    fn field_name(&mut self, field: &str) {
        if needs_quoting(field, self.options.delimiter) {
            push_quoted(&mut self.out, field);
        } else {
            self.out.push_str(field);
        }
    }

    fn scalar(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(Number::Integer(i)) => self.out.push_str(&i.to_string()),
            Value::Number(Number::Big(b)) => self.out.push_str(&b.to_string()),
            Value::Number(Number::Float(f)) => {
                if !f.is_finite() {
                    return Err(Error::UnsupportedValue(format!("non-finite float {f}")));
                }
                self.out.push_str(&number::format_float(*f));
            }
            Value::String(s) => {
                if needs_quoting(s, self.options.delimiter) {
                    push_quoted(&mut self.out, s);
                } else {
                    self.out.push_str(s);
                }
            }
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::message("container value in scalar position"));
            }
        }
        Ok(())
    }
}

/// Detects the tabular shape: every element an object with the same keys in
/// the same order and primitive-only values. Returns the field list and the
/// cell grid so emission needs no second pass.
fn tabular_rows(items: &[Value]) -> Option<(Vec<&String>, Vec<Vec<&Value>>)> {
    let first = items.first()?.as_object()?;
    if first.is_empty() {
        return None;
    }
    let fields: Vec<&String> = first.keys().collect();
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let obj = item.as_object()?;
        if obj.len() != fields.len() {
            return None;
        }
        let mut row = Vec::with_capacity(fields.len());
        for ((key, value), field) in obj.iter().zip(&fields) {
            if key != *field || !value.is_primitive() {
                return None;
            }
            row.push(value);
        }
        rows.push(row);
    }
    Some((fields, rows))
}
