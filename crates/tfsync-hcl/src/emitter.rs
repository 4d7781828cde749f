//! Rendering of records as block-structured configuration text
//!
//! Each nesting level is indented by one tab. Values with no content emit
//! nothing at all, so a record whose every field is unset renders as an empty
//! string and the caller can decide whether to wrap it.

use std::fmt::Write;

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::normalize;
use crate::shape::Nesting;
use crate::value::{Record, Scalar, Value};

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_\-]*$").expect("Invalid identifier regex")
});

/// Render `record` with its entries at `indent` tabs.
///
/// Keys pass through [`normalize`]. Free-form map keys are written verbatim
/// when they are identifiers and quoted otherwise.
pub fn emit(record: &Record, indent: usize) -> String {
    let mut out = String::new();
    for (key, value) in record.entries() {
        emit_entry(&mut out, &normalize(key), value, indent);
    }
    out
}

fn emit_entry(out: &mut String, key: &str, value: &Value, indent: usize) {
    let pad = tabs(indent);
    match value {
        Value::Scalar(scalar) => {
            let _ = writeln!(out, "{pad}{key} = {}", render_scalar(scalar));
        }
        Value::List(items) => {
            if items.is_empty() {
                return;
            }
            let rendered: Vec<String> = items.iter().map(render_scalar).collect();
            let _ = writeln!(out, "{pad}{key} = [{}]", rendered.join(", "));
        }
        Value::Blocks(elements) => {
            for element in elements {
                let body = emit(element, indent + 1);
                if body.is_empty() {
                    continue;
                }
                let _ = write!(out, "\n{pad}{key} {{\n{body}{pad}}}\n");
            }
        }
        Value::Nested(record, nesting) => {
            let body = emit(record, indent + 1);
            write_nested(out, key, &body, *nesting, &pad);
        }
        Value::Map(entries, nesting) => {
            let inner = tabs(indent + 1);
            let mut body = String::new();
            for (map_key, scalar) in entries {
                let _ = writeln!(body, "{inner}{} = {}", render_map_key(map_key), render_scalar(scalar));
            }
            write_nested(out, key, &body, *nesting, &pad);
        }
    }
}

fn write_nested(out: &mut String, key: &str, body: &str, nesting: Nesting, pad: &str) {
    if body.is_empty() {
        return;
    }
    let opener = match nesting {
        Nesting::Map => " = {",
        Nesting::Block => " {",
    };
    let _ = write!(out, "\n{pad}{key}{opener}\n{body}{pad}}}\n");
}

fn tabs(indent: usize) -> String {
    "\t".repeat(indent)
}

fn render_map_key(key: &str) -> String {
    if IDENTIFIER.is_match(key) {
        key.to_string()
    } else {
        format!("\"{}\"", escape(key))
    }
}

fn render_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::String(s) => format!("\"{}\"", escape(s)),
        Scalar::Integer(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }
}

/// Escape a string literal body, including template introducers.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
