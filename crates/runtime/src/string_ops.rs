//! String operations
//!
//! Every operation requires a String operand and fails with `TypeMismatch`
//! otherwise. Positions count characters (Unicode scalar values), not bytes,
//! and are validated strictly against `[0, len]`: no negative indices, no
//! clamping.
//!
//! # Design Decisions
//!
//! - `split` with an empty delimiter yields one string per character; a
//!   non-empty delimiter always splits on the literal text, never a pattern.
//! - `replace` with an empty `old` returns the input unchanged.
//! - `trim` strips the ASCII whitespace class (space, `\t`, `\n`, `\r`,
//!   form feed, vertical tab) and nothing else.
//! - `upper` / `lower` map ASCII letters only.

use crate::operand;
use dynval_core::format::display;
use dynval_core::value::Value;
use dynval_core::{RuntimeError, RuntimeResult};

fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c' | '\x0b')
}

/// Byte offset of character position `pos`, where `pos <= char count`
fn byte_offset(s: &str, pos: usize) -> usize {
    s.char_indices().nth(pos).map_or(s.len(), |(i, _)| i)
}

pub fn string_length(s: &Value) -> RuntimeResult<Value> {
    let s = operand::string("string_length", s)?;
    Ok(Value::Int(s.chars().count() as i64))
}

/// Characters `[start, end)`; `start > end` gives the empty string
pub fn string_substring(s: &Value, start: &Value, end: &Value) -> RuntimeResult<Value> {
    let text = operand::string("string_substring", s)?;
    let start = operand::index("string_substring", start)?;
    let end = operand::index("string_substring", end)?;
    let len = text.chars().count();
    let start = operand::boundary("string_substring", start, len)?;
    let end = operand::boundary("string_substring", end, len)?;
    if start >= end {
        return Ok(Value::from(""));
    }
    let from = byte_offset(text, start);
    let to = byte_offset(text, end);
    Ok(Value::from(&text[from..to]))
}

/// The character at `index`, as a one-character string
pub fn string_char_at(s: &Value, index: &Value) -> RuntimeResult<Value> {
    let text = operand::string("string_char_at", s)?;
    let index = operand::index("string_char_at", index)?;
    let len = text.chars().count();
    let i = operand::element("string_char_at", index, len)?;
    match text.chars().nth(i) {
        Some(c) => Ok(Value::from(c.to_string())),
        None => Err(RuntimeError::out_of_range("string_char_at", index, len)),
    }
}

/// Display forms of `items` joined by `sep`
pub fn string_join(sep: &Value, items: &Value) -> RuntimeResult<Value> {
    let sep = operand::string("string_join", sep)?;
    let parts: Vec<String> = match items {
        Value::Array(items) => items.borrow().iter().map(display).collect(),
        Value::Tuple(items) => items.iter().map(display).collect(),
        other => {
            return Err(RuntimeError::type_mismatch(
                "string_join",
                "list",
                other.type_name(),
            ));
        }
    };
    Ok(Value::from(parts.join(sep)))
}

/// Split on a literal delimiter into a new Array of strings
pub fn string_split(s: &Value, delim: &Value) -> RuntimeResult<Value> {
    let text = operand::string("string_split", s)?;
    let delim = operand::string("string_split", delim)?;
    let parts = if delim.is_empty() {
        text.chars().map(|c| Value::from(c.to_string())).collect()
    } else {
        text.split(delim).map(Value::from).collect()
    };
    Ok(Value::array(parts))
}

pub fn string_trim(s: &Value) -> RuntimeResult<Value> {
    let text = operand::string("string_trim", s)?;
    Ok(Value::from(text.trim_matches(is_ascii_space)))
}

pub fn string_upper(s: &Value) -> RuntimeResult<Value> {
    let text = operand::string("string_upper", s)?;
    Ok(Value::from(text.to_ascii_uppercase()))
}

pub fn string_lower(s: &Value) -> RuntimeResult<Value> {
    let text = operand::string("string_lower", s)?;
    Ok(Value::from(text.to_ascii_lowercase()))
}

pub fn string_starts_with(s: &Value, prefix: &Value) -> RuntimeResult<bool> {
    let text = operand::string("string_starts_with", s)?;
    let prefix = operand::string("string_starts_with", prefix)?;
    Ok(text.starts_with(prefix))
}

pub fn string_ends_with(s: &Value, suffix: &Value) -> RuntimeResult<bool> {
    let text = operand::string("string_ends_with", s)?;
    let suffix = operand::string("string_ends_with", suffix)?;
    Ok(text.ends_with(suffix))
}

pub fn string_contains(s: &Value, needle: &Value) -> RuntimeResult<bool> {
    let text = operand::string("string_contains", s)?;
    let needle = operand::string("string_contains", needle)?;
    Ok(text.contains(needle))
}

/// Replace every non-overlapping occurrence of `old`, leftmost first
pub fn string_replace(s: &Value, old: &Value, new: &Value) -> RuntimeResult<Value> {
    let text = operand::string("string_replace", s)?;
    let old = operand::string("string_replace", old)?;
    let new = operand::string("string_replace", new)?;
    if old.is_empty() {
        return Ok(Value::from(text));
    }
    Ok(Value::from(text.replace(old, new)))
}
