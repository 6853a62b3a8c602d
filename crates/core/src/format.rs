//! Display and repr text forms
//!
//! Two forms exist:
//!
//! - **display**: a top-level String prints raw. Used by `print`, by string
//!   coercion inside `add`, by `join`, and by `to_string`.
//! - **repr**: used for every element nested inside a container. A nested
//!   String is wrapped in single quotes (no escaping).
//!
//! # Format Examples
//!
//! - None / Bool: `None`, `True`, `False`
//! - Float: `3.0`, `0.1`, `1e-05`, `nan`, `inf`
//! - Array: `['a', 1]`
//! - Tuple: `(5,)`, `(1, 2)`
//! - Map: `{'k': 1}`
//! - Set: `{1, 2}`, empty: `set()`
//! - Record: `{'name': 'Ada'}` (field order unspecified)
//! - Deque: `deque([1, 2])`
//! - Heap: `<heap>`
//!
//! This punctuation is relied on by compiled programs' golden output and
//! must not drift.

use crate::value::Value;
use std::fmt;

/// Display form of a value
pub fn display(value: &Value) -> String {
    let mut buf = String::new();
    write_value(value, false, &mut buf);
    buf
}

/// Repr form of a value (strings single-quoted)
pub fn repr(value: &Value) -> String {
    let mut buf = String::new();
    write_value(value, true, &mut buf);
    buf
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display(self))
    }
}

fn write_value(value: &Value, quote_strings: bool, buf: &mut String) {
    match value {
        Value::None => buf.push_str("None"),
        Value::Bool(b) => buf.push_str(if *b { "True" } else { "False" }),
        Value::Int(n) => buf.push_str(&n.to_string()),
        Value::Float(f) => buf.push_str(&format_float(*f)),
        Value::String(s) => {
            if quote_strings {
                buf.push('\'');
                buf.push_str(s);
                buf.push('\'');
            } else {
                buf.push_str(s);
            }
        }
        Value::Tuple(items) => {
            buf.push('(');
            write_items(items.iter(), buf);
            if items.len() == 1 {
                buf.push(',');
            }
            buf.push(')');
        }
        Value::Array(items) => {
            buf.push('[');
            write_items(items.borrow().iter(), buf);
            buf.push(']');
        }
        Value::Map(map) => {
            buf.push('{');
            for (i, (k, v)) in map.borrow().entries().iter().enumerate() {
                if i > 0 {
                    buf.push_str(", ");
                }
                write_value(k, true, buf);
                buf.push_str(": ");
                write_value(v, true, buf);
            }
            buf.push('}');
        }
        Value::Set(set) => {
            let set = set.borrow();
            if set.is_empty() {
                buf.push_str("set()");
            } else {
                buf.push('{');
                write_items(set.iter(), buf);
                buf.push('}');
            }
        }
        Value::Record(record) => {
            buf.push('{');
            for (i, (name, v)) in record.borrow().iter().enumerate() {
                if i > 0 {
                    buf.push_str(", ");
                }
                buf.push('\'');
                buf.push_str(name);
                buf.push_str("': ");
                write_value(v, true, buf);
            }
            buf.push('}');
        }
        Value::Deque(items) => {
            buf.push_str("deque([");
            write_items(items.borrow().iter(), buf);
            buf.push_str("])");
        }
        Value::Heap(_) => buf.push_str("<heap>"),
    }
}

fn write_items<'a>(items: impl Iterator<Item = &'a Value>, buf: &mut String) {
    for (i, item) in items.enumerate() {
        if i > 0 {
            buf.push_str(", ");
        }
        write_value(item, true, buf);
    }
}

/// Format a float
///
/// Integral values below 1e15 in magnitude print with a trailing `.0`.
/// Everything else prints like C's `%.15g`: up to 15 significant digits,
/// trailing zeros dropped, scientific notation for exponents below -4 or at
/// least 15.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if f.fract() == 0.0 && f.abs() < 1e15 {
        if f == 0.0 && f.is_sign_negative() {
            return "-0.0".to_string();
        }
        return format!("{}.0", f as i64);
    }
    format_general(f, 15)
}

fn format_general(f: f64, precision: usize) -> String {
    let sci = format!("{:.*e}", precision - 1, f);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, f)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
