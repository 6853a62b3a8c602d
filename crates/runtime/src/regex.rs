//! Regular expression operations
//!
//! Uses Rust's regex crate: linear-time matching, no catastrophic
//! backtracking. Pattern syntax, match iteration and splitting semantics
//! are the engine's.
//!
//! # API
//!
//! Every operation takes the subject string, the pattern and a flags
//! argument. Flags is None or a String; the only recognized flag is `i`
//! (case-insensitive), other characters are ignored.
//!
//! ```ignore
//! regex_match(&s, &Value::from("wo.ld"), &Value::None)?;          // bool
//! regex_find_all(&s, &Value::from("[a-z][0-9]"), &Value::None)?;   // ['a1', 'b2']
//! regex_replace(&s, &Value::from("[0-9]"), &Value::from("X"), &Value::None)?;
//! regex_split(&s, &Value::from("[0-9]"), &Value::from("i"))?;
//! ```
//!
//! A malformed pattern fails with `PatternError` carrying the engine's
//! diagnostic. Compilation is bounded by the configured size limit
//! (`DYNVAL_REGEX_SIZE_LIMIT`).

use crate::config::{RuntimeConfig, runtime_config};
use crate::operand;
use dynval_core::value::Value;
use dynval_core::{RuntimeError, RuntimeResult};
use regex::{Regex, RegexBuilder};

fn case_insensitive(op: &'static str, flags: &Value) -> RuntimeResult<bool> {
    match flags {
        Value::None => Ok(false),
        Value::String(s) => Ok(s.contains('i')),
        other => Err(RuntimeError::type_mismatch(op, "str or None", other.type_name())),
    }
}

/// Compile `pattern` under an explicit configuration
pub fn compile_with(
    config: &RuntimeConfig,
    pattern: &str,
    case_insensitive: bool,
) -> RuntimeResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .size_limit(config.regex_size_limit)
        .build()
        .map_err(|e| {
            tracing::debug!(pattern, error = %e, "regex compile failed");
            RuntimeError::PatternError {
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
        })
}

fn compile(op: &'static str, pattern: &Value, flags: &Value) -> RuntimeResult<Regex> {
    let pattern = operand::string(op, pattern)?;
    let ci = case_insensitive(op, flags)?;
    compile_with(runtime_config(), pattern, ci)
}

/// Whether the pattern matches anywhere in the string
pub fn regex_match(s: &Value, pattern: &Value, flags: &Value) -> RuntimeResult<bool> {
    let text = operand::string("regex_match", s)?;
    let re = compile("regex_match", pattern, flags)?;
    Ok(re.is_match(text))
}

/// All non-overlapping matches, left to right, as an Array of strings
pub fn regex_find_all(s: &Value, pattern: &Value, flags: &Value) -> RuntimeResult<Value> {
    let text = operand::string("regex_find_all", s)?;
    let re = compile("regex_find_all", pattern, flags)?;
    let matches = re.find_iter(text).map(|m| Value::from(m.as_str())).collect();
    Ok(Value::array(matches))
}

/// Replace every match; `$1`, `${name}` in the replacement expand groups
pub fn regex_replace(
    s: &Value,
    pattern: &Value,
    replacement: &Value,
    flags: &Value,
) -> RuntimeResult<Value> {
    let text = operand::string("regex_replace", s)?;
    let replacement = operand::string("regex_replace", replacement)?;
    let re = compile("regex_replace", pattern, flags)?;
    Ok(Value::from(re.replace_all(text, replacement).into_owned()))
}

/// Split around matches into an Array of strings
pub fn regex_split(s: &Value, pattern: &Value, flags: &Value) -> RuntimeResult<Value> {
    let text = operand::string("regex_split", s)?;
    let re = compile("regex_split", pattern, flags)?;
    let parts = re.split(text).map(Value::from).collect();
    Ok(Value::array(parts))
}
