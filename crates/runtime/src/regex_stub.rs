//! Stub module for regex operations when the "regex" feature is disabled.
//!
//! These functions keep the same signatures but fail with a `PatternError`
//! telling the caller to enable the regex feature.

use dynval_core::value::Value;
use dynval_core::{RuntimeError, RuntimeResult};

const FEATURE_MSG: &str = "regex feature not enabled. Rebuild with: cargo build --features regex";

fn disabled<T>(pattern: &Value) -> RuntimeResult<T> {
    Err(RuntimeError::PatternError {
        pattern: pattern.as_str().unwrap_or_default().to_string(),
        message: FEATURE_MSG.to_string(),
    })
}

pub fn regex_match(_s: &Value, pattern: &Value, _flags: &Value) -> RuntimeResult<bool> {
    disabled(pattern)
}

pub fn regex_find_all(_s: &Value, pattern: &Value, _flags: &Value) -> RuntimeResult<Value> {
    disabled(pattern)
}

pub fn regex_replace(
    _s: &Value,
    pattern: &Value,
    _replacement: &Value,
    _flags: &Value,
) -> RuntimeResult<Value> {
    disabled(pattern)
}

pub fn regex_split(_s: &Value, pattern: &Value, _flags: &Value) -> RuntimeResult<Value> {
    disabled(pattern)
}
