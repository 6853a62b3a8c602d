//! Equality and ordering
//!
//! # Equality
//!
//! `equal` is deep and kind-aware:
//!
//! | Operands | Rule |
//! |----------|------|
//! | Bool / Int / Float | numerically equal, exact (`true == 1 == 1.0`) |
//! | None, String | same kind, same value |
//! | Tuple, Array | same length, pairwise equal in order |
//! | Map | same length, pairwise equal keys and values *by position* |
//! | Set | same members, order-independent |
//! | Record, Deque, Heap | never equal, not even to themselves |
//!
//! Two maps holding the same entries inserted in different orders are
//! unequal.
//!
//! # Ordering
//!
//! `less_than` is defined for number against number and String against
//! String (byte-lexicographic). Any other pairing is a `TypeMismatch`. The
//! remaining comparators are derived: `a <= b` is `a < b || a == b`,
//! `a > b` is `b < a`.

use dynval_core::value::Value;
use dynval_core::{RuntimeError, RuntimeResult};
use std::cmp::Ordering;

/// Deep equality
pub fn equal(a: &Value, b: &Value) -> bool {
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return x.compare(y) == Some(Ordering::Equal);
    }
    match (a, b) {
        (Value::None, Value::None) => true,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Tuple(x), Value::Tuple(y)) => sequence_equal(x, y),
        (Value::Array(x), Value::Array(y)) => sequence_equal(&x.borrow(), &y.borrow()),
        (Value::Map(x), Value::Map(y)) => {
            let (x, y) = (x.borrow(), y.borrow());
            x.len() == y.len()
                && x.entries()
                    .iter()
                    .zip(y.entries())
                    .all(|((k1, v1), (k2, v2))| equal(k1, k2) && equal(v1, v2))
        }
        (Value::Set(x), Value::Set(y)) => x.borrow().same_members(&y.borrow()),
        _ => false,
    }
}

fn sequence_equal(x: &[Value], y: &[Value]) -> bool {
    x.len() == y.len() && x.iter().zip(y).all(|(a, b)| equal(a, b))
}

pub fn not_equal(a: &Value, b: &Value) -> bool {
    !equal(a, b)
}

/// `a < b`
///
/// NaN against anything is false, as in IEEE-754.
pub fn less_than(a: &Value, b: &Value) -> RuntimeResult<bool> {
    match (a, b) {
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => Ok(x.compare(y) == Some(Ordering::Less)),
                _ => Err(not_orderable(a, b)),
            }
        }
        (Value::String(x), Value::String(y)) => Ok(x.as_bytes() < y.as_bytes()),
        _ => Err(not_orderable(a, b)),
    }
}

fn not_orderable(a: &Value, b: &Value) -> RuntimeError {
    let found = if is_orderable(a) {
        b.type_name()
    } else {
        a.type_name()
    };
    RuntimeError::type_mismatch("less_than", "orderable operands (number or str)", found)
}

fn is_orderable(v: &Value) -> bool {
    matches!(v, Value::Int(_) | Value::Float(_) | Value::String(_))
}

/// `a <= b`, composed as `a < b || a == b`
pub fn less_than_or_equal(a: &Value, b: &Value) -> RuntimeResult<bool> {
    Ok(less_than(a, b)? || equal(a, b))
}

/// `a > b`, computed as `b < a`
pub fn greater_than(a: &Value, b: &Value) -> RuntimeResult<bool> {
    less_than(b, a)
}

/// `a >= b`, composed as `b < a || a == b`
pub fn greater_than_or_equal(a: &Value, b: &Value) -> RuntimeResult<bool> {
    Ok(less_than(b, a)? || equal(a, b))
}
