//! Sequence operations: Array and Tuple
//!
//! Indices are validated strictly. An element index must satisfy
//! `0 <= i < len`, a slice endpoint `0 <= i <= len`. There are no negative
//! indices and no clamping; anything else is `OutOfRange`.
//!
//! Read operations (`array_get`, `array_length`, `array_slice`) accept a
//! Tuple wherever they accept an Array. Slicing always yields a new Array,
//! even from a Tuple.
//!
//! # Examples
//!
//! ```ignore
//! let xs = make_array(vec![Value::Int(1), Value::Int(2)]);
//! array_push(&xs, Value::Int(3))?;
//! let tail = array_slice(&xs, &Value::Int(1), &Value::Int(3))?;   // [2, 3]
//! array_push(&tail, Value::Int(4))?;                            // xs unchanged
//! ```

use crate::operand;
use dynval_core::value::Value;
use dynval_core::{RuntimeError, RuntimeResult};

pub fn make_array(items: Vec<Value>) -> Value {
    Value::array(items)
}

pub fn make_tuple(items: Vec<Value>) -> Value {
    Value::tuple(items)
}

/// Run `f` over the elements of an Array or Tuple
fn with_items<T>(
    op: &'static str,
    seq: &Value,
    f: impl FnOnce(&[Value]) -> RuntimeResult<T>,
) -> RuntimeResult<T> {
    match seq {
        Value::Array(items) => f(items.borrow().as_slice()),
        Value::Tuple(items) => f(&items[..]),
        other => Err(RuntimeError::type_mismatch(
            op,
            "list or tuple",
            other.type_name(),
        )),
    }
}

/// Element at `index`
pub fn array_get(seq: &Value, index: &Value) -> RuntimeResult<Value> {
    let index = operand::index("array_get", index)?;
    with_items("array_get", seq, |items| {
        let i = operand::element("array_get", index, items.len())?;
        Ok(items[i].clone())
    })
}

/// Replace the element at `index`
pub fn array_set(arr: &Value, index: &Value, value: Value) -> RuntimeResult<()> {
    let items = operand::array("array_set", arr)?;
    let index = operand::index("array_set", index)?;
    let i = operand::element("array_set", index, items.borrow().len())?;
    items.borrow_mut()[i] = value;
    Ok(())
}

pub fn array_push(arr: &Value, value: Value) -> RuntimeResult<()> {
    operand::array("array_push", arr)?.borrow_mut().push(value);
    Ok(())
}

pub fn array_length(seq: &Value) -> RuntimeResult<Value> {
    with_items("array_length", seq, |items| Ok(Value::Int(items.len() as i64)))
}

/// Elements `[start, end)` as a new Array
///
/// `start > end` (both in bounds) gives an empty Array.
pub fn array_slice(seq: &Value, start: &Value, end: &Value) -> RuntimeResult<Value> {
    let start = operand::index("array_slice", start)?;
    let end = operand::index("array_slice", end)?;
    with_items("array_slice", seq, |items| {
        let s = operand::boundary("array_slice", start, items.len())?;
        let e = operand::boundary("array_slice", end, items.len())?;
        let slice = if s < e { items[s..e].to_vec() } else { Vec::new() };
        Ok(Value::array(slice))
    })
}

/// Element count of any sized kind
///
/// Strings count characters. Record has no length.
pub fn length(v: &Value) -> RuntimeResult<Value> {
    let n = match v {
        Value::String(s) => s.chars().count(),
        Value::Tuple(items) => items.len(),
        Value::Array(items) => items.borrow().len(),
        Value::Map(map) => map.borrow().len(),
        Value::Set(set) => set.borrow().len(),
        Value::Deque(items) => items.borrow().len(),
        Value::Heap(heap) => heap.borrow().len(),
        other => {
            return Err(RuntimeError::type_mismatch(
                "length",
                "sized value",
                other.type_name(),
            ));
        }
    };
    Ok(Value::Int(n as i64))
}

/// Integers from `from` toward `to` by `step`
///
/// `inclusive` includes `to` when the walk lands on it. A step of zero is an
/// `ArithmeticError`. Stepping stops before overflowing Int64.
pub fn range(from: &Value, to: &Value, step: &Value, inclusive: bool) -> RuntimeResult<Value> {
    let from = operand::index("range", from)?;
    let to = operand::index("range", to)?;
    let step = operand::index("range", step)?;
    if step == 0 {
        return Err(RuntimeError::arithmetic("range", "step cannot be zero"));
    }

    let in_range = |i: i64| match (step > 0, inclusive) {
        (true, true) => i <= to,
        (true, false) => i < to,
        (false, true) => i >= to,
        (false, false) => i > to,
    };

    let mut items = Vec::new();
    let mut i = from;
    while in_range(i) {
        items.push(Value::Int(i));
        match i.checked_add(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    Ok(Value::array(items))
}
