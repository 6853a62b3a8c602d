//! Map and Set operations
//!
//! Dictionary and set operations keyed by canonical key encoding. Keys must
//! be hashable (None, Bool, Int, Float, String, or a Tuple of those);
//! anything else fails with `UnhashableKey` before the container is touched.
//!
//! Maps iterate in first-insertion order and updating a key keeps its
//! position. Sets iterate in first-insertion order too.
//!
//! # Examples
//!
//! ```ignore
//! let m = make_map(vec![])?;
//! map_set(&m, Value::from("name"), Value::from("Alice"))?;
//! map_set(&m, Value::from("age"), Value::Int(30))?;
//! map_get(&m, &Value::from("email"))?;     // None, not an error
//! map_keys(&m)?;                           // ['name', 'age']
//! ```

use crate::operand;
use dynval_core::collections::OrderedSet;
use dynval_core::value::Value;
use dynval_core::RuntimeResult;
use std::cell::RefCell;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Map
// ---------------------------------------------------------------------------

/// Build a Map from pairs; a repeated key updates the earlier entry in place
pub fn make_map(pairs: Vec<(Value, Value)>) -> RuntimeResult<Value> {
    Value::map(pairs)
}

/// Value under `key`, or None when absent
pub fn map_get(map: &Value, key: &Value) -> RuntimeResult<Value> {
    let map = operand::map("map_get", map)?;
    let found = map.borrow().get(key)?.cloned();
    Ok(found.unwrap_or(Value::None))
}

/// Value under `key`, or `default` when absent
pub fn map_get_or(map: &Value, key: &Value, default: &Value) -> RuntimeResult<Value> {
    let map = operand::map("map_get_or", map)?;
    let found = map.borrow().get(key)?.cloned();
    Ok(found.unwrap_or_else(|| default.clone()))
}

/// Insert or update; an existing key keeps its position
pub fn map_set(map: &Value, key: Value, value: Value) -> RuntimeResult<()> {
    operand::map("map_set", map)?.borrow_mut().insert(key, value)
}

pub fn map_contains(map: &Value, key: &Value) -> RuntimeResult<bool> {
    operand::map("map_contains", map)?.borrow().contains_key(key)
}

/// Remove `key` if present; later entries keep their relative order
pub fn map_remove(map: &Value, key: &Value) -> RuntimeResult<()> {
    operand::map("map_remove", map)?.borrow_mut().remove(key)?;
    Ok(())
}

/// Keys as a new Array, in insertion order
pub fn map_keys(map: &Value) -> RuntimeResult<Value> {
    let map = operand::map("map_keys", map)?.borrow();
    Ok(Value::array(map.keys().cloned().collect()))
}

/// Values as a new Array, in key insertion order
pub fn map_values(map: &Value) -> RuntimeResult<Value> {
    let map = operand::map("map_values", map)?.borrow();
    Ok(Value::array(map.values().cloned().collect()))
}

/// `(key, value)` 2-Tuples as a new Array, in insertion order
pub fn map_items(map: &Value) -> RuntimeResult<Value> {
    let map = operand::map("map_items", map)?.borrow();
    let items = map
        .entries()
        .iter()
        .map(|(k, v)| Value::tuple(vec![k.clone(), v.clone()]))
        .collect();
    Ok(Value::array(items))
}

pub fn map_size(map: &Value) -> RuntimeResult<Value> {
    let map = operand::map("map_size", map)?.borrow();
    Ok(Value::Int(map.len() as i64))
}

// ---------------------------------------------------------------------------
// Set
// ---------------------------------------------------------------------------

/// Build a Set; duplicates are dropped, first occurrence wins
pub fn make_set(items: Vec<Value>) -> RuntimeResult<Value> {
    Value::set(items)
}

pub fn set_has(set: &Value, item: &Value) -> RuntimeResult<bool> {
    operand::set("set_has", set)?.borrow().contains(item)
}

/// Add a member; no-op if already present
pub fn set_add(set: &Value, item: Value) -> RuntimeResult<()> {
    operand::set("set_add", set)?.borrow_mut().insert(item)?;
    Ok(())
}

/// Remove a member; no-op if absent
pub fn set_remove(set: &Value, item: &Value) -> RuntimeResult<()> {
    operand::set("set_remove", set)?.borrow_mut().remove(item)?;
    Ok(())
}

pub fn set_size(set: &Value) -> RuntimeResult<Value> {
    let set = operand::set("set_size", set)?.borrow();
    Ok(Value::Int(set.len() as i64))
}

/// Members as a new Array, in insertion order
pub fn set_to_array(set: &Value) -> RuntimeResult<Value> {
    let set = operand::set("set_to_array", set)?.borrow();
    Ok(Value::array(set.iter().cloned().collect()))
}

/// Members of either set: `a`'s order, then `b`'s new members
pub fn set_union(a: &Value, b: &Value) -> RuntimeResult<Value> {
    let left = operand::set("set_union", a)?.borrow();
    let right = operand::set("set_union", b)?.borrow();
    let mut out = OrderedSet::new();
    for item in left.iter().chain(right.iter()) {
        out.insert(item.clone())?;
    }
    Ok(wrap_set(out))
}

/// Members of `a` also in `b`, in `a`'s order
pub fn set_intersection(a: &Value, b: &Value) -> RuntimeResult<Value> {
    let left = operand::set("set_intersection", a)?.borrow();
    let right = operand::set("set_intersection", b)?.borrow();
    let mut out = OrderedSet::new();
    for item in left.iter() {
        if right.contains(item)? {
            out.insert(item.clone())?;
        }
    }
    Ok(wrap_set(out))
}

/// Members of `a` not in `b`, in `a`'s order
pub fn set_difference(a: &Value, b: &Value) -> RuntimeResult<Value> {
    let left = operand::set("set_difference", a)?.borrow();
    let right = operand::set("set_difference", b)?.borrow();
    let mut out = OrderedSet::new();
    for item in left.iter() {
        if !right.contains(item)? {
            out.insert(item.clone())?;
        }
    }
    Ok(wrap_set(out))
}

fn wrap_set(set: OrderedSet) -> Value {
    Value::Set(Rc::new(RefCell::new(set)))
}
