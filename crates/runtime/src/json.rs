//! JSON bridge
//!
//! Converts between runtime values and `serde_json`'s tree model, then lets
//! `serde_json` do the text work. The mapping is lossy:
//!
//! | Value | JSON |
//! |-------|------|
//! | None | `null` |
//! | Bool | `true` / `false` |
//! | Int | integer |
//! | Float | number (non-finite floats are rejected) |
//! | String | string |
//! | Array, Tuple, Set | array |
//! | Map | object, keys converted to their display form |
//! | Record | object |
//! | Deque, Heap | *no mapping*: `FormatError` |
//!
//! Parsing goes the other way: objects become Maps with String keys in
//! document order, arrays become Arrays, integers that fit in Int64 become
//! Int and every other number becomes Float.
//!
//! Pretty output indents by `DYNVAL_JSON_INDENT` spaces per level (2 by
//! default).

use crate::config::{RuntimeConfig, runtime_config};
use crate::operand;
use dynval_core::collections::OrderedMap;
use dynval_core::format::display;
use dynval_core::value::Value;
use dynval_core::{RuntimeError, RuntimeResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as Json};
use std::cell::RefCell;
use std::rc::Rc;

/// Convert a value into a JSON tree
pub fn to_json(value: &Value) -> RuntimeResult<Json> {
    Ok(match value {
        Value::None => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(n) => Json::Number((*n).into()),
        Value::Float(f) => JsonNumber::from_f64(*f).map(Json::Number).ok_or_else(|| {
            RuntimeError::format(format!(
                "cannot encode non-finite float {} as JSON",
                display(value)
            ))
        })?,
        Value::String(s) => Json::String(s.to_string()),
        Value::Tuple(items) => json_array(items.iter())?,
        Value::Array(items) => json_array(items.borrow().iter())?,
        Value::Set(set) => json_array(set.borrow().iter())?,
        Value::Map(map) => {
            let mut object = JsonMap::new();
            for (k, v) in map.borrow().entries() {
                let key = match k {
                    Value::String(s) => s.to_string(),
                    other => display(other),
                };
                object.insert(key, to_json(v)?);
            }
            Json::Object(object)
        }
        Value::Record(record) => {
            let mut object = JsonMap::new();
            for (name, v) in record.borrow().iter() {
                object.insert(name.to_string(), to_json(v)?);
            }
            Json::Object(object)
        }
        Value::Deque(_) | Value::Heap(_) => {
            tracing::debug!(kind = value.type_name(), "no JSON mapping for value");
            return Err(RuntimeError::format(format!(
                "cannot convert {} to JSON",
                value.type_name()
            )));
        }
    })
}

fn json_array<'a>(items: impl Iterator<Item = &'a Value>) -> RuntimeResult<Json> {
    items
        .map(to_json)
        .collect::<RuntimeResult<Vec<_>>>()
        .map(Json::Array)
}

/// Convert a JSON tree into a value
pub fn from_json(json: &Json) -> RuntimeResult<Value> {
    Ok(match json {
        Json::Null => Value::None,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Json::String(s) => Value::from(s.as_str()),
        Json::Array(items) => Value::array(
            items
                .iter()
                .map(from_json)
                .collect::<RuntimeResult<Vec<_>>>()?,
        ),
        Json::Object(object) => {
            let mut map = OrderedMap::new();
            for (k, v) in object {
                map.insert(Value::from(k.as_str()), from_json(v)?)?;
            }
            Value::Map(Rc::new(RefCell::new(map)))
        }
    })
}

/// Parse JSON text
pub fn json_parse(text: &Value) -> RuntimeResult<Value> {
    let text = operand::string("json_parse", text)?;
    let tree: Json = serde_json::from_str(text).map_err(|e| {
        tracing::debug!(error = %e, "JSON parse failed");
        RuntimeError::format(format!("invalid JSON: {}", e))
    })?;
    from_json(&tree)
}

/// Serialize to JSON text, compact or pretty
pub fn json_stringify(value: &Value, pretty: bool) -> RuntimeResult<Value> {
    json_stringify_with(runtime_config(), value, pretty)
}

/// [`json_stringify`] under an explicit configuration
pub fn json_stringify_with(
    config: &RuntimeConfig,
    value: &Value,
    pretty: bool,
) -> RuntimeResult<Value> {
    let tree = to_json(value)?;
    let text = if pretty {
        let indent = " ".repeat(config.json_indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        tree.serialize(&mut ser)
            .map_err(|e| RuntimeError::format(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| RuntimeError::format(e.to_string()))?
    } else {
        serde_json::to_string(&tree).map_err(|e| RuntimeError::format(e.to_string()))?
    };
    Ok(Value::from(text))
}
