//! Record operations
//!
//! A Record is a bag of named fields. Reading an absent field is a
//! `FieldNotFound` failure; writing always succeeds and creates the field
//! when it is new. Field iteration order is not part of the contract.

use crate::operand;
use dynval_core::value::Value;
use dynval_core::{RuntimeError, RuntimeResult};

pub fn make_record<S: Into<String>>(fields: Vec<(S, Value)>) -> Value {
    Value::record(fields)
}

pub fn get_field(record: &Value, name: &str) -> RuntimeResult<Value> {
    let record = operand::record("get_field", record)?.borrow();
    record
        .get(name)
        .cloned()
        .ok_or_else(|| RuntimeError::FieldNotFound {
            field: name.to_string(),
        })
}

pub fn set_field(record: &Value, name: &str, value: Value) -> RuntimeResult<()> {
    operand::record("set_field", record)?
        .borrow_mut()
        .set(name, value);
    Ok(())
}

pub fn has_field(record: &Value, name: &str) -> RuntimeResult<bool> {
    Ok(operand::record("has_field", record)?.borrow().contains(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynval_core::ErrorKind;

    #[test]
    fn test_get_and_set_field() {
        let r = make_record(vec![("name", Value::from("Ada"))]);
        assert_eq!(get_field(&r, "name").unwrap().as_str(), Some("Ada"));

        set_field(&r, "age", Value::Int(36)).unwrap();
        assert!(has_field(&r, "age").unwrap());
        assert!(matches!(get_field(&r, "age").unwrap(), Value::Int(36)));
    }

    #[test]
    fn test_missing_field() {
        let r = make_record::<&str>(vec![]);
        let err = get_field(&r, "age").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FieldNotFound);
        assert_eq!(err.to_string(), "record has no field 'age'");
        assert!(!has_field(&r, "age").unwrap());
    }

    #[test]
    fn test_alias_sees_field_write() {
        let r = make_record(vec![("x", Value::Int(1))]);
        let alias = r.clone();
        set_field(&alias, "x", Value::Int(2)).unwrap();
        assert!(matches!(get_field(&r, "x").unwrap(), Value::Int(2)));
    }

    #[test]
    fn test_non_record_operand() {
        let err = get_field(&Value::map(vec![]).unwrap(), "x").unwrap_err();
        assert_eq!(err, RuntimeError::type_mismatch("get_field", "record", "dict"));
    }
}
