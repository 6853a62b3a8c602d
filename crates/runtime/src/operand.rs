//! Operand extraction shared by the operation modules
//!
//! Every public operation takes `&Value` arguments and dispatches on kind.
//! These helpers pull out the payload an operation needs or produce the
//! `TypeMismatch` that names the operation, what it wanted and what it got.

use dynval_core::value::{
    ArrayRef, DequeRef, HeapRef, MapRef, Number, RecordRef, SetRef, Value,
};
use dynval_core::{RuntimeError, RuntimeResult};

pub(crate) fn number(op: &'static str, v: &Value) -> RuntimeResult<Number> {
    v.as_number()
        .ok_or_else(|| RuntimeError::type_mismatch(op, "number", v.type_name()))
}

pub(crate) fn string<'a>(op: &'static str, v: &'a Value) -> RuntimeResult<&'a str> {
    v.as_str()
        .ok_or_else(|| RuntimeError::type_mismatch(op, "str", v.type_name()))
}

/// Integer index argument; Bool counts as 0/1, Float is rejected
pub(crate) fn index(op: &'static str, v: &Value) -> RuntimeResult<i64> {
    match v {
        Value::Int(n) => Ok(*n),
        Value::Bool(b) => Ok(i64::from(*b)),
        other => Err(RuntimeError::type_mismatch(op, "int", other.type_name())),
    }
}

/// Validate an element position: `0 <= index < len`
pub(crate) fn element(op: &'static str, index: i64, len: usize) -> RuntimeResult<usize> {
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(RuntimeError::out_of_range(op, index, len)),
    }
}

/// Validate a slice endpoint: `0 <= index <= len`
pub(crate) fn boundary(op: &'static str, index: i64, len: usize) -> RuntimeResult<usize> {
    match usize::try_from(index) {
        Ok(i) if i <= len => Ok(i),
        _ => Err(RuntimeError::out_of_range(op, index, len)),
    }
}

macro_rules! handle_accessor {
    ($name:ident, $variant:ident, $ty:ty, $expected:literal) => {
        pub(crate) fn $name<'a>(op: &'static str, v: &'a Value) -> RuntimeResult<&'a $ty> {
            match v {
                Value::$variant(handle) => Ok(handle),
                other => Err(RuntimeError::type_mismatch(op, $expected, other.type_name())),
            }
        }
    };
}

handle_accessor!(array, Array, ArrayRef, "list");
handle_accessor!(map, Map, MapRef, "dict");
handle_accessor!(set, Set, SetRef, "set");
handle_accessor!(record, Record, RecordRef, "record");
handle_accessor!(deque, Deque, DequeRef, "deque");
handle_accessor!(heap, Heap, HeapRef, "heap");

#[cfg(test)]
mod tests {
    use super::*;
    use dynval_core::ErrorKind;

    #[test]
    fn test_index_accepts_int_and_bool() {
        assert_eq!(index("op", &Value::Int(3)).unwrap(), 3);
        assert_eq!(index("op", &Value::Bool(true)).unwrap(), 1);
        let err = index("op", &Value::Float(1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_element_and_boundary_bounds() {
        assert_eq!(element("op", 0, 1).unwrap(), 0);
        assert!(element("op", 1, 1).is_err());
        assert!(element("op", -1, 5).is_err());
        assert_eq!(boundary("op", 1, 1).unwrap(), 1);
        assert!(boundary("op", 2, 1).is_err());
        assert!(boundary("op", -1, 1).is_err());
    }

    #[test]
    fn test_handle_accessor_names_expected_kind() {
        let err = array("array_push", &Value::Int(1)).unwrap_err();
        assert_eq!(err, RuntimeError::type_mismatch("array_push", "list", "int"));
        assert!(map("map_get", &Value::map(vec![]).unwrap()).is_ok());
    }
}
