//! Conversions and kind predicates
//!
//! `to_int` and `to_float` refuse Bool: a compiled `int(True)` is rejected
//! rather than silently becoming 1. Strings are parsed after trimming ASCII
//! whitespace; a malformed literal is a `FormatError`.

use dynval_core::format::display;
use dynval_core::value::{Number, Value, ValueKind};
use dynval_core::{RuntimeError, RuntimeResult};

fn trim_ascii(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c' | '\x0b'))
}

/// Convert to Int
///
/// Float truncates toward zero; NaN, infinities and floats outside Int64
/// fail with `ArithmeticError`. Bool is a `TypeMismatch`, not 0/1: use the
/// arithmetic operators when a Bool should count as a number.
pub fn to_int(v: &Value) -> RuntimeResult<Value> {
    match v {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Float(f) => Number::Float(f.trunc())
            .exact_int()
            .map(Value::Int)
            .ok_or_else(|| {
                RuntimeError::arithmetic("to_int", format!("cannot convert {} to int", display(v)))
            }),
        Value::String(s) => trim_ascii(s).parse().map(Value::Int).map_err(|_| {
            RuntimeError::format(format!("invalid literal for int(): '{}'", s))
        }),
        other => Err(RuntimeError::type_mismatch(
            "to_int",
            "int, float or str",
            other.type_name(),
        )),
    }
}

/// Convert to Float
///
/// Bool is a `TypeMismatch`, the same as in [`to_int`].
pub fn to_float(v: &Value) -> RuntimeResult<Value> {
    match v {
        Value::Float(f) => Ok(Value::Float(*f)),
        Value::Int(n) => Ok(Value::Float(*n as f64)),
        Value::String(s) => trim_ascii(s).parse().map(Value::Float).map_err(|_| {
            RuntimeError::format(format!("could not convert string to float: '{}'", s))
        }),
        other => Err(RuntimeError::type_mismatch(
            "to_float",
            "int, float or str",
            other.type_name(),
        )),
    }
}

/// Display form as a String value
pub fn to_string(v: &Value) -> Value {
    Value::from(display(v))
}

/// Truthiness as a Bool value
pub fn to_bool(v: &Value) -> Value {
    Value::Bool(v.is_truthy())
}

/// User-facing kind name (`int`, `list`, `dict`, ...) as a String value
pub fn type_name(v: &Value) -> Value {
    Value::from(v.type_name())
}

macro_rules! kind_predicate {
    ($($name:ident => $kind:ident),* $(,)?) => {
        $(
            pub fn $name(v: &Value) -> bool {
                v.kind() == ValueKind::$kind
            }
        )*
    };
}

kind_predicate! {
    is_none => None,
    is_bool => Bool,
    is_int => Int,
    is_float => Float,
    is_string => String,
    is_tuple => Tuple,
    is_array => Array,
    is_map => Map,
    is_set => Set,
    is_record => Record,
    is_deque => Deque,
    is_heap => Heap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynval_core::ErrorKind;

    fn int(v: RuntimeResult<Value>) -> i64 {
        match v.unwrap() {
            Value::Int(n) => n,
            other => panic!("Expected Int, got {:?}", other),
        }
    }

    #[test]
    fn test_to_int() {
        assert_eq!(int(to_int(&Value::Int(7))), 7);
        assert_eq!(int(to_int(&Value::Float(-2.9))), -2);
        assert_eq!(int(to_int(&Value::from("  42\n"))), 42);
        assert_eq!(int(to_int(&Value::from("-5"))), -5);
    }

    #[test]
    fn test_to_int_failures() {
        let err = to_int(&Value::Bool(true)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let err = to_int(&Value::from("4.5")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);
        let err = to_int(&Value::Float(f64::NAN)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArithmeticError);
        let err = to_int(&Value::Float(1e19)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArithmeticError);
    }

    #[test]
    fn test_to_float() {
        assert!(matches!(to_float(&Value::Int(3)).unwrap(), Value::Float(f) if f == 3.0));
        assert!(matches!(to_float(&Value::from(" 2.5 ")).unwrap(), Value::Float(f) if f == 2.5));
        assert!(to_float(&Value::Bool(false)).is_err());
        assert!(to_float(&Value::from("abc")).is_err());
    }

    #[test]
    fn test_to_string_and_bool() {
        assert_eq!(to_string(&Value::Float(3.0)).as_str(), Some("3.0"));
        assert_eq!(to_string(&Value::from("x")).as_str(), Some("x"));
        assert_eq!(
            to_string(&Value::array(vec![Value::from("x")])).as_str(),
            Some("['x']")
        );
        assert!(matches!(to_bool(&Value::Int(0)), Value::Bool(false)));
        assert!(matches!(to_bool(&Value::deque(vec![])), Value::Bool(true)));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&Value::None).as_str(), Some("None"));
        assert_eq!(type_name(&Value::array(vec![])).as_str(), Some("list"));
        assert_eq!(type_name(&Value::map(vec![]).unwrap()).as_str(), Some("dict"));
        assert_eq!(type_name(&Value::from("s")).as_str(), Some("str"));
    }

    #[test]
    fn test_kind_predicates() {
        assert!(is_none(&Value::None));
        assert!(is_int(&Value::Int(1)));
        assert!(!is_int(&Value::Bool(true)));
        assert!(is_float(&Value::Float(1.0)));
        assert!(is_string(&Value::from("")));
        assert!(is_tuple(&Value::tuple(vec![])));
        assert!(is_array(&Value::array(vec![])));
        assert!(is_set(&Value::set(vec![]).unwrap()));
        assert!(is_record(&Value::record::<&str>(vec![])));
        assert!(is_deque(&Value::deque(vec![])));
        assert!(is_heap(&Value::heap()));
        assert!(!is_map(&Value::heap()));
        assert!(is_bool(&Value::Bool(false)));
    }
}
