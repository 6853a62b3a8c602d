//! Arithmetic operations
//!
//! Binary operators take two `&Value` operands and return a fresh `Value`.
//!
//! # Numeric Promotion
//!
//! Bool counts as Int (`true` is 1, `false` is 0). If either operand is a
//! Float the result is a Float; otherwise it is an Int. `divide` is the
//! exception and always produces a Float.
//!
//! # Overflow Behavior
//!
//! Int arithmetic uses **wrapping semantics**:
//! - `add`: i64::MAX + 1 wraps to i64::MIN
//! - `subtract`: i64::MIN - 1 wraps to i64::MAX
//! - `multiply`: overflow wraps around
//! - `floor_divide`, `modulo`: i64::MIN by -1 wraps to i64::MIN and 0
//!
//! # Sign of `modulo`
//!
//! The result always takes the divisor's sign: the truncating remainder is
//! computed first, then the divisor is added when the remainder is nonzero
//! and its sign differs from the divisor's. `modulo(7, -3)` is `-2` and
//! `modulo(-7, 3)` is `2`, for Int and Float alike.

use crate::operand;
use dynval_core::format::display;
use dynval_core::value::{Number, Value};
use dynval_core::{RuntimeError, RuntimeResult};

const DIVISION_BY_ZERO: &str = "division by zero";

fn operands(op: &'static str, a: &Value, b: &Value) -> RuntimeResult<(Number, Number)> {
    Ok((operand::number(op, a)?, operand::number(op, b)?))
}

/// Apply `int_op` when both operands are integer-like, `float_op` otherwise
fn numeric(
    op: &'static str,
    a: &Value,
    b: &Value,
    int_op: fn(i64, i64) -> i64,
    float_op: fn(f64, f64) -> f64,
) -> RuntimeResult<Value> {
    Ok(match operands(op, a, b)? {
        (Number::Int(x), Number::Int(y)) => Value::Int(int_op(x, y)),
        (x, y) => Value::Float(float_op(x.as_f64(), y.as_f64())),
    })
}

/// `a + b`
///
/// String with anything concatenates display forms. Two Arrays concatenate
/// into a new Array; neither input is touched. Everything else is numeric.
pub fn add(a: &Value, b: &Value) -> RuntimeResult<Value> {
    match (a, b) {
        (Value::String(_), _) | (_, Value::String(_)) => {
            let mut text = display(a);
            text.push_str(&display(b));
            Ok(Value::from(text))
        }
        (Value::Array(left), Value::Array(right)) => {
            let mut items = left.borrow().clone();
            items.extend(right.borrow().iter().cloned());
            Ok(Value::array(items))
        }
        _ => numeric("add", a, b, i64::wrapping_add, |x, y| x + y),
    }
}

pub fn subtract(a: &Value, b: &Value) -> RuntimeResult<Value> {
    numeric("subtract", a, b, i64::wrapping_sub, |x, y| x - y)
}

/// `a * b`
///
/// String times Int (either order) repeats the string; a count of zero or
/// less gives the empty string. A result too large to allocate is an
/// `ArithmeticError`.
pub fn multiply(a: &Value, b: &Value) -> RuntimeResult<Value> {
    match (a, b) {
        (Value::String(s), Value::Int(n)) | (Value::Int(n), Value::String(s)) => {
            let count = usize::try_from(*n).unwrap_or(0);
            match s.len().checked_mul(count) {
                Some(total) if total <= isize::MAX as usize => Ok(Value::from(s.repeat(count))),
                _ => Err(RuntimeError::arithmetic("multiply", "repeat count too large")),
            }
        }
        _ => numeric("multiply", a, b, i64::wrapping_mul, |x, y| x * y),
    }
}

/// `a / b`, always a Float
pub fn divide(a: &Value, b: &Value) -> RuntimeResult<Value> {
    let (x, y) = operands("divide", a, b)?;
    if y.is_zero() {
        return Err(RuntimeError::arithmetic("divide", DIVISION_BY_ZERO));
    }
    Ok(Value::Float(x.as_f64() / y.as_f64()))
}

/// `a // b`, rounding toward negative infinity
pub fn floor_divide(a: &Value, b: &Value) -> RuntimeResult<Value> {
    let (x, y) = operands("floor_divide", a, b)?;
    if y.is_zero() {
        return Err(RuntimeError::arithmetic("floor_divide", DIVISION_BY_ZERO));
    }
    Ok(match (x, y) {
        (Number::Int(x), Number::Int(y)) => {
            let quotient = x.wrapping_div(y);
            if x.wrapping_rem(y) != 0 && ((x < 0) != (y < 0)) {
                Value::Int(quotient - 1)
            } else {
                Value::Int(quotient)
            }
        }
        (x, y) => Value::Float((x.as_f64() / y.as_f64()).floor()),
    })
}

/// `a % b`, with the sign of the divisor
pub fn modulo(a: &Value, b: &Value) -> RuntimeResult<Value> {
    let (x, y) = operands("modulo", a, b)?;
    if y.is_zero() {
        return Err(RuntimeError::arithmetic("modulo", DIVISION_BY_ZERO));
    }
    Ok(match (x, y) {
        (Number::Int(x), Number::Int(y)) => {
            let r = x.wrapping_rem(y);
            if r != 0 && ((r < 0) != (y < 0)) {
                Value::Int(r.wrapping_add(y))
            } else {
                Value::Int(r)
            }
        }
        (x, y) => {
            let (x, y) = (x.as_f64(), y.as_f64());
            let r = x % y;
            if r != 0.0 && ((r < 0.0) != (y < 0.0)) {
                Value::Float(r + y)
            } else {
                Value::Float(r)
            }
        }
    })
}

/// `a ** b`
///
/// Int to a non-negative Int power stays Int (wrapping). A negative
/// exponent, or any Float operand, gives a Float.
pub fn power(a: &Value, b: &Value) -> RuntimeResult<Value> {
    Ok(match operands("power", a, b)? {
        (Number::Int(base), Number::Int(exp)) if exp >= 0 => match u32::try_from(exp) {
            Ok(exp) => Value::Int(base.wrapping_pow(exp)),
            Err(_) => Value::Float((base as f64).powf(exp as f64)),
        },
        (x, y) => Value::Float(x.as_f64().powf(y.as_f64())),
    })
}

/// Unary minus; Bool negates as Int
pub fn negate(a: &Value) -> RuntimeResult<Value> {
    Ok(match operand::number("negate", a)? {
        Number::Int(n) => Value::Int(n.wrapping_neg()),
        Number::Float(f) => Value::Float(-f),
    })
}

/// Negated truthiness; accepts every kind
pub fn logical_not(a: &Value) -> Value {
    Value::Bool(!a.is_truthy())
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

    fn float(v: RuntimeResult<Value>) -> f64 {
        match v.unwrap() {
            Value::Float(f) => f,
            other => panic!("Expected Float, got {:?}", other),
        }
    }

    #[test]
    fn test_add_numeric_promotion() {
        assert_eq!(int(add(&Value::Int(5), &Value::Int(3))), 8);
        assert_eq!(int(add(&Value::Bool(true), &Value::Int(1))), 2);
        assert_eq!(float(add(&Value::Int(1), &Value::Float(0.5))), 1.5);
    }

    #[test]
    fn test_add_overflow_wraps() {
        assert_eq!(int(add(&Value::Int(i64::MAX), &Value::Int(1))), i64::MIN);
        assert_eq!(
            int(subtract(&Value::Int(i64::MIN), &Value::Int(1))),
            i64::MAX
        );
    }

    #[test]
    fn test_add_string_coercion() {
        let v = add(&Value::from("n="), &Value::Float(2.0)).unwrap();
        assert_eq!(v.as_str(), Some("n=2.0"));

        let list = Value::array(vec![Value::from("a")]);
        let v = add(&list, &Value::from("!")).unwrap();
        assert_eq!(v.as_str(), Some("['a']!"));
    }

    #[test]
    fn test_add_arrays_builds_new_array() {
        let left = Value::array(vec![Value::Int(1), Value::Int(2)]);
        let right = Value::array(vec![Value::Int(3)]);
        let joined = add(&left, &right).unwrap();
        assert_eq!(joined.to_string(), "[1, 2, 3]");
        assert_eq!(left.to_string(), "[1, 2]");
        assert_eq!(right.to_string(), "[3]");
    }

    #[test]
    fn test_add_type_mismatch() {
        let err = add(&Value::None, &Value::Int(1)).unwrap_err();
        assert_eq!(err, RuntimeError::type_mismatch("add", "number", "None"));
    }

    #[test]
    fn test_multiply_string_repeat() {
        let v = multiply(&Value::from("ab"), &Value::Int(3)).unwrap();
        assert_eq!(v.as_str(), Some("ababab"));
        let v = multiply(&Value::Int(2), &Value::from("x")).unwrap();
        assert_eq!(v.as_str(), Some("xx"));
        let v = multiply(&Value::from("x"), &Value::Int(0)).unwrap();
        assert_eq!(v.as_str(), Some(""));
        let v = multiply(&Value::from("x"), &Value::Int(-4)).unwrap();
        assert_eq!(v.as_str(), Some(""));
    }

    #[test]
    fn test_multiply_string_repeat_too_large() {
        let err = multiply(&Value::from("ab"), &Value::Int(i64::MAX)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArithmeticError);
        let err = multiply(&Value::Int(i64::MAX), &Value::from("xyz")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArithmeticError);

        // An empty string repeats to nothing however large the count
        let v = multiply(&Value::from(""), &Value::Int(i64::MAX)).unwrap();
        assert_eq!(v.as_str(), Some(""));
    }

    #[test]
    fn test_divide_always_float() {
        assert_eq!(float(divide(&Value::Int(20), &Value::Int(4))), 5.0);
        assert_eq!(float(divide(&Value::Int(1), &Value::Int(2))), 0.5);
    }

    #[test]
    fn test_divide_by_zero() {
        for divisor in [Value::Int(0), Value::Float(0.0), Value::Float(-0.0), Value::Bool(false)] {
            let err = divide(&Value::Int(1), &divisor).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArithmeticError);
            assert_eq!(err.to_string(), "divide: division by zero");
        }
    }

    #[test]
    fn test_modulo_takes_divisor_sign() {
        assert_eq!(int(modulo(&Value::Int(7), &Value::Int(-3))), -2);
        assert_eq!(int(modulo(&Value::Int(-7), &Value::Int(3))), 2);
        assert_eq!(int(modulo(&Value::Int(7), &Value::Int(3))), 1);
        assert_eq!(int(modulo(&Value::Int(-6), &Value::Int(3))), 0);
        assert_eq!(float(modulo(&Value::Float(7.0), &Value::Int(-3))), -2.0);
        assert_eq!(float(modulo(&Value::Float(-7.0), &Value::Float(3.0))), 2.0);
        assert_eq!(int(modulo(&Value::Int(i64::MIN), &Value::Int(-1))), 0);
    }

    #[test]
    fn test_modulo_by_zero() {
        let err = modulo(&Value::Int(7), &Value::Int(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArithmeticError);
        let err = modulo(&Value::Float(7.5), &Value::Float(0.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArithmeticError);
    }

    #[test]
    fn test_floor_divide() {
        assert_eq!(int(floor_divide(&Value::Int(7), &Value::Int(2))), 3);
        assert_eq!(int(floor_divide(&Value::Int(-7), &Value::Int(2))), -4);
        assert_eq!(int(floor_divide(&Value::Int(7), &Value::Int(-2))), -4);
        assert_eq!(int(floor_divide(&Value::Int(-6), &Value::Int(2))), -3);
        assert_eq!(float(floor_divide(&Value::Float(7.5), &Value::Int(2))), 3.0);
        assert!(floor_divide(&Value::Int(1), &Value::Int(0)).is_err());
    }

    #[test]
    fn test_power() {
        assert_eq!(int(power(&Value::Int(2), &Value::Int(10))), 1024);
        assert_eq!(float(power(&Value::Int(2), &Value::Int(-1))), 0.5);
        assert_eq!(float(power(&Value::Float(4.0), &Value::Float(0.5))), 2.0);
    }

    #[test]
    fn test_negate_and_not() {
        assert_eq!(int(negate(&Value::Int(5))), -5);
        assert_eq!(int(negate(&Value::Bool(true))), -1);
        assert_eq!(float(negate(&Value::Float(1.5))), -1.5);
        assert!(negate(&Value::from("x")).is_err());

        assert!(matches!(logical_not(&Value::None), Value::Bool(true)));
        assert!(matches!(logical_not(&Value::heap()), Value::Bool(false)));
        assert!(matches!(logical_not(&Value::from("")), Value::Bool(true)));
    }
}
