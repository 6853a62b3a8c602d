//! Math functions
//!
//! Arguments may be any numeric value (Int, Float, or Bool as 0/1).
//!
//! | Function | Result |
//! |----------|--------|
//! | `sin`, `cos`, `tan`, `sqrt`, `log`, `exp` | always Float |
//! | `floor`, `ceil` | always Int |
//! | `abs` | same kind as the input (Bool gives Int) |
//! | `pow` | as the `**` operator |

use crate::arithmetic;
use crate::operand;
use dynval_core::value::{Number, Value};
use dynval_core::{RuntimeError, RuntimeResult};

fn unary_float(op: &'static str, v: &Value, f: fn(f64) -> f64) -> RuntimeResult<Value> {
    let x = operand::number(op, v)?.as_f64();
    Ok(Value::Float(f(x)))
}

pub fn math_sin(v: &Value) -> RuntimeResult<Value> {
    unary_float("sin", v, f64::sin)
}

pub fn math_cos(v: &Value) -> RuntimeResult<Value> {
    unary_float("cos", v, f64::cos)
}

pub fn math_tan(v: &Value) -> RuntimeResult<Value> {
    unary_float("tan", v, f64::tan)
}

/// Square root; negative input gives NaN
pub fn math_sqrt(v: &Value) -> RuntimeResult<Value> {
    unary_float("sqrt", v, f64::sqrt)
}

/// Natural logarithm; zero gives -inf, negative input NaN
pub fn math_log(v: &Value) -> RuntimeResult<Value> {
    unary_float("log", v, f64::ln)
}

pub fn math_exp(v: &Value) -> RuntimeResult<Value> {
    unary_float("exp", v, f64::exp)
}

fn rounded_int(op: &'static str, v: &Value, round: fn(f64) -> f64) -> RuntimeResult<Value> {
    match operand::number(op, v)? {
        Number::Int(n) => Ok(Value::Int(n)),
        Number::Float(f) => Number::Float(round(f))
            .exact_int()
            .map(Value::Int)
            .ok_or_else(|| {
                RuntimeError::arithmetic(op, format!("cannot convert {} to int", f))
            }),
    }
}

/// Largest Int not above the input
///
/// NaN, infinities and results outside Int64 fail with `ArithmeticError`.
pub fn math_floor(v: &Value) -> RuntimeResult<Value> {
    rounded_int("floor", v, f64::floor)
}

/// Smallest Int not below the input
pub fn math_ceil(v: &Value) -> RuntimeResult<Value> {
    rounded_int("ceil", v, f64::ceil)
}

/// Absolute value; Int stays Int (wrapping at i64::MIN)
pub fn math_abs(v: &Value) -> RuntimeResult<Value> {
    Ok(match operand::number("abs", v)? {
        Number::Int(n) => Value::Int(n.wrapping_abs()),
        Number::Float(f) => Value::Float(f.abs()),
    })
}

pub fn math_pow(base: &Value, exponent: &Value) -> RuntimeResult<Value> {
    arithmetic::power(base, exponent)
}

pub fn math_pi() -> Value {
    Value::Float(std::f64::consts::PI)
}

pub fn math_e() -> Value {
    Value::Float(std::f64::consts::E)
}
