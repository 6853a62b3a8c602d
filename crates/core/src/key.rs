//! Canonical key encoding
//!
//! Map and Set never hash `Value`s directly. Every key is first turned into
//! a [`KeyBytes`] string, and membership, lookup, update and removal all
//! work on those bytes.
//!
//! # Format
//!
//! | Kind | Encoding |
//! |------|----------|
//! | None | `0x00` |
//! | integer-valued number | `0x01` + 8-byte big-endian i64 |
//! | other Float | `0x02` + 8-byte big-endian IEEE-754 bits |
//! | String | `0x03` + 8-byte big-endian byte length + UTF-8 bytes |
//! | Tuple | `0x04` + 8-byte big-endian element count + element encodings |
//!
//! Numbers are encoded by numeric value, not by kind: `true`, `1` and `1.0`
//! share the integer encoding, matching the runtime's cross-kind numeric
//! equality. Non-integral floats keep their full bit pattern, so distinct
//! doubles never collide. All NaNs share one encoding even though NaN is
//! never equal to itself.
//!
//! Every encoding is self-delimiting, which keeps Tuple concatenation
//! injective.

use crate::error::{RuntimeError, RuntimeResult};
use crate::value::{Value, float_to_exact_int};

const TAG_NONE: u8 = 0x00;
const TAG_INT: u8 = 0x01;
const TAG_FLOAT: u8 = 0x02;
const TAG_STRING: u8 = 0x03;
const TAG_TUPLE: u8 = 0x04;

/// Canonical byte encoding of a hashable value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyBytes(Box<[u8]>);

impl KeyBytes {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Encode a hashable value
///
/// Fails with `UnhashableKey` for Array, Map, Set, Record, Deque, Heap, and
/// for Tuples that contain any of those.
pub fn encode_key(value: &Value) -> RuntimeResult<KeyBytes> {
    let mut buf = Vec::with_capacity(16);
    encode_into(value, &mut buf)?;
    Ok(KeyBytes(buf.into_boxed_slice()))
}

fn encode_into(value: &Value, buf: &mut Vec<u8>) -> RuntimeResult<()> {
    match value {
        Value::None => buf.push(TAG_NONE),
        Value::Bool(b) => encode_int(i64::from(*b), buf),
        Value::Int(n) => encode_int(*n, buf),
        Value::Float(f) => match float_to_exact_int(*f) {
            Some(n) => encode_int(n, buf),
            None => {
                let bits = if f.is_nan() {
                    f64::NAN.to_bits()
                } else {
                    f.to_bits()
                };
                buf.push(TAG_FLOAT);
                buf.extend_from_slice(&bits.to_be_bytes());
            }
        },
        Value::String(s) => {
            buf.push(TAG_STRING);
            buf.extend_from_slice(&(s.len() as u64).to_be_bytes());
            buf.extend_from_slice(s.as_bytes());
        }
        Value::Tuple(items) => {
            buf.push(TAG_TUPLE);
            buf.extend_from_slice(&(items.len() as u64).to_be_bytes());
            for item in items.iter() {
                encode_into(item, buf)?;
            }
        }
        other => {
            return Err(RuntimeError::UnhashableKey {
                kind: other.type_name(),
            });
        }
    }
    Ok(())
}

fn encode_int(n: i64, buf: &mut Vec<u8>) {
    buf.push(TAG_INT);
    buf.extend_from_slice(&n.to_be_bytes());
}
