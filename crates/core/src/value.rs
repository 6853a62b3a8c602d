//! Value: the universal runtime datum
//!
//! Leaf kinds (None, Bool, Int, Float, String) are held by value. String and
//! Tuple are immutable once built, so they share their payload through a
//! plain `Rc`. The mutable composites (Array, Map, Set, Record, Deque, Heap)
//! are `Rc<RefCell<_>>` handles: cloning a `Value` clones the handle, and a
//! mutation through any alias is visible through every other alias.
//!
//! # Reference Cycles
//!
//! There is no cycle detection. A composite that (directly or indirectly)
//! contains itself is never freed, and formatting or comparing it recurses
//! without bound. Callers must build acyclic graphs.
//!
//! # Threads
//!
//! `Value` is neither `Send` nor `Sync`. A value graph belongs to the thread
//! that built it; give each worker its own graph.

use crate::collections::{OrderedMap, OrderedSet, PriorityHeap, Record};
use crate::error::RuntimeResult;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::rc::Rc;

pub type ArrayRef = Rc<RefCell<Vec<Value>>>;
pub type MapRef = Rc<RefCell<OrderedMap>>;
pub type SetRef = Rc<RefCell<OrderedSet>>;
pub type RecordRef = Rc<RefCell<Record>>;
pub type DequeRef = Rc<RefCell<VecDeque<Value>>>;
pub type HeapRef = Rc<RefCell<PriorityHeap>>;

#[derive(Debug, Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Immutable text; indexing operations count Unicode scalar values
    String(Rc<str>),
    /// Immutable fixed-length sequence
    Tuple(Rc<[Value]>),
    Array(ArrayRef),
    /// Insertion-ordered dictionary keyed by canonical key encoding
    Map(MapRef),
    /// Insertion-ordered set keyed by canonical key encoding
    Set(SetRef),
    /// Named fields; iteration order is not part of the contract
    Record(RecordRef),
    Deque(DequeRef),
    /// Min-priority queue with FIFO tie-breaking
    Heap(HeapRef),
}

/// Kind tag of a [`Value`], used for dispatch diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    None,
    Bool,
    Int,
    Float,
    String,
    Tuple,
    Array,
    Map,
    Set,
    Record,
    Deque,
    Heap,
}

impl ValueKind {
    /// User-facing type name, as reported in error messages and by `type_name`
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::None => "None",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "str",
            ValueKind::Tuple => "tuple",
            ValueKind::Array => "list",
            ValueKind::Map => "dict",
            ValueKind::Set => "set",
            ValueKind::Record => "record",
            ValueKind::Deque => "deque",
            ValueKind::Heap => "heap",
        }
    }
}

/// A numeric view of a Bool, Int or Float value
///
/// Bool coerces to `Int(0)` / `Int(1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    /// Exact numeric comparison
    ///
    /// Int against Float compares the mathematical values, so
    /// `2^53 + 1` is greater than `2^53 as f64` even though both round to
    /// the same double. Returns `None` when a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }

    /// The exact Int64 value of this number, if it has one
    ///
    /// Integral floats inside the Int64 range convert; everything else
    /// (fractional, out of range, NaN, infinite) does not.
    pub fn exact_int(self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(n),
            Number::Float(f) => float_to_exact_int(f),
        }
    }
}

// 2^63 as an f64; every finite float strictly below it and at or above -2^63
// truncates into i64 without saturating.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

pub(crate) fn float_to_exact_int(f: f64) -> Option<i64> {
    if f.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if f < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }
    let truncated = f.trunc();
    match i.cmp(&(truncated as i64)) {
        Ordering::Equal if f > truncated => Some(Ordering::Less),
        Ordering::Equal if f < truncated => Some(Ordering::Greater),
        ord => Some(ord),
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::None => ValueKind::None,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Tuple(_) => ValueKind::Tuple,
            Value::Array(_) => ValueKind::Array,
            Value::Map(_) => ValueKind::Map,
            Value::Set(_) => ValueKind::Set,
            Value::Record(_) => ValueKind::Record,
            Value::Deque(_) => ValueKind::Deque,
            Value::Heap(_) => ValueKind::Heap,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn string(s: impl Into<Rc<str>>) -> Value {
        Value::String(s.into())
    }

    pub fn tuple(items: Vec<Value>) -> Value {
        Value::Tuple(items.into())
    }

    pub fn array(items: Vec<Value>) -> Value {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    /// Build a Map from pairs; later duplicates update earlier positions
    pub fn map(pairs: Vec<(Value, Value)>) -> RuntimeResult<Value> {
        let mut map = OrderedMap::new();
        for (k, v) in pairs {
            map.insert(k, v)?;
        }
        Ok(Value::Map(Rc::new(RefCell::new(map))))
    }

    /// Build a Set from items; duplicates are dropped, first occurrence wins
    pub fn set(items: Vec<Value>) -> RuntimeResult<Value> {
        let mut set = OrderedSet::new();
        for item in items {
            set.insert(item)?;
        }
        Ok(Value::Set(Rc::new(RefCell::new(set))))
    }

    pub fn record<S: Into<String>>(fields: Vec<(S, Value)>) -> Value {
        let mut record = Record::new();
        for (name, value) in fields {
            record.set(name, value);
        }
        Value::Record(Rc::new(RefCell::new(record)))
    }

    pub fn deque(items: Vec<Value>) -> Value {
        Value::Deque(Rc::new(RefCell::new(items.into())))
    }

    pub fn heap() -> Value {
        Value::Heap(Rc::new(RefCell::new(PriorityHeap::new())))
    }

    /// Numeric view for Bool, Int and Float; `None` for every other kind
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness
    ///
    /// None is false; Bool is itself; numbers are nonzero; String, Array,
    /// Tuple, Map and Set are non-empty. Record, Deque and Heap are always
    /// true regardless of contents.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Tuple(items) => !items.is_empty(),
            Value::Array(items) => !items.borrow().is_empty(),
            Value::Map(map) => !map.borrow().is_empty(),
            Value::Set(set) => !set.borrow().is_empty(),
            Value::Record(_) | Value::Deque(_) | Value::Heap(_) => true,
        }
    }

    /// Whether this value may be used as a Map key or Set member
    ///
    /// Leaf kinds are hashable; a Tuple is hashable when every element is.
    pub fn is_hashable(&self) -> bool {
        match self {
            Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => {
                true
            }
            Value::Tuple(items) => items.iter().all(Value::is_hashable),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_observe_mutation() {
        let a = Value::array(vec![Value::Int(1)]);
        let b = a.clone();
        if let Value::Array(items) = &b {
            items.borrow_mut().push(Value::Int(2));
        }
        match &a {
            Value::Array(items) => assert_eq!(items.borrow().len(), 2),
            other => panic!("Expected Array, got {:?}", other),
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::None.is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(Value::Float(0.5).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::array(vec![]).is_truthy());
        assert!(!Value::tuple(vec![]).is_truthy());
        assert!(Value::tuple(vec![Value::None]).is_truthy());

        // Record, Deque and Heap are always true, even when empty
        assert!(Value::record::<&str>(vec![]).is_truthy());
        assert!(Value::deque(vec![]).is_truthy());
        assert!(Value::heap().is_truthy());
    }

    #[test]
    fn test_hashability() {
        assert!(Value::None.is_hashable());
        assert!(Value::Float(1.5).is_hashable());
        assert!(Value::tuple(vec![Value::Int(1), Value::from("a")]).is_hashable());
        assert!(!Value::tuple(vec![Value::array(vec![])]).is_hashable());
        assert!(!Value::array(vec![]).is_hashable());
        assert!(!Value::heap().is_hashable());
    }

    #[test]
    fn test_number_exact_compare() {
        let big = Number::Int((1i64 << 53) + 1);
        let rounded = Number::Float((1i64 << 53) as f64);
        assert_eq!(big.compare(rounded), Some(Ordering::Greater));
        assert_eq!(rounded.compare(big), Some(Ordering::Less));

        assert_eq!(
            Number::Int(2).compare(Number::Float(2.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Number::Int(2).compare(Number::Float(2.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::Int(-3).compare(Number::Float(-3.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::Int(i64::MAX).compare(Number::Float(TWO_POW_63)),
            Some(Ordering::Less)
        );
        assert_eq!(Number::Int(0).compare(Number::Float(f64::NAN)), None);
    }

    #[test]
    fn test_exact_int() {
        assert_eq!(Number::Float(3.0).exact_int(), Some(3));
        assert_eq!(Number::Float(-0.0).exact_int(), Some(0));
        assert_eq!(Number::Float(3.5).exact_int(), None);
        assert_eq!(Number::Float(TWO_POW_63).exact_int(), None);
        assert_eq!(Number::Float(-TWO_POW_63).exact_int(), Some(i64::MIN));
        assert_eq!(Number::Float(f64::INFINITY).exact_int(), None);
        assert_eq!(Number::Float(f64::NAN).exact_int(), None);
    }

    #[test]
    fn test_bool_coerces_to_int() {
        assert_eq!(Value::Bool(true).as_number(), Some(Number::Int(1)));
        assert_eq!(Value::Bool(false).as_number(), Some(Number::Int(0)));
        assert_eq!(Value::from("1").as_number(), None);
    }
}
