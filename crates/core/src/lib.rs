//! dynval core: the value model behind compiled dynamic programs
//!
//! This crate holds the data half of the runtime: the [`Value`] enum, the
//! container payloads behind its composite kinds, the canonical key encoding
//! that Map and Set are built on, and the two text forms every value prints
//! in. Operations over values live in `dynval-runtime`.
//!
//! Key design principles:
//! - Value: a closed set of kinds; composites are shared mutable handles
//! - Keys: Map/Set membership goes through a byte encoding, never through
//!   `Hash` on `Value`
//! - Errors: every failure is a [`RuntimeError`] returned to the caller
//!
//! # Modules
//!
//! - `value`: the Value enum, kind tags and numeric view
//! - `collections`: OrderedMap, OrderedSet, Record, PriorityHeap
//! - `key`: canonical key encoding for hashable values
//! - `format`: display and repr text forms
//! - `error`: RuntimeError and its ErrorKind taxonomy

pub mod collections;
pub mod error;
pub mod format;
pub mod key;
pub mod value;

pub use collections::{OrderedMap, OrderedSet, PriorityHeap, Record};
pub use error::{ErrorKind, RuntimeError, RuntimeResult};
pub use format::{display, format_float, repr};
pub use key::{KeyBytes, encode_key};
pub use value::{
    ArrayRef, DequeRef, HeapRef, MapRef, Number, RecordRef, SetRef, Value, ValueKind,
};
