//! dynval runtime: the operation library compiled programs call into
//!
//! Every operation takes `&Value` arguments, dispatches on kind, and returns
//! either a value or a typed [`RuntimeError`]. Nothing here keeps global
//! error state; the only process-wide state is the cached [`RuntimeConfig`].
//!
//! # Modules
//!
//! - `arithmetic`: `+ - * / // % **`, negation, logical not
//! - `compare`: deep equality and ordering
//! - `list_ops`: Array and Tuple access, slicing, `length`, `range`
//! - `map_ops`: Map and Set operations, set algebra
//! - `record_ops`: Record field access
//! - `queue_ops`: Deque and Heap
//! - `string_ops`, `math_ops`, `regex`, `json`: bridges
//! - `convert`: conversions and kind predicates
//! - `io`: print
//! - `config`: environment-driven configuration
//!
//! # Threads
//!
//! Values are `!Send`. Confine a value graph to one thread; give each
//! worker its own.

pub mod arithmetic;
pub mod compare;
pub mod config;
pub mod convert;
pub mod io;
pub mod json;
pub mod list_ops;
pub mod map_ops;
pub mod math_ops;
mod operand;
pub mod queue_ops;
pub mod record_ops;
pub mod string_ops;

#[cfg(feature = "regex")]
pub mod regex;
#[cfg(not(feature = "regex"))]
#[path = "regex_stub.rs"]
pub mod regex;

// Re-export the value model so callers need only this crate
pub use dynval_core::{
    ErrorKind, Number, RuntimeError, RuntimeResult, Value, ValueKind, display, encode_key, repr,
};

pub use config::{RuntimeConfig, runtime_config};

// Operators
pub use arithmetic::{
    add, divide, floor_divide, logical_not, modulo, multiply, negate, power, subtract,
};
pub use compare::{
    equal, greater_than, greater_than_or_equal, less_than, less_than_or_equal, not_equal,
};

// Containers
pub use list_ops::{
    array_get, array_length, array_push, array_set, array_slice, length, make_array, make_tuple,
    range,
};
pub use map_ops::{
    make_map, make_set, map_contains, map_get, map_get_or, map_items, map_keys, map_remove,
    map_set, map_size, map_values, set_add, set_difference, set_has, set_intersection,
    set_remove, set_size, set_to_array, set_union,
};
pub use queue_ops::{
    deque_new, deque_peek_back, deque_peek_front, deque_pop_back, deque_pop_front,
    deque_push_back, deque_push_front, deque_size, heap_new, heap_peek, heap_pop, heap_push,
    heap_size,
};
pub use record_ops::{get_field, has_field, make_record, set_field};

// Bridges
pub use json::{json_parse, json_stringify, json_stringify_with};
pub use math_ops::{
    math_abs, math_ceil, math_cos, math_e, math_exp, math_floor, math_log, math_pi, math_pow,
    math_sin, math_sqrt, math_tan,
};
pub use crate::regex::{regex_find_all, regex_match, regex_replace, regex_split};
pub use string_ops::{
    string_char_at, string_contains, string_ends_with, string_join, string_length, string_lower,
    string_replace, string_split, string_starts_with, string_substring, string_trim,
    string_upper,
};

// Conversions and output
pub use convert::{to_bool, to_float, to_int, to_string, type_name};
pub use io::{print, print_values};
