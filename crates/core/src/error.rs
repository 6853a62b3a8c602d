//! Runtime Error Handling
//!
//! Every fallible operation returns [`RuntimeResult`]. Failures are raised at
//! the point of the offending call and carry enough context (operation name,
//! kinds involved, collaborator diagnostics) to produce a useful message.
//!
//! There is no error slot or thread-local error state: an operation either
//! fully applies or returns an error and leaves the value graph untouched.
//!
//! # Usage
//!
//! ```ignore
//! match array_get(&arr, &Value::Int(9)) {
//!     Err(e) if e.kind() == ErrorKind::OutOfRange => { /* ... */ }
//!     other => { /* ... */ }
//! }
//! ```

use std::fmt;

/// Result alias used across the runtime
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Failure taxonomy, without payload
///
/// Lets callers branch on the category of a failure without matching on
/// the fields of [`RuntimeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    UnhashableKey,
    OutOfRange,
    EmptyContainer,
    FieldNotFound,
    ArithmeticError,
    PatternError,
    FormatError,
}

/// Error raised by a runtime operation
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Operation applied to an unsupported value kind
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    /// Non-hashable kind used as a Map/Set key
    UnhashableKey { kind: &'static str },
    /// Index or slice endpoint outside `[0, len]`
    OutOfRange {
        op: &'static str,
        index: i64,
        len: usize,
    },
    /// pop/peek on an empty Deque or Heap
    EmptyContainer {
        op: &'static str,
        container: &'static str,
    },
    /// Record field access by absent name
    FieldNotFound { field: String },
    /// Division or modulo by zero, and other numeric domain failures
    ArithmeticError { op: &'static str, message: String },
    /// Malformed regex pattern (message comes from the regex engine)
    PatternError { pattern: String, message: String },
    /// Malformed JSON text, or a value with no JSON mapping
    FormatError { message: String },
}

impl RuntimeError {
    pub fn type_mismatch(op: &'static str, expected: &'static str, found: &'static str) -> Self {
        RuntimeError::TypeMismatch {
            op,
            expected,
            found,
        }
    }

    pub fn out_of_range(op: &'static str, index: i64, len: usize) -> Self {
        RuntimeError::OutOfRange { op, index, len }
    }

    pub fn arithmetic(op: &'static str, message: impl Into<String>) -> Self {
        RuntimeError::ArithmeticError {
            op,
            message: message.into(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        RuntimeError::FormatError {
            message: message.into(),
        }
    }

    /// The taxonomy category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            RuntimeError::UnhashableKey { .. } => ErrorKind::UnhashableKey,
            RuntimeError::OutOfRange { .. } => ErrorKind::OutOfRange,
            RuntimeError::EmptyContainer { .. } => ErrorKind::EmptyContainer,
            RuntimeError::FieldNotFound { .. } => ErrorKind::FieldNotFound,
            RuntimeError::ArithmeticError { .. } => ErrorKind::ArithmeticError,
            RuntimeError::PatternError { .. } => ErrorKind::PatternError,
            RuntimeError::FormatError { .. } => ErrorKind::FormatError,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::TypeMismatch {
                op,
                expected,
                found,
            } => write!(f, "{}: expected {}, got {}", op, expected, found),
            RuntimeError::UnhashableKey { kind } => write!(f, "unhashable type: '{}'", kind),
            RuntimeError::OutOfRange { op, index, len } => {
                write!(f, "{}: index {} out of range for length {}", op, index, len)
            }
            RuntimeError::EmptyContainer { op, container } => {
                write!(f, "{}: {} is empty", op, container)
            }
            RuntimeError::FieldNotFound { field } => write!(f, "record has no field '{}'", field),
            RuntimeError::ArithmeticError { op, message } => write!(f, "{}: {}", op, message),
            RuntimeError::PatternError { pattern, message } => {
                write!(f, "invalid regex '{}': {}", pattern, message)
            }
            RuntimeError::FormatError { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for RuntimeError {}
