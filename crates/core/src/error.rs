//! Runtime error type
//!
//! Every fallible entry point in the core returns [`Result`]. The variants
//! keep the failure classes apart so that generated code (and tests) can tell
//! a wrong variant from a missing key from an extension point that simply
//! does not exist yet.
//!
//! ```ignore
//! match downcast_variant::<Just>(&value) {
//!     Ok(just) => ...,
//!     Err(RuntimeError::WrongVariant { .. }) => ..., // it was Nothing
//!     Err(other) => return Err(other),
//! }
//! ```

use std::fmt;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Error raised by value, list and function operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A boxed or primitive value was read at the wrong type
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Downcast to a data constructor that did not build this value
    WrongVariant {
        expected: &'static str,
        found: &'static str,
    },
    /// Downcast of a value that is not a composite data value at all
    NotData {
        expected: &'static str,
        found: &'static str,
    },
    /// Lookup of a key absent from a tagged-value map
    MissingKey(String),
    /// The same key appeared twice in a tagged-value map literal
    DuplicateKey(String),
    /// Constructor fed the wrong number of fields
    ArityMismatch {
        ctor: &'static str,
        expected: usize,
        found: usize,
    },
    /// Curried operations need at least one parameter
    InvalidArity,
    /// Application of a value that is not a function
    NotAFunction(&'static str),
    /// Field index past the end of a constructor's fields
    FieldOutOfBounds {
        ctor: &'static str,
        index: usize,
        arity: usize,
    },
    /// Values of this kind have no total order (NaN)
    Unordered(&'static str),
    /// An extension point with no defined semantics yet
    Unimplemented(&'static str),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            }
            RuntimeError::WrongVariant { expected, found } => {
                write!(f, "wrong variant: expected {}, found {}", expected, found)
            }
            RuntimeError::NotData { expected, found } => {
                write!(f, "expected data constructor {}, found {}", expected, found)
            }
            RuntimeError::MissingKey(key) => write!(f, "key not found: {}", key),
            RuntimeError::DuplicateKey(key) => write!(f, "duplicate key: {}", key),
            RuntimeError::ArityMismatch {
                ctor,
                expected,
                found,
            } => write!(
                f,
                "constructor {} takes {} field(s), got {}",
                ctor, expected, found
            ),
            RuntimeError::InvalidArity => {
                write!(f, "curried operation must take at least one argument")
            }
            RuntimeError::NotAFunction(kind) => write!(f, "cannot apply {} as a function", kind),
            RuntimeError::FieldOutOfBounds { ctor, index, arity } => write!(
                f,
                "field {} out of bounds for {} ({} field(s))",
                index, ctor, arity
            ),
            RuntimeError::Unordered(kind) => write!(f, "{} value is not ordered", kind),
            RuntimeError::Unimplemented(name) => write!(f, "not yet implemented: {}", name),
        }
    }
}

impl std::error::Error for RuntimeError {}
