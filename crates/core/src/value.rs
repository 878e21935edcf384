//! Value: what generated code talks about
//!
//! Host primitives (Int, Number, Bool, Char) are carried unboxed. Composite
//! data lives behind an `Arc`, so cloning any `Value` is O(1) and composite
//! payloads are shared rather than copied.
//!
//! # Equality
//!
//! `PartialEq` is structural for primitives, strings, arrays and data values
//! (same constructor, equal fields), and never short-circuits on identity, so
//! a structure holding NaN is unequal to itself exactly as it is unequal to a
//! copy. Functions, records and foreign boxes
//! carry no comparable structure and compare by identity. [`Value::ref_eq`]
//! is the identity-based variant used by the prelude's `refEq`.
//!
//! # Ordering
//!
//! [`Value::unsafe_compare`] orders primitives with the host comparison.
//! NaN takes part in no ordering and reports [`RuntimeError::Unordered`].
//! Ordering composite values has no defined semantics yet and reports
//! [`RuntimeError::Unimplemented`].

use crate::adt::DataValue;
use crate::any::AnyBox;
use crate::any_map::AnyMap;
use crate::config;
use crate::curry::Func;
use crate::error::{Result, RuntimeError};
use crate::list::List;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// IEEE 754 double
    Number(f64),

    Bool(bool),

    Char(char),

    /// Immutable shared string
    String(Arc<str>),

    /// Persistent list of values
    Array(List<Value>),

    /// Named fields of heterogeneous type
    Record(Arc<AnyMap>),

    /// Value built by a data constructor
    Data(Arc<DataValue>),

    /// Unary function, possibly a partially applied curried operation
    Fn(Func),

    /// Host value of erased type
    Foreign(AnyBox),
}

impl Value {
    /// Name of this value's runtime kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Number(_) => "Number",
            Value::Bool(_) => "Bool",
            Value::Char(_) => "Char",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Record(_) => "Record",
            Value::Data(_) => "Data",
            Value::Fn(_) => "Function",
            Value::Foreign(_) => "Foreign",
        }
    }

    pub fn as_data(&self) -> Option<&Arc<DataValue>> {
        match self {
            Value::Data(data) => Some(data),
            _ => None,
        }
    }

    /// Apply this value to one argument
    pub fn apply(&self, arg: Value) -> Result<Value> {
        match self {
            Value::Fn(f) => f.call(arg),
            other => Err(RuntimeError::NotAFunction(other.kind())),
        }
    }

    /// Apply this value to several arguments in order
    pub fn apply_many(&self, args: Vec<Value>) -> Result<Value> {
        if args.is_empty() {
            return Ok(self.clone());
        }
        match self {
            Value::Fn(f) => f.call_many(args),
            other => Err(RuntimeError::NotAFunction(other.kind())),
        }
    }

    /// Identity equality: composites compare by reference, primitives by value
    pub fn ref_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Record(a), Value::Record(b)) => Arc::ptr_eq(a, b),
            (Value::Data(a), Value::Data(b)) => Arc::ptr_eq(a, b),
            (Value::Fn(a), Value::Fn(b)) => a.ptr_eq(b),
            (Value::Foreign(a), Value::Foreign(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Host ordering for primitives
    ///
    /// NaN is unordered. Composite values have no ordering yet.
    pub fn unsafe_compare(&self, other: &Value) -> Result<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b).ok_or_else(|| {
                tracing::debug!(left = a, right = b, "unsafeCompare on NaN");
                RuntimeError::Unordered("Number")
            }),
            (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
            (Value::Char(a), Value::Char(b)) => Ok(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
            (a, b) if a.kind() != b.kind() => Err(RuntimeError::TypeMismatch {
                expected: a.kind(),
                found: b.kind(),
            }),
            _ => {
                tracing::warn!(kind = self.kind(), "unsafeCompare has no ordering for this kind");
                Err(RuntimeError::Unimplemented("unsafeCompare"))
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Data(a), Value::Data(b)) => a.ctor() == b.ctor() && a.fields() == b.fields(),
            _ => self.ref_eq(other),
        }
    }
}

/// Checked extraction of a Rust value from a [`Value`]
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

fn mismatch(expected: &'static str, found: &Value) -> RuntimeError {
    tracing::debug!(expected, found = found.kind(), "value extraction mismatch");
    RuntimeError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int(n) => Ok(*n),
            other => Err(mismatch("Int", other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => Ok(*n),
            other => Err(mismatch("Number", other)),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("Bool", other)),
        }
    }
}

impl FromValue for char {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Char(c) => Ok(*c),
            other => Err(mismatch("Char", other)),
        }
    }
}

impl FromValue for Arc<str> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Arc::clone(s)),
            other => Err(mismatch("String", other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.to_string()),
            other => Err(mismatch("String", other)),
        }
    }
}

impl FromValue for List<Value> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(items.clone()),
            other => Err(mismatch("Array", other)),
        }
    }
}

impl FromValue for Arc<AnyMap> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Record(fields) => Ok(Arc::clone(fields)),
            other => Err(mismatch("Record", other)),
        }
    }
}

impl FromValue for Arc<DataValue> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Data(data) => Ok(Arc::clone(data)),
            other => Err(mismatch("Data", other)),
        }
    }
}

impl FromValue for Func {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Fn(f) => Ok(f.clone()),
            other => Err(mismatch("Function", other)),
        }
    }
}

impl FromValue for AnyBox {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Foreign(b) => Ok(b.clone()),
            other => Err(mismatch("Foreign", other)),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Value::String(s)
    }
}

impl From<List<Value>> for Value {
    fn from(items: List<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<AnyMap> for Value {
    fn from(fields: AnyMap) -> Self {
        Value::Record(Arc::new(fields))
    }
}

impl From<Func> for Value {
    fn from(f: Func) -> Self {
        Value::Fn(f)
    }
}

impl From<AnyBox> for Value {
    fn from(b: AnyBox) -> Self {
        Value::Foreign(b)
    }
}

/// Render a Number the way `show` does: integral values keep a `.0`
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "{:?}", c),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Array(items) => {
                let limit = config::current().debug_list_limit;
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if i == limit {
                        write!(f, "...")?;
                        break;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Record(fields) => {
                let mut keys: Vec<&str> = fields.keys().collect();
                keys.sort_unstable();
                write!(f, "{{ {} }}", keys.join(", "))
            }
            Value::Data(data) => {
                write!(f, "{}", data.ctor().name)?;
                for field in data.fields() {
                    match field {
                        Value::Data(inner) if !inner.fields().is_empty() => {
                            write!(f, " ({})", field)?
                        }
                        _ => write!(f, " {}", field)?,
                    }
                }
                Ok(())
            }
            Value::Fn(_) => write!(f, "<function>"),
            Value::Foreign(b) => write!(f, "<foreign {}>", b.type_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adt::{Ctor, construct};

    const PAIR: Ctor = Ctor::new("Tuple", "Tuple", 0, 2);
    const NOTHING: Ctor = Ctor::new("Maybe", "Nothing", 0, 0);

    #[test]
    fn test_primitives_are_unboxed() {
        assert!(matches!(Value::from(5), Value::Int(5)));
        assert!(matches!(Value::from(true), Value::Bool(true)));
        assert!(matches!(Value::from(1.5), Value::Number(n) if n == 1.5));
        assert_eq!(i64::from_value(&Value::from(5)), Ok(5));
    }

    #[test]
    fn test_from_value_mismatch() {
        assert_eq!(
            bool::from_value(&Value::from(1)),
            Err(RuntimeError::TypeMismatch {
                expected: "Bool",
                found: "Int"
            })
        );
    }

    #[test]
    fn test_structural_vs_ref_equality() {
        let a = construct(&PAIR, vec![Value::from(1), Value::from("x")]).unwrap();
        let b = construct(&PAIR, vec![Value::from(1), Value::from("x")]).unwrap();
        assert_eq!(a, b);
        assert!(!a.ref_eq(&b));
        assert!(a.ref_eq(&a.clone()));
        assert!(Value::from(3).ref_eq(&Value::from(3)));
    }

    #[test]
    fn test_compare_primitives() {
        assert_eq!(
            Value::from(1).unsafe_compare(&Value::from(2)),
            Ok(Ordering::Less)
        );
        assert_eq!(
            Value::from("b").unsafe_compare(&Value::from("a")),
            Ok(Ordering::Greater)
        );
    }

    #[test]
    fn test_compare_composites_unimplemented() {
        let a = construct(&NOTHING, vec![]).unwrap();
        assert_eq!(
            a.unsafe_compare(&a),
            Err(RuntimeError::Unimplemented("unsafeCompare"))
        );
        assert!(matches!(
            Value::from(1).unsafe_compare(&Value::from(true)),
            Err(RuntimeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_compare_nan_is_unordered() {
        let nan = Value::from(f64::NAN);
        assert_eq!(
            nan.unsafe_compare(&Value::from(1.0)),
            Err(RuntimeError::Unordered("Number"))
        );
        assert_eq!(
            Value::from(1.0).unsafe_compare(&nan),
            Err(RuntimeError::Unordered("Number"))
        );
    }

    #[test]
    fn test_nan_inside_composites_is_never_equal() {
        let items: List<Value> = vec![Value::from(f64::NAN)].into();
        let array = Value::from(items.clone());
        let copy = Value::from(List::from(vec![Value::from(f64::NAN)]));
        assert_ne!(array, array.clone());
        assert_ne!(array, copy);
        assert_ne!(items, items.clone());

        let pair = construct(&PAIR, vec![Value::from(f64::NAN), Value::from(1)]).unwrap();
        assert_ne!(pair, pair.clone());
        assert!(pair.ref_eq(&pair.clone()));
    }

    #[test]
    fn test_apply_non_function() {
        assert_eq!(
            Value::from(1).apply(Value::from(2)),
            Err(RuntimeError::NotAFunction("Int"))
        );
    }

    #[test]
    fn test_display() {
        let pair = construct(&PAIR, vec![Value::from(1), Value::from(2.0)]).unwrap();
        assert_eq!(pair.to_string(), "Tuple 1 2.0");
        let nested = construct(&PAIR, vec![pair, Value::from('c')]).unwrap();
        assert_eq!(nested.to_string(), "Tuple (Tuple 1 2.0) 'c'");
        let items: List<Value> = vec![Value::from(1), Value::from(2)].into();
        assert_eq!(Value::from(items).to_string(), "[1, 2]");
    }
}
