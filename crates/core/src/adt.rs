//! Algebraic data type encoding
//!
//! Every non-primitive data constructor is described by a static [`Ctor`].
//! [`construct`] allocates one `Arc`-shared [`DataValue`] tagged with that
//! descriptor; [`downcast`] checks the tag before exposing any field, so a
//! value built by `Nothing` can never be read as a `Just`.
//!
//! Generated code usually goes one level up and implements [`Variant`] for a
//! Rust struct per constructor, which gives typed construction and
//! extraction through [`construct_variant`] / [`downcast_variant`].
//!
//! # Examples
//!
//! ```
//! use curio_core::{Ctor, Value, construct, downcast, RuntimeError};
//!
//! const JUST: Ctor = Ctor::new("Maybe", "Just", 1, 1);
//! const NOTHING: Ctor = Ctor::new("Maybe", "Nothing", 0, 0);
//!
//! let v = construct(&JUST, vec![Value::from(5)]).unwrap();
//! assert_eq!(downcast(&v, &JUST).unwrap().field_as::<i64>(0), Ok(5));
//! assert!(matches!(downcast(&v, &NOTHING), Err(RuntimeError::WrongVariant { .. })));
//! ```
//!
//! Values are immutable: a data value keeps its constructor and fields for
//! its whole lifetime, and reference counts always reach zero because no
//! operation can make a value point at itself.

use crate::error::{Result, RuntimeError};
use crate::value::{FromValue, Value};
use std::sync::Arc;

/// Static description of one data constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ctor {
    /// Name of the data type the constructor belongs to
    pub data_type: &'static str,
    /// Constructor name
    pub name: &'static str,
    /// Position of the constructor within its data type
    pub tag: u32,
    /// Number of fields
    pub arity: usize,
}

impl Ctor {
    pub const fn new(data_type: &'static str, name: &'static str, tag: u32, arity: usize) -> Self {
        Self {
            data_type,
            name,
            tag,
            arity,
        }
    }
}

/// A value built by a data constructor
#[derive(Debug, Clone, PartialEq)]
pub struct DataValue {
    ctor: &'static Ctor,
    fields: Box<[Value]>,
}

impl DataValue {
    pub fn ctor(&self) -> &'static Ctor {
        self.ctor
    }

    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Result<&Value> {
        self.fields
            .get(index)
            .ok_or(RuntimeError::FieldOutOfBounds {
                ctor: self.ctor.name,
                index,
                arity: self.fields.len(),
            })
    }

    /// Field `index` extracted as `T`
    pub fn field_as<T: FromValue>(&self, index: usize) -> Result<T> {
        T::from_value(self.field(index)?)
    }

    /// Is this value tagged with `ctor`?
    pub fn is(&self, ctor: &Ctor) -> bool {
        self.ctor == ctor
    }
}

/// Build a data value with `ctor` from its complete field list
pub fn construct(ctor: &'static Ctor, fields: Vec<Value>) -> Result<Value> {
    if fields.len() != ctor.arity {
        return Err(RuntimeError::ArityMismatch {
            ctor: ctor.name,
            expected: ctor.arity,
            found: fields.len(),
        });
    }
    tracing::trace!(data_type = ctor.data_type, ctor = ctor.name, "construct");
    Ok(Value::Data(Arc::new(DataValue {
        ctor,
        fields: fields.into_boxed_slice(),
    })))
}

/// Check that `value` was built by `ctor` and expose its fields
pub fn downcast<'a>(value: &'a Value, ctor: &Ctor) -> Result<&'a DataValue> {
    match value {
        Value::Data(data) if data.is(ctor) => Ok(&**data),
        Value::Data(data) => {
            tracing::debug!(expected = ctor.name, found = data.ctor.name, "downcast mismatch");
            Err(RuntimeError::WrongVariant {
                expected: ctor.name,
                found: data.ctor.name,
            })
        }
        other => Err(RuntimeError::NotData {
            expected: ctor.name,
            found: other.kind(),
        }),
    }
}

/// A Rust type standing for one data constructor
///
/// `from_fields` is only called after the tag has been checked, with exactly
/// `CTOR.arity` fields.
pub trait Variant: Sized {
    const CTOR: &'static Ctor;

    fn into_fields(self) -> Vec<Value>;

    fn from_fields(data: &DataValue) -> Result<Self>;
}

pub fn construct_variant<V: Variant>(variant: V) -> Result<Value> {
    construct(V::CTOR, variant.into_fields())
}

pub fn downcast_variant<V: Variant>(value: &Value) -> Result<V> {
    V::from_fields(downcast(value, V::CTOR)?)
}
