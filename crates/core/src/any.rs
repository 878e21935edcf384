//! Value Box: a reference-counted container for a value of erased type
//!
//! Used where a function must accept or return a value whose shape is not
//! known statically (foreign host values, heterogeneous argument bundles).
//!
//! The box never mutates after creation. Cloning an `AnyBox` only bumps the
//! reference count. Each box carries its payload's `TypeId`, so reading it at
//! the wrong type is a deterministic [`RuntimeError::TypeMismatch`] rather
//! than a reinterpretation of the bytes.
//!
//! # Aliasing
//!
//! [`AnyBox::from_arc`] stores an existing `Arc<T>` handle directly, while
//! [`AnyBox::new`] allocates fresh shared storage. A box made by
//! `from_arc(h)` reads back exactly like one made by `new(h)`: as `Arc<T>`
//! through [`AnyBox::unbox`], as `T` through `unbox`, and as the very same
//! handle through [`AnyBox::unbox_arc`].

use crate::error::{Result, RuntimeError};
use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

type Payload = Arc<dyn Any + Send + Sync>;

// Rebuilds the `Arc<T>` handle of an aliased box as an owned `Arc<T>` value
type HandleFn = fn(&Payload) -> Option<Box<dyn Any>>;

#[derive(Clone)]
pub struct AnyBox {
    payload: Payload,
    type_name: &'static str,
    handle: Option<HandleFn>,
}

fn rewrap_handle<T: Any + Send + Sync>(payload: &Payload) -> Option<Box<dyn Any>> {
    Arc::clone(payload)
        .downcast::<T>()
        .ok()
        .map(|handle| Box::new(handle) as Box<dyn Any>)
}

impl AnyBox {
    /// Box a value in freshly allocated shared storage
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            payload: Arc::new(value),
            type_name: type_name::<T>(),
            handle: None,
        }
    }

    /// Box a value that already lives behind a shared handle
    ///
    /// Indistinguishable from `AnyBox::new(value)` to readers.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            payload: value,
            type_name: type_name::<Arc<T>>(),
            handle: Some(rewrap_handle::<T>),
        }
    }

    /// Name of the boxed type, for diagnostics only
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn mismatch<T>(&self) -> RuntimeError {
        tracing::debug!(expected = type_name::<T>(), found = self.type_name, "unbox mismatch");
        RuntimeError::TypeMismatch {
            expected: type_name::<T>(),
            found: self.type_name,
        }
    }

    /// Read the payload out as `T` (a clone of the stored value)
    ///
    /// A box holding an `Arc<T>` handle also reads as `T`.
    pub fn unbox<T: Any + Clone>(&self) -> Result<T> {
        if let Some(value) = self.payload.downcast_ref::<T>() {
            return Ok(value.clone());
        }
        if let Some(handle) = self.payload.downcast_ref::<Arc<T>>() {
            return Ok(T::clone(handle));
        }
        if let Some(rebuilt) = self.handle.and_then(|rewrap| rewrap(&self.payload)) {
            if let Ok(value) = rebuilt.downcast::<T>() {
                return Ok(*value);
            }
        }
        Err(self.mismatch::<T>())
    }

    /// Read the payload as a shared handle, without copying it
    pub fn unbox_arc<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        if let Ok(shared) = Arc::clone(&self.payload).downcast::<T>() {
            return Ok(shared);
        }
        self.payload
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or_else(|| self.mismatch::<T>())
    }

    /// Identity comparison: do both boxes share the same storage?
    pub fn ptr_eq(&self, other: &AnyBox) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl fmt::Debug for AnyBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnyBox<{}>", self.type_name)
    }
}

impl From<&str> for AnyBox {
    fn from(s: &str) -> Self {
        AnyBox::new(s.to_string())
    }
}
