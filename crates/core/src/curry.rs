//! Currying and partial application
//!
//! Host functions take exactly one argument. A [`Func`] is either such a
//! native unary function, or a curried operation of fixed arity N together
//! with the arguments bound so far.
//!
//! Applying a curried `Func` never mutates it: each application captures the
//! new arguments by value into a fresh `Func`. Once N arguments are bound the
//! underlying operation runs exactly once with all of them.
//!
//! ```text
//! curry(3, f)            bound = []        awaiting 3
//!   .call(1)             bound = [1]       awaiting 2
//!   .call_many([2, 3])   f(&[1, 2, 3])     result
//! ```
//!
//! Supplying more arguments than remain is outside the calling contract. The
//! engine does not reject it: the surplus is applied to the result, which
//! fails with [`RuntimeError::NotAFunction`] unless the result is itself a
//! function.
//!
//! # Typed helpers
//!
//! [`curry1`] through [`curry4`] wrap plain Rust functions, converting
//! arguments with [`FromValue`] and results with `Into<Value>`. Four is the
//! largest arity the typed helpers cover; [`curry`] itself works on a slice
//! of values and takes any arity.

use crate::adt::{Ctor, construct};
use crate::error::{Result, RuntimeError};
use crate::value::{FromValue, Value};
use std::fmt;
use std::sync::Arc;

type NativeFn = dyn Fn(Value) -> Result<Value> + Send + Sync;
type Operation = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// A unary function value
#[derive(Clone)]
pub struct Func {
    inner: Arc<FuncInner>,
}

enum FuncInner {
    Native(Box<NativeFn>),
    Partial {
        op: Arc<Operation>,
        arity: usize,
        bound: Vec<Value>,
    },
}

impl Func {
    /// Wrap a native unary function
    pub fn native<F>(f: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Func {
            inner: Arc::new(FuncInner::Native(Box::new(f))),
        }
    }

    // Callers guarantee arity >= 1
    fn partial(op: Arc<Operation>, arity: usize, bound: Vec<Value>) -> Self {
        Func {
            inner: Arc::new(FuncInner::Partial { op, arity, bound }),
        }
    }

    /// Number of arguments still needed before the operation runs
    pub fn remaining_arity(&self) -> usize {
        match &*self.inner {
            FuncInner::Native(_) => 1,
            FuncInner::Partial { arity, bound, .. } => arity - bound.len(),
        }
    }

    /// Arguments captured so far
    pub fn bound_args(&self) -> &[Value] {
        match &*self.inner {
            FuncInner::Native(_) => &[],
            FuncInner::Partial { bound, .. } => bound,
        }
    }

    pub fn call(&self, arg: Value) -> Result<Value> {
        self.call_many(vec![arg])
    }

    /// Supply several arguments at once
    ///
    /// Binding `j` then `N - j` arguments is indistinguishable from binding
    /// all `N` in one call.
    pub fn call_many(&self, args: Vec<Value>) -> Result<Value> {
        if args.is_empty() {
            return Ok(Value::Fn(self.clone()));
        }
        match &*self.inner {
            FuncInner::Native(f) => {
                let mut args = args.into_iter();
                let Some(first) = args.next() else {
                    return Ok(Value::Fn(self.clone()));
                };
                let rest: Vec<Value> = args.collect();
                f(first)?.apply_many(rest)
            }
            FuncInner::Partial { op, arity, bound } => {
                let mut args = args;
                let missing = arity - bound.len();
                let surplus = if args.len() > missing {
                    args.split_off(missing)
                } else {
                    Vec::new()
                };

                let mut all = Vec::with_capacity(bound.len() + args.len());
                all.extend(bound.iter().cloned());
                all.extend(args);

                if all.len() < *arity {
                    return Ok(Value::Fn(Func::partial(Arc::clone(op), *arity, all)));
                }

                tracing::trace!(arity = *arity, "curried call saturated");
                (**op)(&all)?.apply_many(surplus)
            }
        }
    }

    /// Do both handles refer to the same function value?
    pub fn ptr_eq(&self, other: &Func) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.inner {
            FuncInner::Native(_) => write!(f, "Func(native)"),
            FuncInner::Partial { arity, bound, .. } => f
                .debug_struct("Func")
                .field("arity", arity)
                .field("bound", bound)
                .finish(),
        }
    }
}

fn curried<F>(arity: usize, op: F) -> Func
where
    F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
{
    Func::partial(Arc::new(op), arity, Vec::new())
}

/// Curry an operation taking exactly `arity` arguments
///
/// `op` always receives a slice of length `arity`.
pub fn curry<F>(arity: usize, op: F) -> Result<Func>
where
    F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
{
    if arity == 0 {
        return Err(RuntimeError::InvalidArity);
    }
    Ok(curried(arity, op))
}

/// Curried constructor for `ctor`
///
/// Nullary constructors have nothing to curry and yield the value itself.
pub fn constructor(ctor: &'static Ctor) -> Result<Value> {
    if ctor.arity == 0 {
        return construct(ctor, Vec::new());
    }
    Ok(Value::Fn(curried(ctor.arity, move |fields| {
        construct(ctor, fields.to_vec())
    })))
}

/// Curried constructor for `ctor` with its first fields already supplied
pub fn constructor_with(ctor: &'static Ctor, args: Vec<Value>) -> Result<Value> {
    constructor(ctor)?.apply_many(args)
}

pub fn curry1<A, R, F>(f: F) -> Func
where
    A: FromValue,
    R: Into<Value>,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Func::native(move |a| Ok(f(A::from_value(&a)?).into()))
}

pub fn curry2<A, B, R, F>(f: F) -> Func
where
    A: FromValue,
    B: FromValue,
    R: Into<Value>,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    curried(2, move |args| {
        Ok(f(A::from_value(&args[0])?, B::from_value(&args[1])?).into())
    })
}

pub fn curry3<A, B, C, R, F>(f: F) -> Func
where
    A: FromValue,
    B: FromValue,
    C: FromValue,
    R: Into<Value>,
    F: Fn(A, B, C) -> R + Send + Sync + 'static,
{
    curried(3, move |args| {
        Ok(f(
            A::from_value(&args[0])?,
            B::from_value(&args[1])?,
            C::from_value(&args[2])?,
        )
        .into())
    })
}

pub fn curry4<A, B, C, D, R, F>(f: F) -> Func
where
    A: FromValue,
    B: FromValue,
    C: FromValue,
    D: FromValue,
    R: Into<Value>,
    F: Fn(A, B, C, D) -> R + Send + Sync + 'static,
{
    curried(4, move |args| {
        Ok(f(
            A::from_value(&args[0])?,
            B::from_value(&args[1])?,
            C::from_value(&args[2])?,
            D::from_value(&args[3])?,
        )
        .into())
    })
}
