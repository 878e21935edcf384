//! Equality and ordering hooks
//!
//! `ref_eq` compares composite values by identity and primitives by value.
//! `unsafe_compare` answers with one of the `Ordering` data constructors for
//! host primitives. NaN is reported as `RuntimeError::Unordered`. There is no
//! ordering for composite values yet, and asking for one is reported as
//! `RuntimeError::Unimplemented`.

use curio_core::{Ctor, Result, Value, construct};
use std::cmp::Ordering;

pub const LT: Ctor = Ctor::new("Ordering", "LT", 0, 0);
pub const EQ: Ctor = Ctor::new("Ordering", "EQ", 1, 0);
pub const GT: Ctor = Ctor::new("Ordering", "GT", 2, 0);

pub fn ref_eq(x: Value, y: Value) -> bool {
    x.ref_eq(&y)
}

pub fn unsafe_compare(x: &Value, y: &Value) -> Result<Value> {
    let ctor = match x.unsafe_compare(y)? {
        Ordering::Less => &LT,
        Ordering::Equal => &EQ,
        Ordering::Greater => &GT,
    };
    construct(ctor, Vec::new())
}
