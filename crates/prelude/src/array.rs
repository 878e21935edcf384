//! Array primitives over the persistent list
//!
//! Only concatenation is defined. Generic `map`, `bind` and `show` over
//! arrays are placeholders that report `RuntimeError::Unimplemented`, which
//! callers can tell apart from an empty result.

use curio_core::{Func, List, Result, RuntimeError, Value};

pub fn concat_array(xs: List<Value>, ys: List<Value>) -> List<Value> {
    xs.append(&ys)
}

fn unimplemented(name: &'static str) -> RuntimeError {
    tracing::warn!(primitive = name, "array primitive is not implemented");
    RuntimeError::Unimplemented(name)
}

pub fn array_map(_f: &Func, _xs: &List<Value>) -> Result<List<Value>> {
    Err(unimplemented("arrayMap"))
}

pub fn array_bind(_xs: &List<Value>, _f: &Func) -> Result<List<Value>> {
    Err(unimplemented("arrayBind"))
}

pub fn array_show(_show: &Func, _xs: &List<Value>) -> Result<String> {
    Err(unimplemented("arrayShow"))
}
