//! Foreign export table
//!
//! Generated code resolves prelude primitives by their foreign-import name.
//! Every entry is a curried function [`Value`] stored in an [`AnyBox`], so
//! binary primitives can be applied one argument at a time.
//!
//! ```
//! use curio_core::Value;
//!
//! let exports = curio_prelude::foreign_exports().unwrap();
//! let add = curio_prelude::lookup(&exports, "intAdd").unwrap();
//! let inc = add.apply(Value::from(1)).unwrap();
//! assert_eq!(inc.apply(Value::from(41)), Ok(Value::Int(42)));
//! ```

use crate::arithmetic::{
    int_add, int_div, int_mod, int_mul, int_sub, num_add, num_div, num_mul, num_sub,
};
use crate::array::{array_bind, array_map, array_show, concat_array};
use crate::compare::{ref_eq, unsafe_compare};
use crate::logic::{bool_and, bool_not, bool_or};
use crate::show::{concat_string, show_char, show_int, show_number, show_string};
use curio_core::{
    AnyBox, AnyMap, FromValue, Func, List, Result, Value, curry, curry1, curry2,
};

fn export(f: Func) -> AnyBox {
    AnyBox::new(Value::Fn(f))
}

/// Build the table of all prelude primitives
pub fn foreign_exports() -> Result<AnyMap> {
    let unsafe_compare_impl = curry(2, |args| unsafe_compare(&args[0], &args[1]))?;
    let array_map_impl = curry(2, |args| {
        let f = Func::from_value(&args[0])?;
        let xs = List::<Value>::from_value(&args[1])?;
        array_map(&f, &xs).map(Value::from)
    })?;
    let array_bind_impl = curry(2, |args| {
        let xs = List::<Value>::from_value(&args[0])?;
        let f = Func::from_value(&args[1])?;
        array_bind(&xs, &f).map(Value::from)
    })?;
    let array_show_impl = curry(2, |args| {
        let show = Func::from_value(&args[0])?;
        let xs = List::<Value>::from_value(&args[1])?;
        array_show(&show, &xs).map(Value::from)
    })?;

    let exports = AnyMap::from_pairs(vec![
        ("showStringImpl", export(curry1(show_string))),
        ("showNumberImpl", export(curry1(show_number))),
        ("showIntImpl", export(curry1(show_int))),
        ("showCharImpl", export(curry1(show_char))),
        ("numAdd", export(curry2(num_add))),
        ("numSub", export(curry2(num_sub))),
        ("numMul", export(curry2(num_mul))),
        ("numDiv", export(curry2(num_div))),
        ("intAdd", export(curry2(int_add))),
        ("intSub", export(curry2(int_sub))),
        ("intMul", export(curry2(int_mul))),
        ("intDiv", export(curry2(int_div))),
        ("intMod", export(curry2(int_mod))),
        ("concatString", export(curry2(concat_string))),
        ("refEq", export(curry2(ref_eq))),
        ("boolAnd", export(curry2(bool_and))),
        ("boolOr", export(curry2(bool_or))),
        ("boolNot", export(curry1(bool_not))),
        ("unsafeCompareImpl", export(unsafe_compare_impl)),
        ("concatArray", export(curry2(concat_array))),
        ("arrayMap", export(array_map_impl)),
        ("arrayBind", export(array_bind_impl)),
        ("arrayShow", export(array_show_impl)),
    ])?;
    tracing::debug!(count = exports.len(), "prelude exports built");
    Ok(exports)
}

/// Fetch a primitive from an export table
pub fn lookup(exports: &AnyMap, name: &str) -> Result<Value> {
    exports.get_as::<Value>(name)
}
