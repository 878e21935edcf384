//! Calling prelude primitives the way generated code does: by name, through
//! the export table, one argument at a time

use curio_core::{List, RuntimeError, Value, downcast};
use curio_prelude::compare::{GT, LT};
use curio_prelude::{foreign_exports, lookup};

fn call2(name: &str, x: Value, y: Value) -> curio_core::Result<Value> {
    let exports = foreign_exports()?;
    lookup(&exports, name)?.apply(x)?.apply(y)
}

#[test]
fn test_int_primitives_curried() {
    let exports = foreign_exports().unwrap();
    let sub = lookup(&exports, "intSub").unwrap();
    let from_ten = sub.apply(Value::from(10)).unwrap();
    assert_eq!(from_ten.apply(Value::from(3)), Ok(Value::Int(7)));
    assert_eq!(from_ten.apply(Value::from(4)), Ok(Value::Int(6)));

    assert_eq!(
        call2("intDiv", Value::from(-7), Value::from(2)),
        Ok(Value::Int(-4))
    );
    assert_eq!(call2("intMod", Value::from(5), Value::from(0)), Ok(Value::Int(0)));
}

#[test]
fn test_number_and_string_primitives() {
    assert_eq!(
        call2("numMul", Value::from(1.5), Value::from(4.0)),
        Ok(Value::Number(6.0))
    );
    assert_eq!(
        call2("concatString", Value::from("foo"), Value::from("bar")),
        Ok(Value::from("foobar"))
    );

    let exports = foreign_exports().unwrap();
    let show = lookup(&exports, "showNumberImpl").unwrap();
    assert_eq!(show.apply(Value::from(2.0)), Ok(Value::from("2.0")));
}

#[test]
fn test_wrong_argument_type() {
    assert!(matches!(
        call2("intAdd", Value::from(1), Value::from("one")),
        Err(RuntimeError::TypeMismatch {
            expected: "Int",
            found: "String"
        })
    ));
}

#[test]
fn test_boolean_primitives() {
    assert_eq!(
        call2("boolAnd", Value::from(true), Value::from(false)),
        Ok(Value::Bool(false))
    );
    let exports = foreign_exports().unwrap();
    let not = lookup(&exports, "boolNot").unwrap();
    assert_eq!(not.apply(Value::from(false)), Ok(Value::Bool(true)));
}

#[test]
fn test_compare_through_exports() {
    let lt = call2("unsafeCompareImpl", Value::from(1), Value::from(2)).unwrap();
    assert!(downcast(&lt, &LT).is_ok());
    let gt = call2("unsafeCompareImpl", Value::from(3.5), Value::from(2.0)).unwrap();
    assert!(downcast(&gt, &GT).is_ok());

    let xs = Value::from(List::singleton(Value::from(1)));
    assert_eq!(
        call2("unsafeCompareImpl", xs.clone(), xs),
        Err(RuntimeError::Unimplemented("unsafeCompare"))
    );
    assert_eq!(
        call2("unsafeCompareImpl", Value::from(f64::NAN), Value::from(0.0)),
        Err(RuntimeError::Unordered("Number"))
    );
}

#[test]
fn test_concat_array_and_placeholders() {
    let xs: List<Value> = vec![Value::from(1), Value::from(2)].into();
    let ys: List<Value> = vec![Value::from(3)].into();
    let joined = call2("concatArray", Value::from(xs), Value::from(ys)).unwrap();
    assert_eq!(joined.to_string(), "[1, 2, 3]");

    let exports = foreign_exports().unwrap();
    let not = lookup(&exports, "boolNot").unwrap();
    assert_eq!(
        call2("arrayMap", not, joined),
        Err(RuntimeError::Unimplemented("arrayMap"))
    );
}

#[test]
fn test_ref_eq_identity() {
    let xs = Value::from(List::singleton(Value::from(1)));
    let same = xs.clone();
    let copy = Value::from(List::singleton(Value::from(1)));
    assert_eq!(call2("refEq", xs.clone(), same), Ok(Value::Bool(true)));
    assert_eq!(call2("refEq", xs, copy), Ok(Value::Bool(false)));
}
