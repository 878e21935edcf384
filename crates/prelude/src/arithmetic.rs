//! Integer and Number arithmetic
//!
//! # Overflow Behavior
//!
//! Integer operations use **wrapping semantics**:
//! - `int_add`: i64::MAX + 1 wraps to i64::MIN
//! - `int_mul`: overflow wraps around
//!
//! # Division
//!
//! `int_div` and `int_mod` are Euclidean: the remainder is never negative.
//! Dividing by zero yields 0 for both rather than faulting.
//! Number division follows IEEE 754 (`1.0 / 0.0` is infinity).

pub fn num_add(x: f64, y: f64) -> f64 {
    x + y
}

pub fn num_sub(x: f64, y: f64) -> f64 {
    x - y
}

pub fn num_mul(x: f64, y: f64) -> f64 {
    x * y
}

pub fn num_div(x: f64, y: f64) -> f64 {
    x / y
}

pub fn int_add(x: i64, y: i64) -> i64 {
    x.wrapping_add(y)
}

pub fn int_sub(x: i64, y: i64) -> i64 {
    x.wrapping_sub(y)
}

pub fn int_mul(x: i64, y: i64) -> i64 {
    x.wrapping_mul(y)
}

pub fn int_div(x: i64, y: i64) -> i64 {
    if y == 0 { 0 } else { x.wrapping_div_euclid(y) }
}

pub fn int_mod(x: i64, y: i64) -> i64 {
    if y == 0 { 0 } else { x.wrapping_rem_euclid(y) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_wrapping() {
        assert_eq!(int_add(i64::MAX, 1), i64::MIN);
        assert_eq!(int_sub(i64::MIN, 1), i64::MAX);
        assert_eq!(int_mul(i64::MAX, 2), -2);
    }

    #[test]
    fn test_int_div_mod_euclidean() {
        assert_eq!(int_div(7, 2), 3);
        assert_eq!(int_div(-7, 2), -4);
        assert_eq!(int_div(7, -2), -3);
        assert_eq!(int_mod(-7, 2), 1);
        assert_eq!(int_mod(7, -2), 1);
        assert_eq!(int_div(i64::MIN, -1), i64::MIN);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(int_div(5, 0), 0);
        assert_eq!(int_mod(5, 0), 0);
        assert_eq!(num_div(1.0, 0.0), f64::INFINITY);
        assert!(num_div(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_number_ops() {
        assert_eq!(num_add(1.5, 2.0), 3.5);
        assert_eq!(num_sub(1.5, 2.0), -0.5);
        assert_eq!(num_mul(1.5, 2.0), 3.0);
    }
}
