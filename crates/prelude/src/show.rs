//! `show` for host primitives, and string concatenation

use curio_core::value::format_number;

/// Quoted, escaped string literal
pub fn show_string(s: String) -> String {
    format!("{:?}", s)
}

/// Integral finite numbers keep a trailing `.0`
pub fn show_number(x: f64) -> String {
    format_number(x)
}

pub fn show_int(x: i64) -> String {
    x.to_string()
}

/// Quoted character literal
pub fn show_char(c: char) -> String {
    format!("{:?}", c)
}

pub fn concat_string(x: String, y: String) -> String {
    x + &y
}
