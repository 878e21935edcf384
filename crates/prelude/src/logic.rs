//! Boolean operations

pub fn bool_and(x: bool, y: bool) -> bool {
    x && y
}

pub fn bool_or(x: bool, y: bool) -> bool {
    x || y
}

pub fn bool_not(x: bool) -> bool {
    !x
}
