//! Curio Prelude: host primitives for generated code
//!
//! Thin wrappers over host numeric, string and boolean operations, written
//! as plain Rust functions and exported as curried [`curio_core::Value`]
//! functions through [`foreign_exports`].
//!
//! # Modules
//!
//! - `arithmetic`: Int and Number arithmetic
//! - `show`: `show` for primitives, string concatenation
//! - `logic`: boolean operations
//! - `compare`: `refEq` and `unsafeCompare`
//! - `array`: array concatenation and unimplemented placeholders
//! - `exports`: the foreign export table

pub mod arithmetic;
pub mod array;
pub mod compare;
pub mod exports;
pub mod logic;
pub mod show;

pub use exports::{foreign_exports, lookup};
