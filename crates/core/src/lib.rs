//! Curio Core: value and function substrate for generated code
//!
//! Code translated from a curried, pattern-matching source language calls
//! into this crate for everything its host cannot express directly: tagged
//! unions, one-argument-at-a-time application, and a shared immutable list.
//!
//! Key design principles:
//! - Value: host primitives unboxed, composites behind `Arc`
//! - Nothing is mutated after construction, so sharing never needs locks
//! - Every read of erased or tagged data is checked and fails with a
//!   distinguishable [`RuntimeError`]
//!
//! # Modules
//!
//! - `any`: Value Box, a reference-counted container of erased type
//! - `any_map`: string-keyed map of boxes for named heterogeneous arguments
//! - `list`: persistent, structurally shared singly-linked list
//! - `adt`: data constructor descriptors, construct and checked downcast
//! - `value`: the `Value` enum and conversions
//! - `curry`: curried functions and partial application
//! - `config`: environment-driven runtime configuration
//! - `diagnostics`: tracing subscriber installation
//! - `error`: the runtime error type

pub mod adt;
pub mod any;
pub mod any_map;
pub mod config;
pub mod curry;
pub mod diagnostics;
pub mod error;
pub mod list;
pub mod value;

// Re-export key types and functions
pub use adt::{Ctor, DataValue, Variant, construct, construct_variant, downcast, downcast_variant};
pub use any::AnyBox;
pub use any_map::AnyMap;
pub use config::RuntimeConfig;
pub use curry::{Func, constructor, constructor_with, curry, curry1, curry2, curry3, curry4};
pub use diagnostics::{install_tracing, install_tracing_from_env};
pub use error::{Result, RuntimeError};
pub use list::List;
pub use value::{FromValue, Value};
