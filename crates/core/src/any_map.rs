//! Tagged-value map: string keys to [`AnyBox`] payloads
//!
//! Built once, fully populated, at a single call site and read-only from
//! then on. It carries heterogeneous named arguments (record fields, foreign
//! export tables) across a boundary that only understands one concrete type.
//!
//! # Examples
//!
//! ```
//! use curio_core::{any_map, RuntimeError};
//!
//! let args = any_map! { "name" => "Alice".to_string(), "age" => 30i64 }.unwrap();
//! assert_eq!(args.get_as::<i64>("age"), Ok(30));
//! assert!(matches!(args.get("email"), Err(RuntimeError::MissingKey(_))));
//! ```

use crate::any::AnyBox;
use crate::error::{Result, RuntimeError};
use std::any::Any;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct AnyMap {
    entries: HashMap<String, AnyBox>,
}

impl AnyMap {
    /// Build a map from its complete set of entries
    ///
    /// Fails with [`RuntimeError::DuplicateKey`] if a key repeats.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AnyBox)>,
    {
        let pairs = pairs.into_iter();
        let mut entries = HashMap::with_capacity(pairs.size_hint().0);
        for (key, value) in pairs {
            let key = key.into();
            if entries.contains_key(&key) {
                return Err(RuntimeError::DuplicateKey(key));
            }
            entries.insert(key, value);
        }
        Ok(Self { entries })
    }

    /// Look up the box stored under `key`
    pub fn get(&self, key: &str) -> Result<&AnyBox> {
        self.entries
            .get(key)
            .ok_or_else(|| RuntimeError::MissingKey(key.to_string()))
    }

    /// Look up `key` and unbox it as `T`
    pub fn get_as<T: Any + Clone>(&self, key: &str) -> Result<T> {
        self.get(key)?.unbox::<T>()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in unspecified order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnyBox)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Build an [`AnyMap`] literal; evaluates to `Result<AnyMap>`
#[macro_export]
macro_rules! any_map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut pairs: ::std::vec::Vec<(::std::string::String, $crate::AnyBox)> =
            ::std::vec::Vec::new();
        $(pairs.push((::std::string::String::from($key), $crate::AnyBox::new($value)));)*
        $crate::AnyMap::from_pairs(pairs)
    }};
}
