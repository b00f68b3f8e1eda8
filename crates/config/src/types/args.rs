//! Arguments forwarded to default-config factories.
//!
//! Invariants:
//! - Keys are unique; later insertions replace earlier ones.
//! - Iteration order is the key order, so factories see a stable view.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Named arguments passed through `init` to a factory default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactoryArgs {
    values: BTreeMap<String, Value>,
}

impl FactoryArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the argument as a string slice, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Deserializes the argument into `T`.
    ///
    /// Returns `None` if the key is missing or the value has the wrong shape.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FactoryArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = FactoryArgs::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}
