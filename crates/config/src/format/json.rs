//! JSON configs, referencing their schema through a top-level `$schema` key.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::ConfigFormat;
use crate::constants::{DEFAULT_SCHEMA_PROPERTY, FORMAT_JSON};
use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormat {
    schema_property: String,
}

impl JsonFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `property` instead of `$schema` as the reference key.
    pub fn with_schema_property(mut self, property: impl Into<String>) -> Self {
        self.schema_property = property.into();
        self
    }

    pub fn schema_property(&self) -> &str {
        &self.schema_property
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self {
            schema_property: DEFAULT_SCHEMA_PROPERTY.to_string(),
        }
    }
}

impl ConfigFormat for JsonFormat {
    type Raw = Map<String, Value>;

    fn name(&self) -> &'static str {
        FORMAT_JSON
    }

    fn inject_schema_path(&self, config: &Self::Raw, schema_path: &str) -> Self::Raw {
        let mut copied = config.clone();
        copied.insert(
            self.schema_property.clone(),
            Value::String(schema_path.to_string()),
        );
        copied
    }

    fn strip_schema_path(&self, config: &Self::Raw) -> Self::Raw {
        let mut copied = config.clone();
        copied.remove(&self.schema_property);
        copied
    }

    fn serialize(&self, processed: &Self::Raw) -> Result<Vec<u8>, ParseError> {
        Ok(serde_json::to_vec_pretty(processed)?)
    }

    fn deserialize(&self, bytes: Vec<u8>) -> Result<Self::Raw, ParseError> {
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn construct<T: DeserializeOwned>(&self, raw: Self::Raw) -> Result<T, ParseError> {
        Ok(serde_json::from_value(Value::Object(raw))?)
    }
}
