//! Plain text and binary configs. Neither can carry a schema reference.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ConfigFormat;
use crate::constants::{FORMAT_BINARY, FORMAT_TEXT};
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextFormat;

impl ConfigFormat for TextFormat {
    type Raw = String;

    fn name(&self) -> &'static str {
        FORMAT_TEXT
    }

    fn supports_schema_reference(&self) -> bool {
        false
    }

    fn inject_schema_path(&self, config: &Self::Raw, _schema_path: &str) -> Self::Raw {
        config.clone()
    }

    fn strip_schema_path(&self, config: &Self::Raw) -> Self::Raw {
        config.clone()
    }

    fn serialize(&self, processed: &Self::Raw) -> Result<Vec<u8>, ParseError> {
        Ok(processed.clone().into_bytes())
    }

    fn deserialize(&self, bytes: Vec<u8>) -> Result<Self::Raw, ParseError> {
        Ok(String::from_utf8(bytes)?)
    }

    fn construct<T: DeserializeOwned>(&self, raw: Self::Raw) -> Result<T, ParseError> {
        Ok(serde_json::from_value(Value::String(raw))?)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryFormat;

impl ConfigFormat for BinaryFormat {
    type Raw = Vec<u8>;

    fn name(&self) -> &'static str {
        FORMAT_BINARY
    }

    fn supports_schema_reference(&self) -> bool {
        false
    }

    fn inject_schema_path(&self, config: &Self::Raw, _schema_path: &str) -> Self::Raw {
        config.clone()
    }

    fn strip_schema_path(&self, config: &Self::Raw) -> Self::Raw {
        config.clone()
    }

    fn serialize(&self, processed: &Self::Raw) -> Result<Vec<u8>, ParseError> {
        Ok(processed.clone())
    }

    fn deserialize(&self, bytes: Vec<u8>) -> Result<Self::Raw, ParseError> {
        Ok(bytes)
    }

    fn construct<T: DeserializeOwned>(&self, raw: Self::Raw) -> Result<T, ParseError> {
        Ok(serde_json::from_value(Value::from(raw))?)
    }
}
