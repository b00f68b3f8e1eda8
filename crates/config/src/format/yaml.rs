//! YAML configs, as a parsed mapping or as text with a leading comment.
//!
//! `YamlFormat` references its schema through a top-level key, the same way
//! JSON does. `YamlTextFormat` keeps the file as text so comments and layout
//! survive, and references the schema through a first-line declaration that
//! yaml-language-server understands.

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use super::ConfigFormat;
use crate::constants::{
    DEFAULT_SCHEMA_PROPERTY, DEFAULT_YAML_DECL_START, FORMAT_YAML, FORMAT_YAML_TEXT,
};
use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlFormat {
    schema_property: String,
}

impl YamlFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema_property(mut self, property: impl Into<String>) -> Self {
        self.schema_property = property.into();
        self
    }

    fn key(&self) -> Value {
        Value::String(self.schema_property.clone())
    }
}

impl Default for YamlFormat {
    fn default() -> Self {
        Self {
            schema_property: DEFAULT_SCHEMA_PROPERTY.to_string(),
        }
    }
}

impl ConfigFormat for YamlFormat {
    type Raw = Mapping;

    fn name(&self) -> &'static str {
        FORMAT_YAML
    }

    fn inject_schema_path(&self, config: &Self::Raw, schema_path: &str) -> Self::Raw {
        let mut copied = config.clone();
        copied.insert(self.key(), Value::String(schema_path.to_string()));
        copied
    }

    fn strip_schema_path(&self, config: &Self::Raw) -> Self::Raw {
        let mut copied = config.clone();
        copied.remove(self.schema_property.as_str());
        copied
    }

    fn serialize(&self, processed: &Self::Raw) -> Result<Vec<u8>, ParseError> {
        Ok(serde_yaml::to_string(processed)?.into_bytes())
    }

    fn deserialize(&self, bytes: Vec<u8>) -> Result<Self::Raw, ParseError> {
        // An empty document is an empty mapping, not a parse failure.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Mapping::new());
        }
        Ok(serde_yaml::from_slice(&bytes)?)
    }

    fn construct<T: DeserializeOwned>(&self, raw: Self::Raw) -> Result<T, ParseError> {
        Ok(serde_yaml::from_value(Value::Mapping(raw))?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlTextFormat {
    decl_start: String,
}

impl YamlTextFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `decl_start` as the schema declaration prefix.
    pub fn with_decl_start(mut self, decl_start: impl Into<String>) -> Self {
        self.decl_start = decl_start.into();
        self
    }

    pub fn decl_start(&self) -> &str {
        &self.decl_start
    }

    fn is_declaration(&self, line: &str) -> bool {
        line.trim_start().starts_with(&self.decl_start)
    }
}

impl Default for YamlTextFormat {
    fn default() -> Self {
        Self {
            decl_start: DEFAULT_YAML_DECL_START.to_string(),
        }
    }
}

impl ConfigFormat for YamlTextFormat {
    type Raw = String;

    fn name(&self) -> &'static str {
        FORMAT_YAML_TEXT
    }

    fn inject_schema_path(&self, config: &Self::Raw, schema_path: &str) -> Self::Raw {
        let decl = format!("{}{}\n", self.decl_start, schema_path);

        match config.split_inclusive('\n').next() {
            Some(first) if self.is_declaration(first) => {
                format!("{decl}{}", &config[first.len()..])
            }
            _ => format!("{decl}{config}"),
        }
    }

    fn strip_schema_path(&self, config: &Self::Raw) -> Self::Raw {
        match config.split_inclusive('\n').next() {
            Some(first) if self.is_declaration(first) => config[first.len()..].to_string(),
            _ => config.clone(),
        }
    }

    fn serialize(&self, processed: &Self::Raw) -> Result<Vec<u8>, ParseError> {
        Ok(processed.clone().into_bytes())
    }

    fn deserialize(&self, bytes: Vec<u8>) -> Result<Self::Raw, ParseError> {
        let text = String::from_utf8(bytes)?;
        serde_yaml::from_str::<Value>(&text)?;
        Ok(text)
    }

    fn construct<T: DeserializeOwned>(&self, raw: Self::Raw) -> Result<T, ParseError> {
        Ok(serde_yaml::from_str(&raw)?)
    }
}
