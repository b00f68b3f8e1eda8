//! Config initializers: a format bound to a default and a schema.
//!
//! Responsibilities:
//! - Resolve defaults (literal or factory) and write them to disk.
//! - Embed or strip schema references according to the caller's options.
//! - Write the application's schema file and check whether it is current.
//!
//! Does NOT handle:
//! - Overwrite policy or templates (see `manager`).
//! - Schema validation of config content.
//!
//! Invariants:
//! - `init` always overwrites; callers decide whether it runs.
//! - Formats without a reference mechanism never expose a schema.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::constants::{FORMAT_JSON, SCHEMA_ID_FIELD};
use crate::error::InitError;
use crate::format::{
    BinaryFormat, ConfigFormat, JsonFormat, TextFormat, YamlFormat, YamlTextFormat, write_file,
};
use crate::path::schema_reference;
use crate::types::{DefaultConfig, FactoryArgs, SchemaSource};

pub type JsonInitializer = ConfigInitializer<JsonFormat>;
pub type YamlInitializer = ConfigInitializer<YamlFormat>;
pub type YamlTextInitializer = ConfigInitializer<YamlTextFormat>;
pub type TextInitializer = ConfigInitializer<TextFormat>;
pub type BinaryInitializer = ConfigInitializer<BinaryFormat>;

/// Options for [`ConfigInitializer::init`].
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Where the schema lives. The config references it relative to itself.
    pub schema_path: Option<PathBuf>,
    /// Embed a schema reference. When false, any reference in the default is removed.
    pub inject_schema: bool,
    /// Arguments forwarded to a factory default.
    pub args: FactoryArgs,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            schema_path: None,
            inject_schema: true,
            args: FactoryArgs::new(),
        }
    }
}

impl InitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema_path(mut self, schema_path: impl Into<PathBuf>) -> Self {
        self.schema_path = Some(schema_path.into());
        self
    }

    pub fn inject_schema(mut self, inject_schema: bool) -> Self {
        self.inject_schema = inject_schema;
        self
    }

    pub fn with_args(mut self, args: FactoryArgs) -> Self {
        self.args = args;
        self
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key, value);
        self
    }
}

/// Initializes configs of one format from a default value.
#[derive(Debug, Clone)]
pub struct ConfigInitializer<F: ConfigFormat> {
    format: F,
    default: DefaultConfig<F::Raw>,
    schema: SchemaSource,
}

impl<F: ConfigFormat> ConfigInitializer<F> {
    pub fn new(format: F, default: DefaultConfig<F::Raw>) -> Self {
        Self {
            format,
            default,
            schema: SchemaSource::Absent,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<SchemaSource>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn format(&self) -> &F {
        &self.format
    }

    pub fn default_config(&self) -> &DefaultConfig<F::Raw> {
        &self.default
    }

    /// The realized application schema, if this format can reference one.
    pub fn schema(&self) -> Option<Value> {
        if !self.format.supports_schema_reference() {
            return None;
        }
        self.schema.realize()
    }

    pub fn inject_schema_path(&self, config: &F::Raw, schema_path: &str) -> F::Raw {
        self.format.inject_schema_path(config, schema_path)
    }

    pub fn strip_schema_path(&self, config: &F::Raw) -> F::Raw {
        self.format.strip_schema_path(config)
    }

    pub fn serialize(&self, processed: &F::Raw) -> Result<Vec<u8>, InitError> {
        self.format
            .serialize(processed)
            .map_err(|source| InitError::Serialize {
                format: self.format.name(),
                source,
            })
    }

    pub fn write(&self, raw: &[u8], path: &Path) -> Result<(), InitError> {
        self.format.write(raw, path)
    }

    pub fn read(&self, path: &Path) -> Result<F::Raw, InitError> {
        self.format.read(path)
    }

    /// Writes the default config to `path`.
    ///
    /// Returns `Ok(false)` without touching disk when the default is
    /// [`DefaultConfig::Absent`].
    ///
    /// # Errors
    /// - [`InitError::InvalidDefault`] if `options.args` is non-empty and the
    ///   default is not a factory.
    /// - [`InitError::UnsupportedOperation`] if a schema reference is requested
    ///   for a format that cannot carry one.
    pub fn init(&self, path: &Path, options: &InitOptions) -> Result<bool, InitError> {
        let Some(default) = self.default.resolve(&options.args, self.format.name())? else {
            tracing::debug!(
                path = %path.display(),
                format = self.format.name(),
                "No default config, skipping initialization"
            );
            return Ok(false);
        };

        self.materialize(&default, path, options)?;
        Ok(true)
    }

    /// Applies schema options to `config`, then serializes and writes it.
    pub(crate) fn materialize(
        &self,
        config: &F::Raw,
        path: &Path,
        options: &InitOptions,
    ) -> Result<(), InitError> {
        let processed = match (&options.schema_path, options.inject_schema) {
            (Some(schema_path), true) => {
                if !self.format.supports_schema_reference() {
                    return Err(InitError::UnsupportedOperation {
                        format: self.format.name(),
                        operation: "inject_schema_path",
                    });
                }
                let reference = schema_reference(path, schema_path);
                self.format.inject_schema_path(config, &reference)
            }
            _ => self.format.strip_schema_path(config),
        };

        let raw = self.serialize(&processed)?;
        self.write(&raw, path)
    }

    /// Writes the application schema to `schema_path` as JSON.
    ///
    /// Returns whether a file was written: nothing happens without both a
    /// path and a schema.
    pub fn update_schema(&self, schema_path: Option<&Path>) -> Result<bool, InitError> {
        let (Some(schema_path), Some(schema)) = (schema_path, self.schema()) else {
            return Ok(false);
        };

        let content =
            serde_json::to_vec_pretty(&schema).map_err(|e| InitError::Serialize {
                format: FORMAT_JSON,
                source: e.into(),
            })?;
        write_file(schema_path, &content)?;

        tracing::debug!(path = %schema_path.display(), "Schema file written");
        Ok(true)
    }

    /// Checks whether the schema file at `schema_path` has the same `$id` as
    /// the application schema.
    ///
    /// A missing file, or a missing `$id` on either side, is not a match.
    /// Without an application schema there is nothing to be out of date, so
    /// the check passes.
    ///
    /// # Errors
    /// [`InitError::Parse`] if the schema file exists but is not valid JSON.
    pub fn check_schema(&self, schema_path: &Path) -> Result<bool, InitError> {
        let Some(schema) = self.schema() else {
            return Ok(true);
        };

        let content = match std::fs::read(schema_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(InitError::from_io(schema_path, e)),
        };
        let local: Value =
            serde_json::from_slice(&content).map_err(|e| InitError::parse(schema_path, e))?;

        let matches = match (local.get(SCHEMA_ID_FIELD), schema.get(SCHEMA_ID_FIELD)) {
            (Some(local_id), Some(app_id)) => local_id == app_id,
            _ => false,
        };

        if !matches {
            tracing::debug!(path = %schema_path.display(), "Schema file is out of date");
        }
        Ok(matches)
    }
}

impl ConfigInitializer<JsonFormat> {
    pub fn json(default: DefaultConfig<serde_json::Map<String, Value>>) -> Self {
        Self::new(JsonFormat::new(), default)
    }
}

impl ConfigInitializer<YamlFormat> {
    pub fn yaml(default: DefaultConfig<serde_yaml::Mapping>) -> Self {
        Self::new(YamlFormat::new(), default)
    }
}

impl ConfigInitializer<YamlTextFormat> {
    pub fn yaml_text(default: DefaultConfig<String>) -> Self {
        Self::new(YamlTextFormat::new(), default)
    }
}

impl ConfigInitializer<TextFormat> {
    pub fn text(default: DefaultConfig<String>) -> Self {
        Self::new(TextFormat, default)
    }
}

impl ConfigInitializer<BinaryFormat> {
    pub fn binary(default: DefaultConfig<Vec<u8>>) -> Self {
        Self::new(BinaryFormat, default)
    }
}
