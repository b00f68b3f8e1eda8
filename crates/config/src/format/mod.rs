//! Per-format serialization and schema-reference handling.
//!
//! Responsibilities:
//! - Define the `ConfigFormat` capability set shared by every format.
//! - Provide the disk read/write used by all formats.
//!
//! Does NOT handle:
//! - Default resolution or schema files (see `initializer`).
//! - Overwrite policy (see `manager`); `write` always overwrites.
//!
//! Invariants:
//! - `deserialize(serialize(x))` is semantically equal to `x`.
//! - `strip_schema_path(inject_schema_path(x, p)) == x` when `x` has no reference.
//! - Formats without a reference mechanism treat inject/strip as identity.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{InitError, ParseError};

mod json;
mod text;
mod yaml;

pub use json::JsonFormat;
pub use text::{BinaryFormat, TextFormat};
pub use yaml::{YamlFormat, YamlTextFormat};

/// Serialization and schema-reference conventions for one config format.
pub trait ConfigFormat {
    /// In-memory representation of a config in this format.
    type Raw: Clone;

    /// Short name used in errors and log fields.
    fn name(&self) -> &'static str;

    /// Whether configs in this format can carry a schema reference.
    fn supports_schema_reference(&self) -> bool {
        true
    }

    /// Returns a copy of `config` referencing `schema_path`, replacing any
    /// existing reference.
    fn inject_schema_path(&self, config: &Self::Raw, schema_path: &str) -> Self::Raw;

    /// Returns a copy of `config` with its schema reference removed, if any.
    fn strip_schema_path(&self, config: &Self::Raw) -> Self::Raw;

    /// Converts a processed config into the bytes written to disk.
    fn serialize(&self, processed: &Self::Raw) -> Result<Vec<u8>, ParseError>;

    /// Parses on-disk bytes back into the in-memory representation.
    fn deserialize(&self, bytes: Vec<u8>) -> Result<Self::Raw, ParseError>;

    /// Builds a typed config from a raw value: field-by-field for mappings,
    /// as a single value otherwise.
    fn construct<T: DeserializeOwned>(&self, raw: Self::Raw) -> Result<T, ParseError>;

    /// Writes serialized content to `path`, creating parent directories.
    fn write(&self, raw: &[u8], path: &Path) -> Result<(), InitError> {
        write_file(path, raw)?;

        tracing::debug!(
            path = %path.display(),
            format = self.name(),
            bytes = raw.len(),
            "Config file written"
        );

        Ok(())
    }

    /// Reads and parses the config at `path`.
    ///
    /// # Errors
    /// [`InitError::NotFound`] if the file does not exist, [`InitError::Parse`]
    /// if its content does not match the format.
    fn read(&self, path: &Path) -> Result<Self::Raw, InitError> {
        let bytes = std::fs::read(path).map_err(|e| InitError::from_io(path, e))?;
        self.deserialize(bytes).map_err(|e| InitError::parse(path, e))
    }
}

/// Writes `content` to `path`, creating missing parent directories.
pub(crate) fn write_file(path: &Path, content: &[u8]) -> Result<(), InitError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| InitError::from_io(parent, e))?;
    }

    std::fs::write(path, content).map_err(|e| InitError::from_io(path, e))
}
