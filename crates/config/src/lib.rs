//! Config file initialization with editor-facing schema references.
//!
//! This crate writes application config files from a default value (literal
//! or factory-produced), optionally embedding a reference to a JSON Schema so
//! editors can validate and autocomplete them. Formats plug in through the
//! [`ConfigFormat`] trait; [`ConfigManager`] adds root-relative paths,
//! templates, overwrite control and a cached typed view of the config.

pub mod constants;
mod error;
pub mod format;
mod initializer;
mod manager;
mod path;
pub mod types;

pub use error::{ErrorKind, InitError, ParseError};
pub use format::{BinaryFormat, ConfigFormat, JsonFormat, TextFormat, YamlFormat, YamlTextFormat};
pub use initializer::{
    BinaryInitializer, ConfigInitializer, InitOptions, JsonInitializer, TextInitializer,
    YamlInitializer, YamlTextInitializer,
};
pub use manager::{ConfigManager, ManagerInitOptions};
pub use types::{DefaultConfig, FactoryArgs, SchemaSource};
