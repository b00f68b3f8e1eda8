//! Centralized constants for config initialization.
//!
//! These values define the on-disk conventions that editors and tooling rely
//! on, so they must stay bit-exact across releases.

// =============================================================================
// Schema Reference Conventions
// =============================================================================

/// Top-level key holding the schema path in mapping-based configs (JSON, YAML).
pub const DEFAULT_SCHEMA_PROPERTY: &str = "$schema";

/// Leading comment understood by yaml-language-server as a schema declaration.
pub const DEFAULT_YAML_DECL_START: &str = "# yaml-language-server: $schema=";

/// Identifier field compared by `check_schema`.
pub const SCHEMA_ID_FIELD: &str = "$id";

// =============================================================================
// Format Names
// =============================================================================

pub const FORMAT_JSON: &str = "json";
pub const FORMAT_YAML: &str = "yaml";
pub const FORMAT_YAML_TEXT: &str = "yaml-text";
pub const FORMAT_TEXT: &str = "text";
pub const FORMAT_BINARY: &str = "binary";
