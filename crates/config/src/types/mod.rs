//! Value types shared by initializers and managers.
//!
//! Responsibilities:
//! - Represent defaults as a literal or a factory (`DefaultConfig`).
//! - Represent schemas as a literal or an accessor (`SchemaSource`).
//! - Carry named factory arguments (`FactoryArgs`).
//!
//! Does NOT handle:
//! - Serialization or file I/O (see `format` module).
//!
//! Invariants:
//! - Factories and accessors are resolved lazily, at the point of use.

mod args;
mod default;
mod schema;

pub use args::FactoryArgs;
pub use default::{DefaultConfig, Factory};
pub use schema::{SchemaAccessor, SchemaSource};
