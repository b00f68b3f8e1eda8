//! Schema sources: a literal JSON Schema or an accessor producing one.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Produces the application's schema on demand.
pub type SchemaAccessor = Arc<dyn Fn() -> Value + Send + Sync>;

/// Where an initializer gets its schema from.
#[derive(Clone, Default)]
pub enum SchemaSource {
    #[default]
    Absent,
    Literal(Value),
    /// Invoked on every access; callers cache inside the accessor if needed.
    Accessor(SchemaAccessor),
}

impl SchemaSource {
    pub fn literal(schema: Value) -> Self {
        SchemaSource::Literal(schema)
    }

    pub fn accessor<F>(accessor: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        SchemaSource::Accessor(Arc::new(accessor))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SchemaSource::Absent)
    }

    pub fn realize(&self) -> Option<Value> {
        match self {
            SchemaSource::Absent => None,
            SchemaSource::Literal(schema) => Some(schema.clone()),
            SchemaSource::Accessor(accessor) => Some(accessor()),
        }
    }
}

impl From<Value> for SchemaSource {
    fn from(schema: Value) -> Self {
        SchemaSource::Literal(schema)
    }
}

impl fmt::Debug for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaSource::Absent => f.write_str("Absent"),
            SchemaSource::Literal(schema) => f.debug_tuple("Literal").field(schema).finish(),
            SchemaSource::Accessor(_) => f.write_str("Accessor(..)"),
        }
    }
}
