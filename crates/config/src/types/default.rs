//! Default config values: either a literal or a factory.
//!
//! Responsibilities:
//! - Represent the default a config is initialized from.
//! - Resolve it lazily at `init` time, forwarding factory arguments.
//!
//! Invariants:
//! - Factory arguments are only accepted by the `Factory` variant.
//! - `Absent` resolves to `None`, meaning nothing is written.

use std::fmt;
use std::sync::Arc;

use crate::error::InitError;
use crate::types::FactoryArgs;

/// Produces a default config from forwarded arguments.
pub type Factory<R> = Arc<dyn Fn(&FactoryArgs) -> R + Send + Sync>;

/// The default a config file is created from.
pub enum DefaultConfig<R> {
    /// No default; `init` is a no-op.
    Absent,
    Literal(R),
    Factory(Factory<R>),
}

impl<R> DefaultConfig<R> {
    pub fn literal(value: R) -> Self {
        DefaultConfig::Literal(value)
    }

    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&FactoryArgs) -> R + Send + Sync + 'static,
    {
        DefaultConfig::Factory(Arc::new(factory))
    }

    pub fn is_factory(&self) -> bool {
        matches!(self, DefaultConfig::Factory(_))
    }
}

impl<R: Clone> DefaultConfig<R> {
    /// Resolves the default, calling the factory with `args` when present.
    ///
    /// # Errors
    /// Returns [`InitError::InvalidDefault`] when `args` is non-empty and the
    /// default is not a factory.
    pub(crate) fn resolve(
        &self,
        args: &FactoryArgs,
        format: &'static str,
    ) -> Result<Option<R>, InitError> {
        match self {
            DefaultConfig::Factory(factory) => Ok(Some(factory(args))),
            _ if !args.is_empty() => Err(InitError::InvalidDefault { format }),
            DefaultConfig::Literal(value) => Ok(Some(value.clone())),
            DefaultConfig::Absent => Ok(None),
        }
    }
}

impl<R: Clone> Clone for DefaultConfig<R> {
    fn clone(&self) -> Self {
        match self {
            DefaultConfig::Absent => DefaultConfig::Absent,
            DefaultConfig::Literal(value) => DefaultConfig::Literal(value.clone()),
            DefaultConfig::Factory(factory) => DefaultConfig::Factory(Arc::clone(factory)),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for DefaultConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultConfig::Absent => f.write_str("Absent"),
            DefaultConfig::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            DefaultConfig::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_literal_resolves_to_clone() {
        let default = DefaultConfig::literal("hello".to_string());
        let resolved = default.resolve(&FactoryArgs::new(), "text").unwrap();
        assert_eq!(resolved.as_deref(), Some("hello"));
    }

    #[test]
    fn test_factory_receives_args() {
        let default = DefaultConfig::factory(|args: &FactoryArgs| {
            args.get_str("name").unwrap_or("John Doe").to_string()
        });

        let plain = default.resolve(&FactoryArgs::new(), "text").unwrap();
        assert_eq!(plain.as_deref(), Some("John Doe"));

        let args = FactoryArgs::new().with("name", "Jane");
        let named = default.resolve(&args, "text").unwrap();
        assert_eq!(named.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_literal_rejects_args() {
        let default = DefaultConfig::literal("hello".to_string());
        let args = FactoryArgs::new().with("name", "Jane");
        let err = default.resolve(&args, "text").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDefault);
    }

    #[test]
    fn test_absent_resolves_to_none() {
        let default: DefaultConfig<String> = DefaultConfig::Absent;
        assert!(default.resolve(&FactoryArgs::new(), "text").unwrap().is_none());

        let args = FactoryArgs::new().with("name", "Jane");
        assert!(default.resolve(&args, "text").is_err());
    }
}
