//! Config managers: a config path, a schema path and an initializer bound together.
//!
//! Responsibilities:
//! - Resolve config and schema paths under a caller-supplied root.
//! - Decide whether `init` writes (existing files, overwrite, templates).
//! - Load the config into a typed value and memoize it per root.
//!
//! Does NOT handle:
//! - Serialization or schema references (see `format` and `initializer`).
//!
//! Invariants:
//! - An existing config is never rewritten unless `overwrite` is set.
//! - The schema file is refreshed on every `init` when a schema path is configured.
//! - The cache holds a single root; `init` does not invalidate it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::InitError;
use crate::format::ConfigFormat;
use crate::initializer::{ConfigInitializer, InitOptions};
use crate::types::FactoryArgs;

/// Options for [`ConfigManager::init`].
#[derive(Debug, Clone)]
pub struct ManagerInitOptions {
    /// Root of an existing project whose config seeds the new one.
    pub template: Option<PathBuf>,
    /// Rewrite the config even if it already exists.
    pub overwrite: bool,
    /// Embed a schema reference in the written config.
    pub inject_schema: bool,
    /// Arguments forwarded to a factory default.
    pub args: FactoryArgs,
}

impl Default for ManagerInitOptions {
    fn default() -> Self {
        Self {
            template: None,
            overwrite: false,
            inject_schema: true,
            args: FactoryArgs::new(),
        }
    }
}

impl ManagerInitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn inject_schema(mut self, inject_schema: bool) -> Self {
        self.inject_schema = inject_schema;
        self
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key, value);
        self
    }
}

struct CachedConfig<T> {
    root: PathBuf,
    config: Arc<T>,
}

/// Manages one config file (and optionally its schema) relative to a root.
pub struct ConfigManager<T, F: ConfigFormat> {
    /// Config path relative to the root.
    path: PathBuf,
    initializer: ConfigInitializer<F>,
    /// Schema path relative to the root.
    schema_path: Option<PathBuf>,
    cache: Option<CachedConfig<T>>,
}

impl<T, F> ConfigManager<T, F>
where
    T: DeserializeOwned,
    F: ConfigFormat,
{
    pub fn new(path: impl Into<PathBuf>, initializer: ConfigInitializer<F>) -> Self {
        Self {
            path: path.into(),
            initializer,
            schema_path: None,
            cache: None,
        }
    }

    pub fn with_schema_path(mut self, schema_path: impl Into<PathBuf>) -> Self {
        self.schema_path = Some(schema_path.into());
        self
    }

    pub fn initializer(&self) -> &ConfigInitializer<F> {
        &self.initializer
    }

    /// Returns the config path under `root`.
    pub fn config_path(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(&self.path)
    }

    /// Returns the schema path under `root`, if a schema path is configured.
    pub fn schema_path(&self, root: impl AsRef<Path>) -> Option<PathBuf> {
        self.schema_path
            .as_ref()
            .map(|schema_path| root.as_ref().join(schema_path))
    }

    /// Initializes the config under `root`.
    ///
    /// An existing config is left untouched unless `options.overwrite` is set.
    /// With a template, the template root's config replaces the default.
    /// The schema file is refreshed either way.
    ///
    /// Returns whether the config file was written.
    ///
    /// # Errors
    /// - [`InitError::NotFound`] if the template has no config.
    /// - [`InitError::InvalidDefault`] if factory arguments are combined with a
    ///   template or a non-factory default.
    pub fn init(
        &self,
        root: impl AsRef<Path>,
        options: &ManagerInitOptions,
    ) -> Result<bool, InitError> {
        let path = self.config_path(&root);
        let schema_path = self.schema_path(&root);

        let written = if path.exists() && !options.overwrite {
            tracing::warn!(path = %path.display(), "Ignoring existing config file");
            false
        } else {
            if path.exists() {
                tracing::warn!(path = %path.display(), "Overwriting existing config file");
            }

            let init_options = InitOptions {
                schema_path: schema_path.clone(),
                inject_schema: options.inject_schema,
                args: options.args.clone(),
            };

            match &options.template {
                Some(template) => self.init_from_template(template, &path, &init_options)?,
                None => self.initializer.init(&path, &init_options)?,
            }
        };

        self.initializer.update_schema(schema_path.as_deref())?;
        Ok(written)
    }

    fn init_from_template(
        &self,
        template: &Path,
        path: &Path,
        options: &InitOptions,
    ) -> Result<bool, InitError> {
        if !options.args.is_empty() {
            return Err(InitError::InvalidDefault {
                format: self.initializer.format().name(),
            });
        }

        let source = self.config_path(template);
        let config = self.initializer.read(&source)?;

        tracing::debug!(
            template = %source.display(),
            path = %path.display(),
            "Initializing config from template"
        );

        self.initializer.materialize(&config, path, options)?;
        Ok(true)
    }

    /// Loads the config under `root` as `T`, memoized per root.
    ///
    /// Repeated calls with the same root return the same `Arc` without
    /// touching disk. A different root replaces the cached entry. The schema
    /// reference is removed before `T` is constructed.
    ///
    /// # Errors
    /// [`InitError::NotFound`] if the config does not exist, [`InitError::Parse`]
    /// if it cannot be parsed or does not fit `T`. Nothing is cached on error.
    pub fn config(&mut self, root: impl AsRef<Path>) -> Result<Arc<T>, InitError> {
        let root = root.as_ref();

        if let Some(cached) = &self.cache
            && cached.root == root
        {
            tracing::debug!(root = %root.display(), "Config cache hit");
            return Ok(Arc::clone(&cached.config));
        }

        self.cache = None;

        let path = self.config_path(root);
        let raw = self.initializer.read(&path)?;
        let raw = self.initializer.strip_schema_path(&raw);
        let config = self
            .initializer
            .format()
            .construct::<T>(raw)
            .map_err(|e| InitError::parse(&path, e))?;

        tracing::debug!(path = %path.display(), "Config loaded");

        let config = Arc::new(config);
        self.cache = Some(CachedConfig {
            root: root.to_path_buf(),
            config: Arc::clone(&config),
        });
        Ok(config)
    }

    /// Drops the cached config so the next [`config`](Self::config) call reads from disk.
    pub fn clear_cache(&mut self) {
        self.cache = None;
    }
}
