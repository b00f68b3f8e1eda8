//! Error types for config initialization.
//!
//! Responsibilities:
//! - Define the error variants surfaced by formats, initializers and managers.
//! - Provide a coarse `ErrorKind` view for callers that branch on category.
//!
//! Does NOT handle:
//! - Recovery. Every error propagates to the caller immediately.
//!
//! Invariants:
//! - Every filesystem-related variant carries the offending path.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while initializing, reading or loading configs.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Config file not found at {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to serialize {format} config: {source}")]
    Serialize {
        format: &'static str,
        #[source]
        source: ParseError,
    },

    /// Factory arguments were supplied but the default is not a factory.
    #[error("Factory arguments were supplied but the {format} default is not a factory")]
    InvalidDefault { format: &'static str },

    #[error("Operation '{operation}' is not supported by the {format} format")]
    UnsupportedOperation {
        format: &'static str,
        operation: &'static str,
    },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Format-level parse and serialization failures.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Coarse error category, mirroring the variants of [`InitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Parse,
    InvalidDefault,
    UnsupportedOperation,
    Io,
}

impl InitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InitError::NotFound { .. } => ErrorKind::NotFound,
            InitError::Parse { .. } | InitError::Serialize { .. } => ErrorKind::Parse,
            InitError::InvalidDefault { .. } => ErrorKind::InvalidDefault,
            InitError::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            InitError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Maps an I/O failure, folding `NotFound` into [`InitError::NotFound`].
    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            InitError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            InitError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn parse(path: &Path, source: impl Into<ParseError>) -> Self {
        InitError::Parse {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}
