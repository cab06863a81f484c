//! Error types for kbase.
//!
//! This module defines the crate-wide error type [`KbaseError`], the
//! [`CatalogError`] raised when the command catalog cannot be read or parsed,
//! and a [`Result`] alias. All errors use `thiserror` for the `Error` impls.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failure to read or parse a command catalog file.
///
/// Unlike [`KbaseError`], this type is `Clone` and `PartialEq` so it can be
/// carried inside session events and the session's error mode. The underlying
/// I/O or YAML error is captured as its display text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read {}: {message}", path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error text.
        message: String,
    },

    /// The catalog file was read but is not a valid command list.
    #[error("failed to parse {}: {message}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying YAML error text.
        message: String,
    },
}

impl CatalogError {
    /// Builds a [`CatalogError::Read`] from an I/O error.
    #[must_use]
    pub fn read(path: &Path, err: &std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Builds a [`CatalogError::Parse`] from a YAML error.
    #[must_use]
    pub fn parse(path: &Path, err: &serde_yaml::Error) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// The main error type for kbase operations.
///
/// Consolidates catalog, I/O, clipboard, editor, configuration and theme
/// failures. Catalog and I/O errors convert automatically via `#[from]`.
#[derive(Debug, Error)]
pub enum KbaseError {
    /// Command catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The system clipboard is unavailable or rejected the write.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The external editor could not be resolved, spawned, or exited badly.
    #[error("Editor error: {0}")]
    Editor(String),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file is unreadable or malformed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for kbase operations.
pub type Result<T> = std::result::Result<T, KbaseError>;
